pub mod annotator;
pub mod grouper;
