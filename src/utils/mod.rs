pub mod formatting;
pub mod locale;
