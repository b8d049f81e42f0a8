pub mod day_group;
pub mod lesson;
pub mod row;
