pub mod input;
pub mod statuses;
pub mod summarize;
pub mod validate;
