pub mod messages;
pub mod names;
