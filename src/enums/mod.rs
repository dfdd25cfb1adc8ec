pub mod common;
pub mod meals;
pub mod users;
