pub mod caterer;
pub mod meal;
pub mod user;
