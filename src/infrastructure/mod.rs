pub mod database;
pub mod repositories;
pub mod session;
