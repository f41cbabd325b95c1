pub mod books;
pub mod errors;
pub mod ids;
pub mod repositories;
pub mod reviews;
pub mod users;

pub use errors::RepositoryError;
