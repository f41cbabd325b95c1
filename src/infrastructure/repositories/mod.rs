pub mod books;
pub mod reviews;
pub mod users;

pub use books::SqlBookRepository;
pub use reviews::SqlReviewRepository;
pub use users::SqlUserRepository;
