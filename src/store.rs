use std::sync::Arc;

use crate::domain::repositories::{BookRepository, ReviewRepository, UserRepository};
use crate::infrastructure::database::Database;
use crate::infrastructure::repositories::{
    SqlBookRepository, SqlReviewRepository, SqlUserRepository,
};

/// Handle to the application's data, passed explicitly to every builder and helper.
///
/// Cloning is cheap and every clone talks to the same pool. Tests keep their rows
/// disjoint through generated keys rather than by locking.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<dyn UserRepository>,
    pub books: Arc<dyn BookRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
}

impl Store {
    pub fn from_database(database: &Database) -> Self {
        let pool = database.clone_pool();
        Self {
            users: Arc::new(SqlUserRepository::new(pool.clone())),
            books: Arc::new(SqlBookRepository::new(pool.clone())),
            reviews: Arc::new(SqlReviewRepository::new(pool)),
        }
    }
}
