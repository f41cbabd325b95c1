use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::books::{Book, NewBook};
use crate::domain::ids::{BookId, UserId};
use crate::domain::reviews::{NewReview, Review};
use crate::domain::users::{NewUser, UserWithProfile};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the account and its profile together.
    async fn insert(&self, user: NewUser) -> Result<UserWithProfile, RepositoryError>;
    async fn get(&self, id: &UserId) -> Result<UserWithProfile, RepositoryError>;
    async fn get_by_email(&self, email: &str) -> Result<UserWithProfile, RepositoryError>;
    /// Removes exactly one account; `NotFound` when no row matches.
    async fn delete_by_email(&self, email: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn insert(&self, book: NewBook) -> Result<Book, RepositoryError>;
    async fn get(&self, id: &BookId) -> Result<Book, RepositoryError>;
    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, RepositoryError>;
    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<Book>, RepositoryError>;
    /// Removes exactly one book; `NotFound` when no row matches.
    async fn delete(&self, id: &BookId) -> Result<(), RepositoryError>;
    /// Removes every book, returning how many rows went.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, review: NewReview) -> Result<Review, RepositoryError>;
    async fn find_for(
        &self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> Result<Option<Review>, RepositoryError>;
    async fn list_for_book(&self, book_id: &BookId) -> Result<Vec<Review>, RepositoryError>;
}
