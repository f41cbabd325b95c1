use fake::Fake;
use fake::faker::lorem::en::Paragraph;

use super::auth::{AuthError, AuthHelper};
use crate::Store;
use crate::browser::BrowserContext;
use crate::builders::{BookBuilder, BookFields, BuilderError, CreatedUser, UserBuilder};
use crate::domain::books::{Book, NewBook};
use crate::domain::ids::{BookId, UserId};
use crate::domain::reviews::{NewReview, Rating, Review};
use crate::infrastructure::session::SessionClient;

/// Scenario setup shared by the page suites: signed-in users, owned books, reviews.
pub struct ScenarioHelper<'a, B: ?Sized> {
    auth: AuthHelper<'a, B>,
    store: Store,
}

impl<'a, B> ScenarioHelper<'a, B>
where
    B: BrowserContext + ?Sized,
{
    pub fn new(browser: &'a B, sessions: SessionClient, store: Store) -> Self {
        Self {
            auth: AuthHelper::new(browser, sessions, store.clone()),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn create_and_login_user(
        &self,
        user: UserBuilder,
    ) -> Result<CreatedUser, AuthError> {
        self.auth.login_user(user).await
    }

    /// Persists `book` for an owner who already exists; `owner` replaces the
    /// fields' user id.
    pub async fn create_book(
        &self,
        owner: &UserId,
        mut book: BookFields,
    ) -> Result<Book, BuilderError> {
        book.user_id = owner.clone();
        Ok(self.store.books.insert(NewBook::from(book)).await?)
    }

    pub async fn create_review(
        &self,
        book_id: &BookId,
        user_id: &UserId,
        rating: Rating,
        content: impl Into<String>,
    ) -> Result<Review, BuilderError> {
        let review = self
            .store
            .reviews
            .insert(NewReview {
                content: content.into(),
                rating,
                book_id: book_id.clone(),
                user_id: user_id.clone(),
            })
            .await?;
        Ok(review)
    }

    /// A review with the default rating and generated content.
    pub async fn create_default_review(
        &self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> Result<Review, BuilderError> {
        let content: String = Paragraph(2..4).fake();
        self.create_review(book_id, user_id, Rating::default(), content)
            .await
    }

    pub async fn cleanup_user(&self, email: &str) -> Result<(), BuilderError> {
        UserBuilder::delete(&self.store, email).await
    }

    pub async fn cleanup_book(&self, id: &BookId) -> Result<(), BuilderError> {
        BookBuilder::delete(&self.store, id).await
    }
}
