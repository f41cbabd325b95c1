use serde::Serialize;

use super::{BuilderError, CreatedUser, Draft, FieldSet, UserBuilder, generate};
use crate::Store;
use crate::domain::books::{Book, NewBook};
use crate::domain::ids::{BookId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookFields {
    pub id: BookId,
    pub title: String,
    pub description: String,
    /// Placeholder until [`BookBuilder::create`] substitutes the real owner.
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub enum BookField {
    Id(BookId),
    Title(String),
    Description(String),
    UserId(UserId),
}

impl FieldSet for BookFields {
    type Field = BookField;

    fn generate() -> Self {
        Self {
            id: BookId::generate(),
            title: generate::title(),
            description: generate::paragraph(),
            user_id: UserId::generate(),
        }
    }

    fn apply(&mut self, field: BookField) {
        match field {
            BookField::Id(id) => self.id = id,
            BookField::Title(title) => self.title = title,
            BookField::Description(description) => self.description = description,
            BookField::UserId(user_id) => self.user_id = user_id,
        }
    }
}

impl From<BookFields> for NewBook {
    fn from(fields: BookFields) -> Self {
        NewBook::new(fields.id, fields.title, fields.description, fields.user_id)
    }
}

/// A persisted book together with the account created to own it.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedBook {
    pub book: Book,
    pub owner: CreatedUser,
}

#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    draft: Draft<BookFields>,
    owner: Option<UserBuilder>,
}

impl BookBuilder {
    pub fn a_book() -> Self {
        Self::default()
    }

    pub fn with(self, field: BookField) -> Self {
        Self {
            draft: self.draft.with(field),
            owner: self.owner,
        }
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with(BookField::Title(title.into()))
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with(BookField::Description(description.into()))
    }

    /// Owner to persist ahead of the book instead of a generated one.
    pub fn with_user(self, owner: UserBuilder) -> Self {
        Self {
            draft: self.draft,
            owner: Some(owner),
        }
    }

    pub fn fields(&self) -> &BookFields {
        self.draft.fields()
    }

    pub fn build(&self) -> BookFields {
        self.draft.build()
    }

    /// Persists the owner first, then the book pointing at it.
    ///
    /// Without [`with_user`](Self::with_user) a default [`UserBuilder`] supplies the owner.
    pub async fn create(&self, store: &Store) -> Result<CreatedBook, BuilderError> {
        let owner_builder = self.owner.clone().unwrap_or_default();
        let owner = owner_builder.create(store).await?;

        let mut fields = self.build();
        fields.user_id = owner.id.clone();

        let book = store.books.insert(fields.into()).await?;

        Ok(CreatedBook { book, owner })
    }

    pub async fn delete(store: &Store, id: &BookId) -> Result<(), BuilderError> {
        store.books.delete(id).await?;
        Ok(())
    }

    pub async fn delete_all(store: &Store) -> Result<u64, BuilderError> {
        Ok(store.books.delete_all().await?)
    }

    pub async fn find_by_title(store: &Store, title: &str) -> Result<Vec<Book>, BuilderError> {
        Ok(store.books.find_by_title(title).await?)
    }
}
