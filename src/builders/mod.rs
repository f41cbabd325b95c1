//! Test-data builders for the application's entities.
//!
//! A builder starts from a complete, valid set of generated fields, accepts
//! one-field overrides, and either materializes the fields in memory
//! ([`Draft::build`]) or persists them through an explicitly supplied
//! [`Store`](crate::Store).
//!
//! ```ignore
//! let user = UserBuilder::a_user().with_name("A").build();
//! let created = BookBuilder::a_book().with_title("Dune").create(&store).await?;
//! ```

mod books;
mod generate;
mod users;

pub use books::{BookBuilder, BookField, BookFields, CreatedBook};
pub use users::{CreatedUser, PASSWORD_HASH_COST, TestUser, UserBuilder, UserField};

use thiserror::Error;

use crate::domain::RepositoryError;

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("failed to hash password: {0}")]
    Hashing(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A record whose every required field always holds a value.
///
/// `Field` enumerates the overridable keys, each variant carrying a value of
/// that key's type, so an override can never name an unknown key or the
/// wrong value type.
pub trait FieldSet: Clone + Send + Sync + 'static {
    type Field;

    /// Fresh random values that satisfy the record's constraints.
    fn generate() -> Self;

    fn apply(&mut self, field: Self::Field);
}

/// Partially-overridden record awaiting materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft<F> {
    fields: F,
}

impl<F: FieldSet> Draft<F> {
    pub fn generated() -> Self {
        Self {
            fields: F::generate(),
        }
    }

    /// Replaces a single field, leaving every other field untouched.
    pub fn with(mut self, field: F::Field) -> Self {
        self.fields.apply(field);
        self
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn build(&self) -> F {
        self.fields.clone()
    }
}

impl<F: FieldSet> Default for Draft<F> {
    fn default() -> Self {
        Self::generated()
    }
}
