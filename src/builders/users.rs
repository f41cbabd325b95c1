use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{BuilderError, Draft, FieldSet, generate};
use crate::Store;
use crate::domain::ids::UserId;
use crate::domain::users::{NewUser, UserWithProfile};

/// bcrypt work factor the application uses for stored passwords.
pub const PASSWORD_HASH_COST: u32 = 10;

/// Required fields of an account as a test sees it, password in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum UserField {
    Id(UserId),
    Email(String),
    Password(String),
    Name(String),
}

impl FieldSet for TestUser {
    type Field = UserField;

    fn generate() -> Self {
        Self {
            id: UserId::generate(),
            email: generate::email(),
            password: generate::password(),
            name: generate::full_name(),
        }
    }

    fn apply(&mut self, field: UserField) {
        match field {
            UserField::Id(id) => self.id = id,
            UserField::Email(email) => self.email = email,
            UserField::Password(password) => self.password = password,
            UserField::Name(name) => self.name = name,
        }
    }
}

/// Result of [`UserBuilder::create`].
///
/// Differs from the stored row on purpose: `password` is the plaintext the
/// builder hashed, since the hash cannot be used to sign in.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedUser {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CreatedUser {
    fn from_persisted(persisted: UserWithProfile, plaintext: String) -> Self {
        let UserWithProfile { user, profile } = persisted;
        Self {
            id: user.id,
            email: user.email,
            password: plaintext,
            name: profile.map(|p| p.name),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    draft: Draft<TestUser>,
}

impl UserBuilder {
    pub fn a_user() -> Self {
        Self::default()
    }

    pub fn with(self, field: UserField) -> Self {
        Self {
            draft: self.draft.with(field),
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with(UserField::Email(email.into()))
    }

    pub fn with_password(self, password: impl Into<String>) -> Self {
        self.with(UserField::Password(password.into()))
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with(UserField::Name(name.into()))
    }

    pub fn fields(&self) -> &TestUser {
        self.draft.fields()
    }

    pub fn build(&self) -> TestUser {
        self.draft.build()
    }

    /// Hashes the password and persists the account with its profile.
    pub async fn create(&self, store: &Store) -> Result<CreatedUser, BuilderError> {
        let fields = self.build();
        let password_hash = hash_password(fields.password.clone()).await?;

        let persisted = store
            .users
            .insert(NewUser::new(
                fields.id,
                fields.email,
                password_hash,
                fields.name,
            ))
            .await?;

        Ok(CreatedUser::from_persisted(persisted, fields.password))
    }

    pub async fn delete(store: &Store, email: &str) -> Result<(), BuilderError> {
        store.users.delete_by_email(email).await?;
        Ok(())
    }
}

async fn hash_password(plaintext: String) -> Result<String, BuilderError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, PASSWORD_HASH_COST))
        .await
        .map_err(|err| BuilderError::Hashing(err.to_string()))?
        .map_err(|err| BuilderError::Hashing(err.to_string()))
}
