//! Per-test collaborators and teardown.
//!
//! A [`Harness`] owns what a test process shares: configuration and the
//! [`Store`]. Each test asks it for [`TestFixtures`], which are always built
//! fresh, so no builder override or tracked row can leak into another test.

#[cfg(feature = "e2e")]
use crate::browser::{BrowserError, BrowserSession};
use crate::builders::{BookBuilder, BuilderError, UserBuilder};
use crate::domain::RepositoryError;
use crate::domain::ids::BookId;
#[cfg(feature = "e2e")]
use crate::helpers::registration::RegistrationHelper;
use crate::infrastructure::database::Database;
use crate::infrastructure::session::SessionClient;
use crate::{HarnessConfig, Store};

pub struct Harness {
    config: HarnessConfig,
    database: Database,
    store: Store,
}

impl Harness {
    pub async fn connect(config: HarnessConfig) -> Result<Self, RepositoryError> {
        let database = Database::connect(&config.database_url).await?;
        Ok(Self::with_database(config, database))
    }

    pub fn with_database(config: HarnessConfig, database: Database) -> Self {
        let store = Store::from_database(&database);
        Self {
            config,
            database,
            store,
        }
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn sessions(&self) -> SessionClient {
        SessionClient::new(self.config.base_url.clone())
    }

    pub fn fixtures(&self) -> TestFixtures {
        TestFixtures {
            store: self.store.clone(),
            sessions: self.sessions(),
            user_builder: UserBuilder::a_user(),
            book_builder: BookBuilder::a_book(),
            cleanup: Cleanup::default(),
        }
    }

    /// A new browser for one test; the caller quits it.
    #[cfg(feature = "e2e")]
    pub async fn browser(&self) -> Result<BrowserSession, BrowserError> {
        BrowserSession::new(&self.config).await
    }

    #[cfg(feature = "e2e")]
    pub async fn registration_helper(&self) -> Result<RegistrationHelper, BrowserError> {
        Ok(RegistrationHelper::new(self.browser().await?))
    }

    pub async fn close(&self) {
        self.database.close().await;
    }
}

/// Collaborators handed to a single test.
pub struct TestFixtures {
    pub store: Store,
    pub sessions: SessionClient,
    pub user_builder: UserBuilder,
    pub book_builder: BookBuilder,
    pub cleanup: Cleanup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupStep {
    Book(BookId),
    User(String),
    AllBooks,
}

/// Rows a test created, deleted in the order they were tracked.
///
/// Books must be tracked before their owners: a user who still owns a book
/// cannot be deleted.
#[derive(Debug, Default)]
pub struct Cleanup {
    steps: Vec<CleanupStep>,
}

impl Cleanup {
    pub fn book(&mut self, id: &BookId) -> &mut Self {
        self.steps.push(CleanupStep::Book(id.clone()));
        self
    }

    pub fn user(&mut self, email: &str) -> &mut Self {
        self.steps.push(CleanupStep::User(email.to_string()));
        self
    }

    pub fn all_books(&mut self) -> &mut Self {
        self.steps.push(CleanupStep::AllBooks);
        self
    }

    pub fn steps(&self) -> &[CleanupStep] {
        &self.steps
    }

    /// Runs every step, stopping at the first failure. A row that is already gone is a failure.
    pub async fn run(self, store: &Store) -> Result<(), BuilderError> {
        for step in self.steps {
            match &step {
                CleanupStep::Book(id) => BookBuilder::delete(store, id).await?,
                CleanupStep::User(email) => UserBuilder::delete(store, email).await?,
                CleanupStep::AllBooks => {
                    BookBuilder::delete_all(store).await?;
                }
            }
            tracing::debug!(?step, "cleanup step done");
        }
        Ok(())
    }
}
