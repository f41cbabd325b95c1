use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::domain::RepositoryError;

pub type DatabasePool = SqlitePool;

/// Tables the application's ORM owns, with its naming. Used to stand up a local
/// or in-memory store; never run against the application's own database.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS "User" (
    id TEXT PRIMARY KEY NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    "createdAt" TEXT NOT NULL,
    "updatedAt" TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "Profile" (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    "userId" TEXT NOT NULL UNIQUE REFERENCES "User"(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS "Book" (
    id TEXT PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    "userId" TEXT NOT NULL REFERENCES "User"(id) ON DELETE RESTRICT,
    "createdAt" TEXT NOT NULL,
    "updatedAt" TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS "Review" (
    id TEXT PRIMARY KEY NOT NULL,
    content TEXT NOT NULL,
    rating INTEGER NOT NULL,
    "bookId" TEXT NOT NULL REFERENCES "Book"(id) ON DELETE CASCADE,
    "userId" TEXT NOT NULL REFERENCES "User"(id) ON DELETE CASCADE,
    "createdAt" TEXT NOT NULL,
    "updatedAt" TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS "Book_userId_idx" ON "Book"("userId");
CREATE INDEX IF NOT EXISTS "Review_bookId_idx" ON "Review"("bookId");
"#;

#[derive(Clone)]
pub struct Database {
    pool: DatabasePool,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|err| RepositoryError::unexpected(format!("invalid database url: {err}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` is its own database, so keep exactly one alive.
        let pool_options = if is_memory_url(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url, "connected to database");

        Ok(Self { pool })
    }

    /// Connects to a private in-memory store with the tables already created.
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let database = Self::connect("sqlite::memory:").await?;
        database.install_schema().await?;
        Ok(database)
    }

    pub async fn install_schema(&self) -> Result<(), RepositoryError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub fn clone_pool(&self) -> DatabasePool {
        self.pool.clone()
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
