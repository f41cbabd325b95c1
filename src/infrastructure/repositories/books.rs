use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as};

use crate::domain::RepositoryError;
use crate::domain::books::{Book, NewBook};
use crate::domain::ids::{BookId, UserId};
use crate::domain::repositories::BookRepository;
use crate::infrastructure::database::DatabasePool;

const SELECT_BOOK: &str = r#"
SELECT id, title, description, "userId" AS user_id, "createdAt" AS created_at, "updatedAt" AS updated_at
FROM "Book""#;

#[derive(Clone)]
pub struct SqlBookRepository {
    pool: DatabasePool,
}

impl SqlBookRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookRecord {
    id: String,
    title: String,
    description: String,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRecord> for Book {
    fn from(record: BookRecord) -> Self {
        Book {
            id: BookId::from(record.id),
            title: record.title,
            description: record.description,
            user_id: UserId::from(record.user_id),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[async_trait]
impl BookRepository for SqlBookRepository {
    async fn insert(&self, new_book: NewBook) -> Result<Book, RepositoryError> {
        let now = Utc::now();

        query(
            r#"INSERT INTO "Book" (id, title, description, "userId", "createdAt", "updatedAt")
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(new_book.id.as_str())
        .bind(&new_book.title)
        .bind(&new_book.description)
        .bind(new_book.user_id.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|err| RepositoryError::from_write(err, "a book with this id already exists"))?;

        tracing::debug!(book.id = %new_book.id, user.id = %new_book.user_id, "inserted book");

        Ok(Book {
            id: new_book.id,
            title: new_book.title,
            description: new_book.description,
            user_id: new_book.user_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: &BookId) -> Result<Book, RepositoryError> {
        let record = query_as::<_, BookRecord>(&format!("{SELECT_BOOK} WHERE id = ?"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(record.into())
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, RepositoryError> {
        let records = query_as::<_, BookRecord>(&format!(
            r#"{SELECT_BOOK} WHERE title = ? ORDER BY "createdAt" ASC"#
        ))
        .bind(title)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Book::from).collect())
    }

    async fn list_for_owner(&self, user_id: &UserId) -> Result<Vec<Book>, RepositoryError> {
        let records = query_as::<_, BookRecord>(&format!(
            r#"{SELECT_BOOK} WHERE "userId" = ? ORDER BY "createdAt" ASC"#
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Book::from).collect())
    }

    async fn delete(&self, id: &BookId) -> Result<(), RepositoryError> {
        let result = query(r#"DELETE FROM "Book" WHERE id = ?"#)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|err| RepositoryError::from_write(err, "book could not be deleted"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(book.id = %id, "deleted book");
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = query(r#"DELETE FROM "Book""#)
            .execute(&self.pool)
            .await
            .map_err(|err| RepositoryError::from_write(err, "books could not be deleted"))?;

        let deleted = result.rows_affected();
        tracing::debug!(deleted, "deleted all books");
        Ok(deleted)
    }
}
