use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as};

use crate::domain::RepositoryError;
use crate::domain::ids::{BookId, ReviewId, UserId};
use crate::domain::repositories::ReviewRepository;
use crate::domain::reviews::{NewReview, Rating, Review};
use crate::infrastructure::database::DatabasePool;

const SELECT_REVIEW: &str = r#"
SELECT id, content, rating, "bookId" AS book_id, "userId" AS user_id, "createdAt" AS created_at
FROM "Review""#;

#[derive(Clone)]
pub struct SqlReviewRepository {
    pool: DatabasePool,
}

impl SqlReviewRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRecord {
    id: String,
    content: String,
    rating: i64,
    book_id: String,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRecord> for Review {
    type Error = RepositoryError;

    fn try_from(record: ReviewRecord) -> Result<Self, Self::Error> {
        let rating = Rating::try_from(record.rating)
            .map_err(|err| RepositoryError::unexpected(err.to_string()))?;

        Ok(Review {
            id: ReviewId::from(record.id),
            content: record.content,
            rating,
            book_id: BookId::from(record.book_id),
            user_id: UserId::from(record.user_id),
            created_at: record.created_at,
        })
    }
}

#[async_trait]
impl ReviewRepository for SqlReviewRepository {
    async fn insert(&self, new_review: NewReview) -> Result<Review, RepositoryError> {
        let id = ReviewId::generate();
        let now = Utc::now();

        query(
            r#"INSERT INTO "Review" (id, content, rating, "bookId", "userId", "createdAt", "updatedAt")
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(id.as_str())
        .bind(&new_review.content)
        .bind(i64::from(new_review.rating.value()))
        .bind(new_review.book_id.as_str())
        .bind(new_review.user_id.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|err| RepositoryError::from_write(err, "a review with this id already exists"))?;

        tracing::debug!(
            review.id = %id,
            book.id = %new_review.book_id,
            user.id = %new_review.user_id,
            "inserted review"
        );

        Ok(Review {
            id,
            content: new_review.content,
            rating: new_review.rating,
            book_id: new_review.book_id,
            user_id: new_review.user_id,
            created_at: now,
        })
    }

    async fn find_for(
        &self,
        book_id: &BookId,
        user_id: &UserId,
    ) -> Result<Option<Review>, RepositoryError> {
        query_as::<_, ReviewRecord>(&format!(
            r#"{SELECT_REVIEW} WHERE "bookId" = ? AND "userId" = ?"#
        ))
        .bind(book_id.as_str())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .map(Review::try_from)
        .transpose()
    }

    async fn list_for_book(&self, book_id: &BookId) -> Result<Vec<Review>, RepositoryError> {
        query_as::<_, ReviewRecord>(&format!(
            r#"{SELECT_REVIEW} WHERE "bookId" = ? ORDER BY "createdAt" ASC"#
        ))
        .bind(book_id.as_str())
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Review::try_from)
        .collect()
    }
}
