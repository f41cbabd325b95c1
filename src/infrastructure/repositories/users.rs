use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{query, query_as};

use crate::domain::RepositoryError;
use crate::domain::ids::UserId;
use crate::domain::repositories::UserRepository;
use crate::domain::users::{NewUser, Profile, User, UserWithProfile};
use crate::infrastructure::database::DatabasePool;

const SELECT_USER: &str = r#"
SELECT u.id, u.email, u.password, u."createdAt" AS created_at, u."updatedAt" AS updated_at, p.name
FROM "User" u
LEFT JOIN "Profile" p ON p."userId" = u.id"#;

#[derive(Clone)]
pub struct SqlUserRepository {
    pool: DatabasePool,
}

impl SqlUserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRecord {
    id: String,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: Option<String>,
}

impl From<UserRecord> for UserWithProfile {
    fn from(record: UserRecord) -> Self {
        UserWithProfile {
            user: User {
                id: UserId::from(record.id),
                email: record.email,
                password_hash: record.password,
                created_at: record.created_at,
                updated_at: record.updated_at,
            },
            profile: record.name.map(|name| Profile { name }),
        }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<UserWithProfile, RepositoryError> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        query(
            r#"INSERT INTO "User" (id, email, password, "createdAt", "updatedAt")
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(new_user.id.as_str())
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            RepositoryError::from_write(err, "a user with this email or id already exists")
        })?;

        query(r#"INSERT INTO "Profile" (id, name, "userId") VALUES (?, ?, ?)"#)
            .bind(uuid::Uuid::new_v4().to_string())
            .bind(&new_user.name)
            .bind(new_user.id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(|err| RepositoryError::from_write(err, "this user already has a profile"))?;

        tx.commit().await?;

        tracing::debug!(user.id = %new_user.id, "inserted user");

        Ok(UserWithProfile {
            user: User {
                id: new_user.id,
                email: new_user.email,
                password_hash: new_user.password_hash,
                created_at: now,
                updated_at: now,
            },
            profile: Some(Profile {
                name: new_user.name,
            }),
        })
    }

    async fn get(&self, id: &UserId) -> Result<UserWithProfile, RepositoryError> {
        let record = query_as::<_, UserRecord>(&format!("{SELECT_USER} WHERE u.id = ?"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(record.into())
    }

    async fn get_by_email(&self, email: &str) -> Result<UserWithProfile, RepositoryError> {
        let record = query_as::<_, UserRecord>(&format!("{SELECT_USER} WHERE u.email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(record.into())
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), RepositoryError> {
        let result = query(r#"DELETE FROM "User" WHERE email = ?"#)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|err| RepositoryError::from_write(err, "user could not be deleted"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::debug!(user.email = email, "deleted user");
        Ok(())
    }
}
