use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{BookId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: BookId,
    pub title: String,
    pub description: String,
    pub user_id: UserId,
}

impl NewBook {
    pub fn new(id: BookId, title: String, description: String, user_id: UserId) -> Self {
        Self {
            id,
            title,
            description,
            user_id,
        }
    }
}
