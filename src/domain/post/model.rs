use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Read model for post listings: the post plus its vote count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostWithVotes {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
}
