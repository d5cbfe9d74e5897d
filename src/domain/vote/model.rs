use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single endorsement of a post by a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vote {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
