use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

// password_hash must never reach a response body; the wire shape is dto::UserResponse
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
