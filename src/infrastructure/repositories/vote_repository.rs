use crate::infrastructure::db::DbPool;
use crate::{domain::vote::Vote, error::AppResult};
use std::sync::Arc;
use uuid::Uuid;

pub struct VoteRepository {
    pool: Arc<DbPool>,
}

impl VoteRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Whether this user already voted on this post
    pub async fn exists(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM votes WHERE post_id = $1 AND user_id = $2)",
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Record a vote
    pub async fn create(&self, post_id: Uuid, user_id: Uuid) -> AppResult<Vote> {
        let pool = self.pool.as_ref();

        let vote = sqlx::query_as::<_, Vote>(
            r#"
            INSERT INTO votes (post_id, user_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(vote)
    }

    /// Remove a vote
    pub async fn delete(&self, post_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM votes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
