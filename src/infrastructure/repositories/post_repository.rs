use crate::infrastructure::db::DbPool;
use crate::{
    domain::post::{Post, PostWithVotes},
    error::AppResult,
};
use std::sync::Arc;
use uuid::Uuid;

pub struct PostRepository {
    pool: Arc<DbPool>,
}

impl PostRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// List posts with their vote counts, newest first, filtered by title
    pub async fn find_all(
        &self,
        limit: i64,
        skip: i64,
        search: &str,
    ) -> AppResult<Vec<PostWithVotes>> {
        let pool = self.pool.as_ref();
        let posts = sqlx::query_as::<_, PostWithVotes>(
            r#"
            SELECT p.id, p.title, p.content, p.published, p.user_id, p.created_at,
                   COUNT(v.post_id) AS votes
            FROM posts p
            LEFT JOIN votes v ON v.post_id = p.id
            WHERE p.title ILIKE '%' || $1 || '%'
            GROUP BY p.id
            ORDER BY p.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search)
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;

        Ok(posts)
    }

    /// Get a post by ID
    pub async fn find_by_id(&self, post_id: Uuid) -> AppResult<Option<Post>> {
        let pool = self.pool.as_ref();
        let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Get a post by ID together with its vote count
    pub async fn find_with_votes(&self, post_id: Uuid) -> AppResult<Option<PostWithVotes>> {
        let pool = self.pool.as_ref();
        let post = sqlx::query_as::<_, PostWithVotes>(
            r#"
            SELECT p.id, p.title, p.content, p.published, p.user_id, p.created_at,
                   COUNT(v.post_id) AS votes
            FROM posts p
            LEFT JOIN votes v ON v.post_id = p.id
            WHERE p.id = $1
            GROUP BY p.id
            "#,
        )
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

        Ok(post)
    }

    /// Whether a post with this ID exists
    pub async fn exists(&self, post_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)",
        )
        .bind(post_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Create a new post, id and created_at are assigned by the database
    pub async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        content: &str,
        published: bool,
    ) -> AppResult<Post> {
        let pool = self.pool.as_ref();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, published, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(published)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Replace a post's contents
    pub async fn update(
        &self,
        post_id: Uuid,
        title: &str,
        content: &str,
        published: bool,
    ) -> AppResult<Post> {
        let pool = self.pool.as_ref();

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET title = $1, content = $2, published = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(published)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Delete a post
    pub async fn delete(&self, post_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
