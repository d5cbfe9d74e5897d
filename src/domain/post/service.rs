use super::error::PostServiceError;
use crate::domain::post::{CreatePostRequest, ListPostsQuery, Post, PostWithVotes, UpdatePostRequest};
use crate::infrastructure::repositories::PostRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

pub struct PostService {
    post_repo: Arc<PostRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<PostRepository>) -> Self {
        Self { post_repo }
    }
}

#[async_trait]
pub trait PostServiceApi: Send + Sync {
    async fn list_posts(&self, query: ListPostsQuery) -> Result<Vec<PostWithVotes>, PostServiceError>;

    async fn get_post(&self, post_id: Uuid) -> Result<PostWithVotes, PostServiceError>;

    async fn create_post(
        &self,
        user_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<Post, PostServiceError>;

    async fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> Result<Post, PostServiceError>;

    async fn delete_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), PostServiceError>;
}

#[async_trait]
impl PostServiceApi for PostService {
    async fn list_posts(&self, query: ListPostsQuery) -> Result<Vec<PostWithVotes>, PostServiceError> {
        let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(PostServiceError::Invalid(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        let skip = query.skip.unwrap_or(0);
        if skip < 0 {
            return Err(PostServiceError::Invalid("skip must not be negative".to_string()));
        }

        self.post_repo
            .find_all(limit, skip, query.search.as_deref().unwrap_or(""))
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))
    }

    async fn get_post(&self, post_id: Uuid) -> Result<PostWithVotes, PostServiceError> {
        self.post_repo
            .find_with_votes(post_id)
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))?
            .ok_or(PostServiceError::NotFound)
    }

    async fn create_post(
        &self,
        user_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<Post, PostServiceError> {
        Self::validate_content(&request.title, &request.content)?;

        self.post_repo
            .create(user_id, &request.title, &request.content, request.published)
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))
    }

    async fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        request: UpdatePostRequest,
    ) -> Result<Post, PostServiceError> {
        Self::validate_content(&request.title, &request.content)?;
        self.verify_post_ownership(post_id, user_id).await?;

        self.post_repo
            .update(post_id, &request.title, &request.content, request.published)
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))
    }

    async fn delete_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), PostServiceError> {
        self.verify_post_ownership(post_id, user_id).await?;

        self.post_repo
            .delete(post_id)
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))?;

        Ok(())
    }
}

impl PostService {
    fn validate_content(title: &str, content: &str) -> Result<(), PostServiceError> {
        if title.trim().is_empty() {
            return Err(PostServiceError::Invalid("Title must not be empty".to_string()));
        }
        if content.trim().is_empty() {
            return Err(PostServiceError::Invalid("Content must not be empty".to_string()));
        }
        Ok(())
    }

    async fn verify_post_ownership(
        &self,
        post_id: Uuid,
        user_id: Uuid,
    ) -> Result<Post, PostServiceError> {
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await
            .map_err(|e| PostServiceError::Dependency(e.to_string()))?
            .ok_or(PostServiceError::NotFound)?;

        if post.user_id != user_id {
            return Err(PostServiceError::NotOwner);
        }

        Ok(post)
    }
}
