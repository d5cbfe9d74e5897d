use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::post::{
    CreatePostRequest, ListPostsQuery, Post, PostWithVotes, UpdatePostRequest,
};
use crate::{
    domain::post::{PostService, PostServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct PostController {
    post_service: Arc<PostService>,
}

impl PostController {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    /// GET /posts - List posts with vote counts
    pub async fn list_posts(
        State(controller): State<Arc<PostController>>,
        Extension(_auth_user): Extension<AuthUser>,
        Query(query): Query<ListPostsQuery>,
    ) -> AppResult<Json<Vec<PostWithVotes>>> {
        let posts = controller.post_service.list_posts(query).await?;
        Ok(Json(posts))
    }

    /// GET /posts/{postId} - Get a single post with its vote count
    pub async fn get_post(
        State(controller): State<Arc<PostController>>,
        Extension(_auth_user): Extension<AuthUser>,
        Path(post_id): Path<Uuid>,
    ) -> AppResult<Json<PostWithVotes>> {
        let post = controller.post_service.get_post(post_id).await?;
        Ok(Json(post))
    }

    /// POST /posts - Create a new post
    pub async fn create_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<CreatePostRequest>,
    ) -> AppResult<(StatusCode, Json<Post>)> {
        let post = controller
            .post_service
            .create_post(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(post)))
    }

    /// PUT /posts/{postId} - Replace a post's contents
    pub async fn update_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<Uuid>,
        Json(request): Json<UpdatePostRequest>,
    ) -> AppResult<Json<Post>> {
        let post = controller
            .post_service
            .update_post(auth_user.user_id, post_id, request)
            .await?;
        Ok(Json(post))
    }

    /// DELETE /posts/{postId} - Delete a post
    pub async fn delete_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller
            .post_service
            .delete_post(auth_user.user_id, post_id)
            .await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
