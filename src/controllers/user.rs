use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::user::{CreateUserRequest, UserResponse, UserService},
    error::AppResult,
};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// POST /users - Register a new user
    pub async fn create_user(
        State(controller): State<Arc<UserController>>,
        Json(request): Json<CreateUserRequest>,
    ) -> AppResult<(StatusCode, Json<UserResponse>)> {
        let user = controller.user_service.register_user(request).await?;
        Ok((StatusCode::CREATED, Json(user)))
    }

    /// GET /users/{userId} - Get a user's public profile
    pub async fn get_user(
        State(controller): State<Arc<UserController>>,
        Path(user_id): Path<Uuid>,
    ) -> AppResult<Json<UserResponse>> {
        let user = controller.user_service.get_user(user_id).await?;
        Ok(Json(user))
    }
}
