use crate::{
    domain::auth::password,
    error::{AppError, AppResult},
    infrastructure::repositories::UserRepository,
};
use super::dto::{CreateUserRequest, UserResponse};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user, hashing the password before it touches the database
    pub async fn register_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        Self::validate_email(&request.email)?;

        if request.password.is_empty() {
            return Err(AppError::BadRequest("Password must not be empty".to_string()));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = self.user_repo.create(&request.email, &password_hash).await?;

        Ok(UserResponse::from(user))
    }

    /// Fetch a user's public profile
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        Ok(UserResponse::from(user))
    }

    fn validate_email(email: &str) -> AppResult<()> {
        let valid = match email.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };

        if !valid {
            return Err(AppError::BadRequest(format!("Invalid email: {}", email)));
        }
        Ok(())
    }
}
