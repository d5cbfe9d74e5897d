use crate::{
    error::{AppError, AppResult},
    infrastructure::config::Config,
    infrastructure::repositories::UserRepository,
};
use super::{password, JwtManager, TokenResponse};
use std::sync::Arc;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, config: Arc<Config>) -> Self {
        Self { user_repo, config }
    }

    /// Verify credentials and mint an access token
    pub async fn login(&self, email: &str, plaintext: &str) -> AppResult<TokenResponse> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !password::verify_password(plaintext, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let jwt_manager = JwtManager::new(
            self.config.jwt_secret.clone(),
            self.config.jwt_expiration_hours,
        );
        let access_token = jwt_manager.generate_token(user.id, &user.email)?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: self.config.jwt_expiration_hours * 3600,
        })
    }
}
