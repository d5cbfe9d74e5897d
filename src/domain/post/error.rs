use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PostServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("post not found")]
    NotFound,
    #[error("not the post owner")]
    NotOwner,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for PostServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => PostServiceError::Invalid(msg),
            AppError::NotFound(_) => PostServiceError::NotFound,
            AppError::Forbidden(_) => PostServiceError::NotOwner,
            _ => PostServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<PostServiceError> for AppError {
    fn from(err: PostServiceError) -> Self {
        match err {
            PostServiceError::Invalid(msg) => AppError::BadRequest(msg),
            PostServiceError::NotFound => AppError::NotFound("Post not found".to_string()),
            PostServiceError::NotOwner => {
                AppError::Forbidden("Not authorized to perform requested action".to_string())
            }
            PostServiceError::Dependency(msg) => AppError::Internal(msg),
            PostServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
