use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoteServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("post not found")]
    PostNotFound,
    #[error("vote does not exist")]
    VoteNotFound,
    #[error("already voted on this post")]
    AlreadyVoted,
}

impl From<VoteServiceError> for AppError {
    fn from(err: VoteServiceError) -> Self {
        match err {
            VoteServiceError::Invalid(msg) => AppError::BadRequest(msg),
            VoteServiceError::PostNotFound => AppError::NotFound("Post not found".to_string()),
            VoteServiceError::VoteNotFound => AppError::NotFound("Vote does not exist".to_string()),
            VoteServiceError::AlreadyVoted => {
                AppError::Conflict("Already voted on this post".to_string())
            }
            VoteServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
