use super::error::VoteServiceError;
use crate::domain::vote::{VoteOutcome, VoteRequest};
use crate::infrastructure::repositories::{PostRepository, VoteRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct VoteService {
    vote_repo: Arc<VoteRepository>,
    post_repo: Arc<PostRepository>,
}

impl VoteService {
    pub fn new(vote_repo: Arc<VoteRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            vote_repo,
            post_repo,
        }
    }

    /// Cast or retract a vote depending on the requested direction
    pub async fn cast_vote(
        &self,
        user_id: Uuid,
        request: VoteRequest,
    ) -> Result<VoteOutcome, VoteServiceError> {
        if request.dir != 0 && request.dir != 1 {
            return Err(VoteServiceError::Invalid(format!(
                "dir must be 0 or 1, got {}",
                request.dir
            )));
        }

        let post_exists = self
            .post_repo
            .exists(request.post_id)
            .await
            .map_err(|e| VoteServiceError::Dependency(e.to_string()))?;
        if !post_exists {
            return Err(VoteServiceError::PostNotFound);
        }

        let already_voted = self
            .vote_repo
            .exists(request.post_id, user_id)
            .await
            .map_err(|e| VoteServiceError::Dependency(e.to_string()))?;

        if request.dir == 1 {
            if already_voted {
                return Err(VoteServiceError::AlreadyVoted);
            }

            self.vote_repo
                .create(request.post_id, user_id)
                .await
                .map_err(|e| VoteServiceError::Dependency(e.to_string()))?;

            Ok(VoteOutcome {
                message: "successfully added vote".to_string(),
            })
        } else {
            if !already_voted {
                return Err(VoteServiceError::VoteNotFound);
            }

            self.vote_repo
                .delete(request.post_id, user_id)
                .await
                .map_err(|e| VoteServiceError::Dependency(e.to_string()))?;

            Ok(VoteOutcome {
                message: "successfully deleted vote".to_string(),
            })
        }
    }
}
