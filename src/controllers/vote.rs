use axum::{extract::State, http::StatusCode, Extension, Json};
use std::sync::Arc;

use crate::{
    domain::vote::{VoteOutcome, VoteRequest, VoteService},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct VoteController {
    vote_service: Arc<VoteService>,
}

impl VoteController {
    pub fn new(vote_service: Arc<VoteService>) -> Self {
        Self { vote_service }
    }

    /// POST /vote - Cast or retract a vote on a post
    pub async fn vote(
        State(controller): State<Arc<VoteController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<VoteRequest>,
    ) -> AppResult<(StatusCode, Json<VoteOutcome>)> {
        let outcome = controller
            .vote_service
            .cast_vote(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(outcome)))
    }
}
