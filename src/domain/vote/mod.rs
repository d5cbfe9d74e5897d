pub mod error;
pub mod model;
pub mod service;

pub use error::VoteServiceError;
pub use model::Vote;
pub use service::VoteService;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vote direction: 1 casts a vote, 0 retracts it
#[derive(Debug, Serialize, Deserialize)]
pub struct VoteRequest {
    pub post_id: Uuid,
    pub dir: i16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub message: String,
}
