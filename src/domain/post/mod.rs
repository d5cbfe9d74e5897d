pub mod error;
pub mod model;
pub mod service;

pub use error::PostServiceError;
pub use model::{Post, PostWithVotes};
pub use service::{PostService, PostServiceApi};

use serde::{Deserialize, Serialize};

/// Request to create a new post
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

/// Request to replace a post's contents
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

/// Query parameters for post listings
#[derive(Debug, Default, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    pub search: Option<String>,
}
