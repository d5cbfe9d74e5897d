use axum::{middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{
        auth::AuthController, health, post::PostController, user::UserController,
        vote::VoteController,
    },
    domain::{auth::AuthService, post::PostService, user::UserService, vote::VoteService},
    infrastructure::auth::{auth_middleware, request_id_middleware},
    infrastructure::repositories::{PostRepository, UserRepository, VoteRepository},
};

/// Build the application router around the given database pool.
///
/// This is the persistence seam: production wiring hands in the pool built
/// from `Config::database_url()`, test wiring hands in a pool bound to a
/// freshly reset test database. Everything downstream of the router only
/// ever sees the injected pool.
pub fn build_router(pool: Arc<DbPool>, config: Arc<Config>) -> Router {
    // Repositories (inject db pool)
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let post_repo = Arc::new(PostRepository::new(pool.clone()));
    let vote_repo = Arc::new(VoteRepository::new(pool.clone()));

    // Services (inject repositories)
    let user_service = Arc::new(UserService::new(user_repo.clone()));
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.clone()));
    let post_service = Arc::new(PostService::new(post_repo.clone()));
    let vote_service = Arc::new(VoteService::new(vote_repo.clone(), post_repo.clone()));

    // Controllers (inject services)
    let user_controller = Arc::new(UserController::new(user_service));
    let auth_controller = Arc::new(AuthController::new(auth_service));
    let post_controller = Arc::new(PostController::new(post_service));
    let vote_controller = Arc::new(VoteController::new(vote_service));

    // User routes (public - registration and lookup)
    let user_routes = Router::new()
        .route("/users", post(UserController::create_user))
        .route("/users/:userId", get(UserController::get_user))
        .with_state(user_controller);

    // Login route (public)
    let auth_routes = Router::new()
        .route("/login", post(AuthController::login))
        .with_state(auth_controller);

    // Post routes (require authentication)
    let post_routes = Router::new()
        .route(
            "/posts",
            get(PostController::list_posts).post(PostController::create_post),
        )
        .route(
            "/posts/:postId",
            get(PostController::get_post)
                .put(PostController::update_post)
                .delete(PostController::delete_post),
        )
        .with_state(post_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    // Vote route (requires authentication)
    let vote_routes = Router::new()
        .route("/vote", post(VoteController::vote))
        .with_state(vote_controller)
        .layer(middleware::from_fn_with_state(
            (user_repo.clone(), config.clone()),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(user_routes)
        .merge(auth_routes)
        .merge(post_routes)
        .merge(vote_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, config.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
