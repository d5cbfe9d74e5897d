use crate::e2e::helpers;

use helpers::{issue_token, seed_user, TestContext};
use hyper::StatusCode;
use serde_json::json;
use serial_test::serial;
use voteboard_backend::domain::auth::JwtManager;

#[tokio::test]
#[serial]
async fn it_should_login_with_valid_credentials() {
    let ctx = TestContext::new().await.unwrap();
    let user = seed_user(&ctx.client, "test@test.com", "test").await;

    let response = ctx
        .client
        .post(
            "/login",
            &json!({
                "email": "test@test.com",
                "password": "test"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    helpers::assertions::assert_token_response(body);

    // The token decodes back to the seeded identity
    let token = body.get("access_token").and_then(|v| v.as_str()).unwrap();
    let jwt_manager = JwtManager::new(
        ctx.config.jwt_secret.clone(),
        ctx.config.jwt_expiration_hours,
    );
    let subject = jwt_manager.extract_user_id(token).unwrap();
    assert_eq!(subject, user.id);
}

#[tokio::test]
#[serial]
async fn it_should_login_a_directly_seeded_user() {
    let ctx = TestContext::new().await.unwrap();

    // Fast-path seeding stores the same hash format the API produces
    ctx.fixtures
        .create_user("direct@test.com", "s3cret")
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            "/login",
            &json!({
                "email": "direct@test.com",
                "password": "s3cret"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn it_should_reject_a_wrong_password() {
    let ctx = TestContext::new().await.unwrap();
    seed_user(&ctx.client, "test@test.com", "test").await;

    let response = ctx
        .client
        .post(
            "/login",
            &json!({
                "email": "test@test.com",
                "password": "wrong"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_error_message("Invalid credentials");
}

#[tokio::test]
#[serial]
async fn it_should_reject_an_unknown_email() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .post(
            "/login",
            &json!({
                "email": "nobody@test.com",
                "password": "test"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn it_should_require_authentication_for_posts_and_votes() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx.client.get("/posts").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .post("/posts", &json!({ "title": "t", "content": "c" }))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = ctx
        .client
        .post("/vote", &json!({ "post_id": uuid::Uuid::new_v4(), "dir": 1 }))
        .await
        .unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn it_should_reject_an_invalid_jwt() {
    let ctx = TestContext::new().await.unwrap();

    let response = ctx
        .client
        .get_with_auth("/posts", "invalid.jwt.token")
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn it_should_reject_an_expired_jwt() {
    let ctx = TestContext::new().await.unwrap();
    let user = seed_user(&ctx.client, "test@test.com", "test").await;

    // Create an expired token
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims {
        sub: String,
        email: String,
        exp: i64,
        iat: i64,
    }

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp: (now - chrono::Duration::hours(1)).timestamp(), // Expired 1 hour ago
        iat: (now - chrono::Duration::hours(2)).timestamp(),
    };

    let expired_token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes()),
    )
    .unwrap();

    let response = ctx
        .client
        .get_with_auth("/posts", &expired_token)
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn it_should_reject_a_token_for_a_nonexistent_user() {
    let ctx = TestContext::new().await.unwrap();

    // Valid signature, but the subject was never persisted
    let ghost = helpers::SeededUser {
        id: uuid::Uuid::new_v4(),
        email: "ghost@test.com".to_string(),
        created_at: chrono::Utc::now(),
        password: "test".to_string(),
    };
    let token = issue_token(&ctx.config, &ghost);

    let response = ctx.client.get_with_auth("/posts", &token).await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_error_message("User not found");
}
