use crate::e2e::helpers;

use helpers::{issue_token, seed_default_users, seed_user, TestContext};
use pretty_assertions::assert_eq;
use serial_test::serial;
use uuid::Uuid;

#[tokio::test]
#[serial]
async fn it_should_start_with_an_empty_database() {
    let ctx = TestContext::new().await.unwrap();

    assert_eq!(ctx.fixtures.count_users().await.unwrap(), 0);
    assert_eq!(ctx.fixtures.count_posts().await.unwrap(), 0);
    assert_eq!(ctx.fixtures.count_votes().await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn it_should_not_leak_rows_into_later_contexts() {
    {
        let ctx = TestContext::new().await.unwrap();
        let (user_a, user_b) = seed_default_users(&ctx.client).await;
        ctx.fixtures.seed_posts(user_a.id, user_b.id).await.unwrap();
    }

    // A new context gets a freshly reset schema regardless of what the
    // previous one persisted
    let ctx = TestContext::new().await.unwrap();
    assert_eq!(ctx.fixtures.count_users().await.unwrap(), 0);
    assert_eq!(ctx.fixtures.count_posts().await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn it_should_seed_two_distinct_users_through_the_api() {
    let ctx = TestContext::new().await.unwrap();

    let (user_a, user_b) = seed_default_users(&ctx.client).await;

    assert_eq!(user_a.email, "test@test.com");
    assert_eq!(user_b.email, "test2@test.com");
    assert_ne!(user_a.id, user_b.id);

    // Both are simultaneously queryable through the same session
    assert!(ctx.fixtures.find_user_by_id(user_a.id).await.unwrap().is_some());
    assert!(ctx.fixtures.find_user_by_id(user_b.id).await.unwrap().is_some());

    // The plaintext password is reattached for downstream fixtures
    assert_eq!(user_a.password, "test");
}

#[tokio::test]
#[serial]
async fn it_should_not_mutate_the_original_client_when_authorizing() {
    let ctx = TestContext::new().await.unwrap();
    let user = seed_user(&ctx.client, "test@test.com", "test").await;
    let token = issue_token(&ctx.config, &user);

    let headers_before = ctx.client.default_headers().clone();

    let authorized = ctx.client.with_bearer_token(&token);

    // Copy-on-extend: the derived client gains the header, the source
    // client's header set is unchanged
    assert_eq!(ctx.client.default_headers(), &headers_before);
    assert_eq!(
        authorized.default_headers().get("authorization"),
        Some(&format!("Bearer {}", token))
    );

    // The derived client actually authenticates
    let response = authorized.get("/posts").await.unwrap();
    response.assert_status(hyper::StatusCode::OK);
}

#[tokio::test]
#[serial]
async fn it_should_seed_four_posts_in_persisted_order() {
    let ctx = TestContext::new().await.unwrap();
    let (user_a, user_b) = seed_default_users(&ctx.client).await;

    let posts = ctx.fixtures.seed_posts(user_a.id, user_b.id).await.unwrap();

    assert_eq!(posts.len(), 4);

    // Three posts for the first owner, the fourth for the second
    for post in &posts[0..3] {
        assert_eq!(post.user_id, user_a.id);
    }
    assert_eq!(posts[3].user_id, user_b.id);

    assert_eq!(posts[0].title, "first title");
    assert_eq!(posts[1].title, "2nd title");
    assert_eq!(posts[2].title, "3rd title");
    assert_eq!(posts[3].title, "3rd title");

    // Server-assigned fields are populated after the re-read
    for post in &posts {
        assert_ne!(post.id, Uuid::nil());
    }
    let ids: std::collections::HashSet<Uuid> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 4, "post ids should be distinct");
}

#[tokio::test]
#[serial]
async fn it_should_seed_a_vote_on_the_fourth_post() {
    let ctx = TestContext::new().await.unwrap();
    let (user_a, user_b) = seed_default_users(&ctx.client).await;
    let posts = ctx.fixtures.seed_posts(user_a.id, user_b.id).await.unwrap();

    let vote = ctx.fixtures.seed_vote(posts[3].id, user_a.id).await.unwrap();

    assert_eq!(vote.post_id, posts[3].id);
    assert_eq!(vote.user_id, user_a.id);
}

#[tokio::test]
#[serial]
async fn it_should_fail_seeding_a_vote_before_any_posts_exist() {
    let ctx = TestContext::new().await.unwrap();
    let user = seed_user(&ctx.client, "test@test.com", "test").await;

    // Ordering violation: no posts seeded, the reference cannot resolve
    let result = ctx.fixtures.seed_vote(Uuid::new_v4(), user.id).await;

    let err = result.expect_err("voting with no posts must fail");
    assert!(
        err.to_string().contains("foreign key"),
        "expected a foreign key violation, got: {}",
        err
    );
}

#[tokio::test]
#[serial]
async fn it_should_compose_the_full_fixture_chain() {
    let ctx = TestContext::new().await.unwrap();

    // users -> posts -> vote, in dependency order
    let (user_a, user_b) = seed_default_users(&ctx.client).await;
    let posts = ctx.fixtures.seed_posts(user_a.id, user_b.id).await.unwrap();
    ctx.fixtures.seed_vote(posts[3].id, user_a.id).await.unwrap();

    let votes = ctx.fixtures.find_all_votes().await.unwrap();
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].post_id, posts[3].id);
    assert_eq!(votes[0].user_id, user_a.id);
}
