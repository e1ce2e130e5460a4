//! API Integration Tests
//!
//! Each test spawns the full router over a fresh in-memory store; no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, like, reply_path, Community, ContentBody, CreatedReply,
    ErrorEnvelope, ReplyPage, TestServer, TEST_JWT_SECRET,
};
use reply_common::JwtService;
use reply_core::Snowflake;
use reqwest::StatusCode;

async fn setup() -> (TestServer, Community) {
    let server = TestServer::start().await.expect("Failed to start server");
    let community = Community::seed(&server.store);
    (server, community)
}

async fn create_reply(server: &TestServer, community: &Community, token: &str, content: &str) -> String {
    let response = server
        .post_auth(&community.replies_path(), token, &ContentBody::new(content))
        .await
        .unwrap();
    let created: CreatedReply = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.reply_id
}

async fn list_anonymous(server: &TestServer, community: &Community) -> ReplyPage {
    let response = server.get(&community.replies_path()).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

async fn error_code(response: reqwest::Response, expected: StatusCode) -> String {
    let body: ErrorEnvelope = assert_json(response, expected).await.unwrap();
    body.error.code
}

fn replies_count(server: &TestServer, community: &Community) -> i64 {
    server.store.feed(community.feed_id).unwrap().replies_count
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let (server, community) = setup().await;
    let response = server.get(&community.replies_path()).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Create Reply Tests
// ============================================================================

#[tokio::test]
async fn test_create_reply() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);

    let reply_id = create_reply(&server, &community, &token, "hello").await;

    assert_eq!(replies_count(&server, &community), 1);
    let page = list_anonymous(&server, &community).await;
    assert_eq!(page.total_elements, 1);
    let view = &page.content[0];
    assert_eq!(view.reply_id, reply_id);
    assert_eq!(view.feed_id, community.feed_id.to_string());
    assert_eq!(view.author_id, community.m1.to_string());
    assert_eq!(view.content, "hello");
    assert!(!view.deleted);
    assert!(view.updated_at.is_none());
    assert!(!view.created_at.is_empty());
}

#[tokio::test]
async fn test_create_reply_requires_authentication() {
    let (server, community) = setup().await;

    let response = server
        .post(&community.replies_path(), &ContentBody::new("hi"))
        .await
        .unwrap();

    assert_eq!(error_code(response, StatusCode::UNAUTHORIZED).await, "UNAUTHENTICATED");
    assert_eq!(replies_count(&server, &community), 0);
}

#[tokio::test]
async fn test_create_reply_unknown_member() {
    let (server, community) = setup().await;
    let token = server.token_for(Snowflake::new(9999));

    let response = server
        .post_auth(&community.replies_path(), &token, &ContentBody::new("hi"))
        .await
        .unwrap();

    assert_eq!(error_code(response, StatusCode::NOT_FOUND).await, "UNKNOWN_MEMBER");
}

#[tokio::test]
async fn test_create_reply_unknown_feed() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);

    let response = server
        .post_auth("/api/v1/feeds/42/replies", &token, &ContentBody::new("hi"))
        .await
        .unwrap();

    assert_eq!(error_code(response, StatusCode::NOT_FOUND).await, "UNKNOWN_FEED");
}

#[tokio::test]
async fn test_create_reply_validation() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);

    let empty = server
        .post_auth(&community.replies_path(), &token, &ContentBody::new(""))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(empty, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.is_some());

    let blank = server
        .post_auth(&community.replies_path(), &token, &ContentBody::new("   "))
        .await
        .unwrap();
    assert_eq!(error_code(blank, StatusCode::BAD_REQUEST).await, "VALIDATION_ERROR");

    let long = server
        .post_auth(
            &community.replies_path(),
            &token,
            &ContentBody::new(&"a".repeat(1001)),
        )
        .await
        .unwrap();
    assert_eq!(error_code(long, StatusCode::BAD_REQUEST).await, "CONTENT_TOO_LONG");

    let wrong_shape = server
        .post_auth(
            &community.replies_path(),
            &token,
            &serde_json::json!({ "text": "hi" }),
        )
        .await
        .unwrap();
    assert_eq!(error_code(wrong_shape, StatusCode::BAD_REQUEST).await, "INVALID_BODY");

    assert_eq!(replies_count(&server, &community), 0);
}

#[tokio::test]
async fn test_create_invalid_content_anonymous_is_unauthenticated() {
    let (server, community) = setup().await;

    let response = server
        .post(&community.replies_path(), &ContentBody::new(""))
        .await
        .unwrap();

    assert_eq!(error_code(response, StatusCode::UNAUTHORIZED).await, "UNAUTHENTICATED");
    assert_eq!(replies_count(&server, &community), 0);
}

#[tokio::test]
async fn test_concurrent_creates_keep_count() {
    let (server, community) = setup().await;
    let t1 = server.token_for(community.m1);
    let t2 = server.token_for(community.m2);

    let path = community.replies_path();
    let body = ContentBody::new("racing");

    let requests = (0..20).map(|n| {
        let token = if n % 2 == 0 { &t1 } else { &t2 };
        server.post_auth(&path, token, &body)
    });
    let responses = futures::future::join_all(requests).await;

    for response in responses {
        assert_status(response.unwrap(), StatusCode::CREATED).await.unwrap();
    }
    assert_eq!(replies_count(&server, &community), 20);
    assert_eq!(list_anonymous(&server, &community).await.total_elements, 20);
}

// ============================================================================
// Update / Delete Tests
// ============================================================================

#[tokio::test]
async fn test_update_reply_by_author() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);
    let reply_id = create_reply(&server, &community, &token, "hello").await;

    let response = server
        .patch_auth(&reply_path(&reply_id), &token, &ContentBody::new("hi there"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let page = list_anonymous(&server, &community).await;
    assert_eq!(page.content[0].content, "hi there");
    assert!(page.content[0].updated_at.is_some());
}

#[tokio::test]
async fn test_update_reply_by_other_member() {
    let (server, community) = setup().await;
    let owner = server.token_for(community.m1);
    let intruder = server.token_for(community.m2);
    let reply_id = create_reply(&server, &community, &owner, "hello").await;

    let response = server
        .patch_auth(&reply_path(&reply_id), &intruder, &ContentBody::new("hacked"))
        .await
        .unwrap();
    assert_eq!(error_code(response, StatusCode::FORBIDDEN).await, "ACCESS_DENIED");

    let response = server.delete_auth(&reply_path(&reply_id), &intruder).await.unwrap();
    assert_eq!(error_code(response, StatusCode::FORBIDDEN).await, "ACCESS_DENIED");

    let page = list_anonymous(&server, &community).await;
    assert_eq!(page.content[0].content, "hello");
    assert!(!page.content[0].deleted);
}

#[tokio::test]
async fn test_update_invalid_content_by_other_member_is_denied() {
    let (server, community) = setup().await;
    let owner = server.token_for(community.m1);
    let intruder = server.token_for(community.m2);
    let reply_id = create_reply(&server, &community, &owner, "hello").await;

    let response = server
        .patch_auth(&reply_path(&reply_id), &intruder, &ContentBody::new(""))
        .await
        .unwrap();
    assert_eq!(error_code(response, StatusCode::FORBIDDEN).await, "ACCESS_DENIED");

    let response = server
        .patch_auth(&reply_path(&reply_id), &owner, &ContentBody::new(""))
        .await
        .unwrap();
    assert_eq!(error_code(response, StatusCode::BAD_REQUEST).await, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_unknown_reply() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);

    let response = server
        .patch_auth(&reply_path("777"), &token, &ContentBody::new("x"))
        .await
        .unwrap();
    assert_eq!(error_code(response, StatusCode::NOT_FOUND).await, "UNKNOWN_REPLY");
}

#[tokio::test]
async fn test_delete_reply_twice() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m1);
    let reply_id = create_reply(&server, &community, &token, "hello").await;

    let first = server.delete_auth(&reply_path(&reply_id), &token).await.unwrap();
    assert_status(first, StatusCode::NO_CONTENT).await.unwrap();

    let second = server.delete_auth(&reply_path(&reply_id), &token).await.unwrap();
    assert_eq!(error_code(second, StatusCode::NOT_FOUND).await, "UNKNOWN_REPLY");

    // Counter drift is kept unless decrement_on_delete is enabled
    assert_eq!(replies_count(&server, &community), 1);
}

#[tokio::test]
async fn test_delete_with_decrement_and_hidden_tombstones() {
    let server = TestServer::start_with(&[
        ("REPLY_DECREMENT_ON_DELETE", "true"),
        ("REPLY_TOMBSTONE_VISIBILITY", "hidden"),
    ])
    .await
    .expect("Failed to start server");
    let community = Community::seed(&server.store);
    let token = server.token_for(community.m1);

    let gone = create_reply(&server, &community, &token, "gone").await;
    let kept = create_reply(&server, &community, &token, "kept").await;
    let response = server.delete_auth(&reply_path(&gone), &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(replies_count(&server, &community), 1);
    let page = list_anonymous(&server, &community).await;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].reply_id, kept);
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_anonymous_listing_is_never_liked() {
    let (server, community) = setup().await;
    let token = server.token_for(community.m2);
    let reply_id = create_reply(&server, &community, &token, "likeable").await;
    like(&server.store, community.m1, &reply_id);
    like(&server.store, community.m2, &reply_id);

    let page = list_anonymous(&server, &community).await;
    assert!(page.content.iter().all(|r| !r.liked_by_viewer));
}

#[tokio::test]
async fn test_liked_flag_per_viewer() {
    let (server, community) = setup().await;
    let t1 = server.token_for(community.m1);
    let t2 = server.token_for(community.m2);
    let reply_id = create_reply(&server, &community, &t2, "likeable").await;
    like(&server.store, community.m1, &reply_id);

    let path = community.replies_path();
    let (v1, v2) = tokio::join!(server.get_auth(&path, &t1), server.get_auth(&path, &t2));

    let v1: ReplyPage = assert_json(v1.unwrap(), StatusCode::OK).await.unwrap();
    let v2: ReplyPage = assert_json(v2.unwrap(), StatusCode::OK).await.unwrap();
    assert!(v1.content[0].liked_by_viewer);
    assert!(!v2.content[0].liked_by_viewer);
}

#[tokio::test]
async fn test_listing_with_unknown_member_token() {
    let (server, community) = setup().await;
    let token = server.token_for(Snowflake::new(9999));

    let response = server.get_auth(&community.replies_path(), &token).await.unwrap();
    assert_eq!(error_code(response, StatusCode::UNAUTHORIZED).await, "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_listing_rejects_bad_credentials() {
    let (server, community) = setup().await;
    let path = community.replies_path();

    let garbage = server.get_auth(&path, "not-a-jwt").await.unwrap();
    assert_eq!(error_code(garbage, StatusCode::UNAUTHORIZED).await, "INVALID_TOKEN");

    let basic = server
        .get_with_authorization(&path, "Basic dXNlcjpwYXNz")
        .await
        .unwrap();
    assert_eq!(error_code(basic, StatusCode::UNAUTHORIZED).await, "INVALID_TOKEN");

    let expired_issuer = JwtService::new(TEST_JWT_SECRET, -3600);
    let expired = expired_issuer.issue_access_token(community.m1).unwrap();
    let response = server.get_auth(&path, &expired).await.unwrap();
    assert_eq!(error_code(response, StatusCode::UNAUTHORIZED).await, "TOKEN_EXPIRED");
}

#[tokio::test]
async fn test_listing_paging() {
    let server = TestServer::start_with(&[("REPLY_MAX_PAGE_SIZE", "2")])
        .await
        .expect("Failed to start server");
    let community = Community::seed(&server.store);
    let token = server.token_for(community.m1);

    let mut ids = Vec::new();
    for n in 0..5 {
        ids.push(create_reply(&server, &community, &token, &format!("reply {n}")).await);
    }

    let response = server
        .get(&format!("{}?page=1&size=50", community.replies_path()))
        .await
        .unwrap();
    let page: ReplyPage = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.size, 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    let returned: Vec<&str> = page.content.iter().map(|r| r.reply_id.as_str()).collect();
    assert_eq!(returned, vec![ids[2].as_str(), ids[3].as_str()]);
}

#[tokio::test]
async fn test_listing_bad_parameters() {
    let (server, community) = setup().await;

    let response = server
        .get(&format!("{}?page=-1", community.replies_path()))
        .await
        .unwrap();
    assert_eq!(
        error_code(response, StatusCode::BAD_REQUEST).await,
        "INVALID_QUERY_PARAMETER"
    );

    let response = server.get("/api/v1/feeds/not-an-id/replies").await.unwrap();
    assert_eq!(
        error_code(response, StatusCode::BAD_REQUEST).await,
        "INVALID_PATH_PARAMETER"
    );

    let response = server.get("/api/v1/feeds/42/replies").await.unwrap();
    assert_eq!(error_code(response, StatusCode::NOT_FOUND).await, "UNKNOWN_FEED");
}

// ============================================================================
// Scenario
// ============================================================================

#[tokio::test]
async fn test_reply_lifecycle() {
    let (server, community) = setup().await;
    let m1 = server.token_for(community.m1);
    let m2 = server.token_for(community.m2);
    assert_eq!(replies_count(&server, &community), 0);

    let reply_id = create_reply(&server, &community, &m1, "hello").await;
    assert_eq!(replies_count(&server, &community), 1);

    let hacked = server
        .patch_auth(&reply_path(&reply_id), &m2, &ContentBody::new("hacked"))
        .await
        .unwrap();
    assert_status(hacked, StatusCode::FORBIDDEN).await.unwrap();

    let edited = server
        .patch_auth(&reply_path(&reply_id), &m1, &ContentBody::new("hi there"))
        .await
        .unwrap();
    assert_status(edited, StatusCode::NO_CONTENT).await.unwrap();

    let deleted = server.delete_auth(&reply_path(&reply_id), &m1).await.unwrap();
    assert_status(deleted, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("{}?page=0&size=10", community.replies_path()))
        .await
        .unwrap();
    let page: ReplyPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].reply_id, reply_id);
    assert!(page.content[0].deleted);
    assert_eq!(page.content[0].content, "[deleted]");
    assert!(!page.content[0].liked_by_viewer);
}
