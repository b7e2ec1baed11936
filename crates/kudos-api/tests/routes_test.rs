//! Router-level tests: drive the full axum app in-process and check status
//! codes and JSON shapes as the web client sees them.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use kudos_api::middleware::USER_ID_HEADER;
use kudos_api::router;
use kudos_api::state::AppStateInner;
use kudos_core::{KudosService, MemoryAuditLog, ModerationConfig, UserDirectory};

const ADMIN: &str = "u0";

fn app() -> Router {
    let kudos = KudosService::new(
        Arc::new(UserDirectory::builtin()),
        ModerationConfig::default(),
        Arc::new(MemoryAuditLog::new()),
    );
    router(Arc::new(AppStateInner {
        kudos,
        default_user_id: "u1".into(),
    }))
}

async fn send(app: &Router, method: Method, uri: &str, user: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, recipient: &str, message: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/kudos",
        None,
        Some(json!({ "recipientId": recipient, "message": message })),
    )
    .await
}

#[tokio::test]
async fn health_needs_no_identity() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", Some("nobody"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn current_user_and_colleagues() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/current-user", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], "u1");
    assert_eq!(body["user"]["name"], "Jordan Lee");
    assert_eq!(body["user"]["isAdmin"], false);

    let (_, body) = send(&app, Method::GET, "/api/current-user", Some(ADMIN), None).await;
    assert_eq!(body["user"]["isAdmin"], true);

    let (status, body) = send(&app, Method::GET, "/api/users", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 5);
    assert!(users.iter().all(|u| u["id"] != "u1"));
}

#[tokio::test]
async fn unknown_caller_is_unauthorized() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/kudos", Some("u99"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_returns_enriched_kudo() {
    let app = app();
    let (status, body) = create(&app, "u2", "  Nice <work> & thanks  ").await;
    assert_eq!(status, StatusCode::CREATED);

    let kudo = &body["kudo"];
    assert_eq!(kudo["senderId"], "u1");
    assert_eq!(kudo["recipientId"], "u2");
    assert_eq!(kudo["message"], "Nice &lt;work&gt; &amp; thanks");
    assert_eq!(kudo["is_visible"], true);
    assert!(kudo["moderated_by"].is_null());
    assert!(kudo["moderated_at"].is_null());
    assert!(kudo["reason_for_moderation"].is_null());
    assert!(kudo["createdAt"].is_string());
    assert_eq!(kudo["sender"]["name"], "Jordan Lee");
    assert_eq!(kudo["recipient"]["title"], "UX Designer");
}

#[tokio::test]
async fn create_validation_statuses() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/kudos", None, Some(json!({ "message": "hi" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "recipientId and message are required.");

    let (status, _) = send(&app, Method::POST, "/api/kudos", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = create(&app, "u1", "hi").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "You cannot send kudos to yourself.");

    let (status, _) = create(&app, "u42", "hi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = create(&app, "u2", "    ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = create(&app, "u2", &"x".repeat(501)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message must be 500 characters or less.");

    let (status, body) = create(&app, "u2", "buy SPAM now").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message contains inappropriate content.");

    let (status, _) = create(&app, "u2", "Thanks!").await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = create(&app, "u2", "Thanks!").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/kudos",
        None,
        Some(json!("not an object")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed request body.");
}

#[tokio::test]
async fn create_ignores_extra_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/kudos",
        None,
        Some(json!({ "recipientId": "u2", "message": "Hi there", "senderId": "u3" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // The sender always comes from the caller, never the body.
    assert_eq!(body["kudo"]["senderId"], "u1");
    assert_eq!(body["kudo"]["message"], "Hi there");
}

#[tokio::test]
async fn null_body_reads_as_missing_fields() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/api/kudos", None, Some(Value::Null)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "recipientId and message are required.");

    let (_, body) = create(&app, "u2", "hide me").await;
    let id = body["kudo"]["id"].as_str().unwrap().to_string();
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/kudos/{}/hide", id),
        Some(ADMIN),
        Some(Value::Null),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["kudo"]["reason_for_moderation"].is_null());
}

#[tokio::test]
async fn moderation_requires_admin() {
    let app = app();
    let (_, body) = create(&app, "u2", "hello").await;
    let id = body["kudo"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::PATCH, &format!("/api/kudos/{}/hide", id), Some("u1"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized. Admin access required.");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/kudos/{}", id), Some("u3"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = send(&app, Method::GET, "/api/kudos", None, None).await;
    assert_eq!(body["kudos"].as_array().unwrap().len(), 1);
    assert_eq!(body["kudos"][0]["is_visible"], true);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app();
    let (status, body) = send(&app, Method::PATCH, "/api/kudos/k1/hide", Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Kudos not found.");

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/api/kudos/7b0c4c2e-8f43-4a7e-9d3a-1c2b3d4e5f60",
        Some(ADMIN),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn end_to_end_hide_unhide_delete() {
    let app = app();

    let (status, body) = create(&app, "u2", "Great job!").await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["kudo"]["id"].as_str().unwrap().to_string();

    let (_, feed) = send(&app, Method::GET, "/api/kudos", None, None).await;
    assert_eq!(feed["kudos"][0]["id"], id.as_str());
    assert_eq!(feed["kudos"][0]["message"], "Great job!");
    assert_eq!(feed["kudos"][0]["sender"]["name"], "Jordan Lee");
    assert_eq!(feed["kudos"][0]["recipient"]["name"], "Priya Desai");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/kudos/{}/hide", id),
        Some(ADMIN),
        Some(json!({ "reason": "test" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kudo"]["is_visible"], false);
    assert_eq!(body["kudo"]["moderated_by"], ADMIN);
    assert!(body["kudo"]["moderated_at"].is_string());
    assert_eq!(body["kudo"]["reason_for_moderation"], "test");

    let (_, feed) = send(&app, Method::GET, "/api/kudos", Some(ADMIN), None).await;
    assert!(feed["kudos"].as_array().unwrap().is_empty());

    let (status, body) = send(&app, Method::PATCH, &format!("/api/kudos/{}/unhide", id), Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kudo"]["is_visible"], true);
    assert!(body["kudo"]["moderated_by"].is_null());
    assert!(body["kudo"]["reason_for_moderation"].is_null());

    let (_, feed) = send(&app, Method::GET, "/api/kudos", None, None).await;
    assert_eq!(feed["kudos"][0]["id"], id.as_str());

    let (status, body) = send(&app, Method::DELETE, &format!("/api/kudos/{}", id), Some(ADMIN), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Kudos deleted successfully");

    let (_, feed) = send(&app, Method::GET, "/api/kudos", None, None).await;
    assert!(feed["kudos"].as_array().unwrap().is_empty());

    for (method, uri) in [
        (Method::PATCH, format!("/api/kudos/{}/hide", id)),
        (Method::PATCH, format!("/api/kudos/{}/unhide", id)),
        (Method::DELETE, format!("/api/kudos/{}", id)),
    ] {
        let (status, _) = send(&app, method, &uri, Some(ADMIN), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
