//! End-to-end router tests driving the full stack through oneshot
//! requests, auth gate included.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, create_router};
use crate::config::AuthConfig;
use crate::task::adapters::memory::{InMemoryAuditLogRepository, InMemoryTaskRepository};
use crate::task::services::TaskService;

const USERNAME: &str = "admin";
const PASSWORD: &str = "s3cret";

fn test_router() -> Router {
    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(InMemoryAuditLogRepository::new()),
        Arc::new(DefaultClock),
    );
    create_router(AppState::new(service), AuthConfig::new(USERNAME, PASSWORD))
}

fn auth_header() -> String {
    format!("Basic {}", BASE64.encode(format!("{USERNAME}:{PASSWORD}")))
}

fn authed(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth_header());
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_task(app: &Router, title: &str, description: &str) -> Value {
    let response = app
        .clone()
        .oneshot(authed(
            Method::POST,
            "/api/tasks",
            Some(json!({"title": title, "description": description})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

mod auth_gate {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn missing_credentials_are_rejected() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/tasks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_credentials_are_rejected() {
        let app = test_router();
        let bad = format!("Basic {}", BASE64.encode("admin:wrong"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/tasks")
                    .header(header::AUTHORIZATION, bad)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_header_is_rejected() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/tasks")
                    .header(header::AUTHORIZATION, "Basic !!!not-base64!!!")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[tokio::test]
    async fn cors_preflight_needs_no_credentials() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/tasks")
                    .header(header::ORIGIN, "http://localhost:4200")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

mod task_endpoints {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn create_returns_created_task() {
        let app = test_router();
        let task = create_task(&app, "Buy milk", "urgent").await;

        assert_eq!(task["title"], "Buy milk");
        assert_eq!(task["description"], "urgent");
        assert!(task["id"].is_string());
        assert!(task["createdAt"].is_string());
    }

    #[rstest]
    #[tokio::test]
    async fn create_sanitises_markup() {
        let app = test_router();
        let task = create_task(&app, "<script>alert(1)</script>Buy milk", "urgent").await;

        assert_eq!(task["title"], "Buy milk");
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_blank_title() {
        let app = test_router();
        let response = app
            .oneshot(authed(
                Method::POST,
                "/api/tasks",
                Some(json!({"title": "   ", "description": "urgent"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "title is required");
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_over_length_description() {
        let app = test_router();
        let response = app
            .oneshot(authed(
                Method::POST,
                "/api/tasks",
                Some(json!({"title": "ok", "description": "x".repeat(501)})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_page_shape() {
        let app = test_router();
        create_task(&app, "Buy milk", "corner shop").await;
        create_task(&app, "Walk dog", "around the park").await;

        let response = app
            .oneshot(authed(Method::GET, "/api/tasks?page=0&size=1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["tasks"].as_array().unwrap().len(), 1);
        assert_eq!(body["currentPage"], 0);
        assert_eq!(body["totalItems"], 2);
        assert_eq!(body["totalPages"], 2);
        assert_eq!(body["tasks"][0]["title"], "Walk dog");
    }

    #[rstest]
    #[tokio::test]
    async fn list_with_search_filters_results() {
        let app = test_router();
        create_task(&app, "Buy milk", "corner shop").await;
        create_task(&app, "Walk dog", "around the park").await;

        let response = app
            .oneshot(authed(Method::GET, "/api/tasks?search=MILK", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["totalItems"], 1);
        assert_eq!(body["tasks"][0]["title"], "Buy milk");
    }

    #[rstest]
    #[tokio::test]
    async fn list_rejects_zero_size() {
        let app = test_router();
        let response = app
            .oneshot(authed(Method::GET, "/api/tasks?page=0&size=0", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[tokio::test]
    async fn update_unknown_id_returns_not_found() {
        let app = test_router();
        let id = uuid::Uuid::new_v4();
        let response = app
            .oneshot(authed(
                Method::PUT,
                &format!("/api/tasks/{id}"),
                Some(json!({"title": "New", "description": "values"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("task not found"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_existing_task_returns_updated_values() {
        let app = test_router();
        let task = create_task(&app, "Buy milk", "urgent").await;
        let id = task["id"].as_str().unwrap();

        let response = app
            .oneshot(authed(
                Method::PUT,
                &format!("/api/tasks/{id}"),
                Some(json!({"title": "Buy oat milk", "description": "urgent"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["title"], "Buy oat milk");
        assert_eq!(body["id"], task["id"]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_then_delete_again_reports_not_found() {
        let app = test_router();
        let task = create_task(&app, "Buy milk", "urgent").await;
        let id = task["id"].as_str().unwrap().to_owned();

        let first = app
            .clone()
            .oneshot(authed(Method::DELETE, &format!("/api/tasks/{id}"), None))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);
        let body = body_json(first).await;
        assert_eq!(body["message"], "Task deleted successfully");

        let second = app
            .oneshot(authed(Method::DELETE, &format!("/api/tasks/{id}"), None))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_task_id_is_a_bad_request() {
        let app = test_router();
        let response = app
            .oneshot(authed(
                Method::PUT,
                "/api/tasks/not-a-uuid",
                Some(json!({"title": "New", "description": "values"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

mod audit_endpoint {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn logs_list_mutations_newest_first() {
        let app = test_router();
        let task_a = create_task(&app, "Task A", "first").await;
        create_task(&app, "Task B", "second").await;

        let id_a = task_a["id"].as_str().unwrap();
        let update = app
            .clone()
            .oneshot(authed(
                Method::PUT,
                &format!("/api/tasks/{id_a}"),
                Some(json!({"title": "Task A renamed", "description": "first"})),
            ))
            .await
            .unwrap();
        assert_eq!(update.status(), StatusCode::OK);

        let response = app
            .oneshot(authed(Method::GET, "/api/logs", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0]["action"], "Update Task");
        assert_eq!(entries[0]["taskId"], task_a["id"]);
        assert_eq!(entries[0]["updatedContent"], json!({"title": "Task A renamed"}));
        assert_eq!(entries[1]["action"], "Create Task");
        assert_eq!(entries[2]["action"], "Create Task");
        assert_eq!(entries[2]["taskId"], task_a["id"]);
        assert!(entries[0]["notes"].is_null());
    }
}
