use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Router over a fresh in-memory database
struct TestApp {
    router: Router,
    db: DatabaseConnection,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_shopping_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.unwrap();
        let router = router().with_state(AppState::new(db.clone()));

        Self { router, db }
    }

    /// Sends a request and returns the status with the decoded envelope
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map(|json| json.to_string());
        self.send_raw(method, uri, body).await
    }

    async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(text) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(text)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

/// Asserts the envelope reports a failure with the given status and message
fn assert_failure(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["statusCode"], expected.as_u16());
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], message);
}
