//! Application test fixture
//!
//! Builds the full router over a fresh in-memory SQLite database and drives
//! it with `tower::ServiceExt::oneshot`. Tests that need a real connection
//! call `serve`, which binds an ephemeral local port.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use tower::ServiceExt;

use postboard::backend::routes::create_router;
use postboard::backend::server::{AppState, Database, ServerConfig};

/// Cookie secret shared by every test app
pub const TEST_COOKIE_SECRET: &str = "test-cookie-secret-0123456789abcdef";

/// Router plus the state and database behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: Database,
}

impl TestApp {
    /// Create a new app over an empty, migrated database
    pub async fn new() -> Self {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open test database");

        let config = ServerConfig::from_lookup(|name| match name {
            "COOKIE_SECRET" => Some(TEST_COOKIE_SECRET.to_string()),
            "BCRYPT_COST" => Some("4".to_string()),
            _ => None,
        })
        .expect("Failed to build test config");

        let state = AppState::new(db.pool().clone(), &config);
        let router = create_router(state.clone(), None);

        Self { router, state, db }
    }

    /// Send one request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed")
    }

    /// Serve the router on an ephemeral port for the rest of the test
    pub async fn serve(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        let router = self.router.clone();
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Test server failed");
        });
        addr
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_empty(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

/// Read a response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}
