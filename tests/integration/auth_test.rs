//! Account API integration tests
//!
//! Register, login, logout and the cookie-protected probe route.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use postboard::backend::middleware::is_valid_session_token;

use crate::common::*;

fn register_body(username: &str, email: &str, first_name: &str) -> serde_json::Value {
    json!({
        "username": username,
        "password": "hunter22",
        "email": email,
        "firstName": first_name,
        "lastName": "Smith",
    })
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user", register_body("rob", "rob@example.com", "Rob"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"email": "rob@example.com", "username": "rob", "name": "Rob Smith"})
    );
}

#[tokio::test]
async fn test_register_empty_fields() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user", register_body("", "rob@example.com", "Rob"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.post_json("/user", register_body("rob", "", "Rob")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_bad_type() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/user",
            json!({
                "username": "rob",
                "password": 1234,
                "email": "rob@example.com",
                "firstName": "Rob",
                "lastName": "Smith",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Bad type");
}

#[tokio::test]
async fn test_register_missing_field() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user", json!({"username": "rob", "password": "pw", "email": "a@b.c"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Bad type");
}

#[tokio::test]
async fn test_register_validation_failure() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user", register_body("rob", "rob@example.com", "R0b"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "User validation failed: firstName: no numbers allowed in first name"
    );
}

#[tokio::test]
async fn test_register_name_must_be_one_word() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/user", register_body("mary", "mary@example.com", "Mary Ann"))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "User validation failed: firstName: no spaces allowed in first name"
    );

    let response = app
        .post_json("/user", register_body("anon", "anon@example.com", ""))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "User validation failed: firstName: first name is required"
    );

    let response = app
        .post_json("/user/isValid", json!({"email": "mary@example.com", "password": "hunter22"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_duplicates_conflict() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;

    let response = app
        .post_json("/user", register_body("rob", "other@example.com", "Rob"))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .post_json("/user", register_body("robert", "rob@example.com", "Rob"))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;

    let response = app
        .post_json(
            "/user/isValid",
            json!({"email": ROB.email, "password": ROB.password}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("sessionID="));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Secure"));
    assert!(set_cookie.contains("Path=/"));

    let body = body_json(response).await;
    assert_eq!(body, json!({"name": "Rob Smith", "username": "rob"}));

    let tokens = stored_session_tokens(&app).await;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].len(), 64);
    assert!(is_valid_session_token(&tokens[0]));
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new().await;
    register(&app, &ROB).await;

    let wrong_password = app
        .post_json("/user/isValid", json!({"email": ROB.email, "password": "nope"}))
        .await;
    let unknown_email = app
        .post_json(
            "/user/isValid",
            json!({"email": "ghost@example.com", "password": ROB.password}),
        )
        .await;
    let empty_email = app
        .post_json("/user/isValid", json!({"email": "", "password": ROB.password}))
        .await;

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    assert_eq!(empty_email.status(), StatusCode::BAD_REQUEST);

    let a = body_json(wrong_password).await;
    let b = body_json(unknown_email).await;
    let c = body_json(empty_email).await;
    assert_eq!(a, b);
    assert_eq!(b, c);

    assert!(stored_session_tokens(&app).await.is_empty());
}

#[tokio::test]
async fn test_probe_requires_cookie() {
    let app = TestApp::new().await;

    let response = app.get("/requiredCookieRoute", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        body_json(response).await["error"],
        "Cookie was required for request but no cookie was found"
    );
}

#[tokio::test]
async fn test_probe_rejects_unsigned_cookie() {
    let app = TestApp::new().await;
    register_and_login(&app, &ROB).await;

    let token = stored_session_tokens(&app).await.remove(0);
    let response = app
        .get("/requiredCookieRoute", Some(&format!("sessionID={}", token)))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_probe_rejects_malformed_token() {
    let app = TestApp::new().await;

    let cookie = signed_cookie(&app, &"a".repeat(64));
    let response = app.get("/requiredCookieRoute", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_probe_returns_handle() {
    let app = TestApp::new().await;
    let cookie = register_and_login(&app, &ROB).await;

    let response = app.get("/requiredCookieRoute", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "rob");
}

#[tokio::test]
async fn test_probe_with_hand_signed_cookie() {
    let app = TestApp::new().await;
    register_and_login(&app, &ROB).await;

    let token = stored_session_tokens(&app).await.remove(0);
    let response = app
        .get("/requiredCookieRoute", Some(&signed_cookie(&app, &token)))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "rob");
}

#[tokio::test]
async fn test_probe_unknown_session() {
    let app = TestApp::new().await;

    let cookie = signed_cookie(
        &app,
        "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
    );
    let response = app.get("/requiredCookieRoute", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new().await;
    let cookie = register_and_login(&app, &ROB).await;

    let response = app.post_empty("/user/logout", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    assert!(stored_session_tokens(&app).await.is_empty());

    let response = app.get("/requiredCookieRoute", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_requires_cookie() {
    let app = TestApp::new().await;

    let response = app.post_empty("/user/logout", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
