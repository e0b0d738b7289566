use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::{Duration, Utc};
use punchout_bridge::{config::app_config::AppConfig, punchout::build_punchout_router};
use serde_json::json;
use tower::ServiceExt;

use crate::support::{SECRET, set_cookie_headers, sign_token};

fn app(entries: &[(&str, &str)]) -> Router {
    let mut env: HashMap<String, String> = HashMap::new();
    env.insert("PUNCHOUT_JWT_SECRET".to_string(), SECRET.to_string());
    env.insert(
        "STOREFRONT_BASE_URL".to_string(),
        "https://shop.example".to_string(),
    );
    for (key, value) in entries {
        env.insert(key.to_string(), value.to_string());
    }

    let config = AppConfig::from_lookup(|key| env.get(key).cloned()).expect("valid config");
    build_punchout_router(&config).expect("router builds")
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request"),
    )
    .await
    .expect("infallible service")
}

fn live_token() -> String {
    sign_token(json!({
        "b2b_company_id": "acme-co",
        "medusa_jwt": "abc123",
        "exp": (Utc::now() + Duration::minutes(15)).timestamp(),
    }))
}

fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

#[tokio::test]
async fn login_route_extracts_token_from_query_string() {
    let uri = format!("/api/punchout/login?token={}", live_token());

    let response = get(app(&[]), &uri).await;
    let cookies = set_cookie_headers(&response);

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("https://shop.example/store"));
    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("_punchout_b2b_company=acme-co"));
    assert!(cookies[1].starts_with("_medusa_jwt=abc123"));
}

#[tokio::test]
async fn login_route_without_query_redirects_without_cookies() {
    let response = get(app(&[]), "/api/punchout/login").await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("https://shop.example/store"));
    assert!(set_cookie_headers(&response).is_empty());
}

#[tokio::test]
async fn login_route_redirects_for_broken_query_strings() {
    for uri in [
        "/api/punchout/login?token=%ZZ",
        "/api/punchout/login?token=a&token=b",
        "/api/punchout/login?token=",
        "/api/punchout/login?token=a.b.c",
    ] {
        let response = get(app(&[]), uri).await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{uri}");
        assert_eq!(
            location(&response),
            Some("https://shop.example/store"),
            "{uri}"
        );
        assert!(set_cookie_headers(&response).is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn login_route_marks_cookies_secure_in_production() {
    let uri = format!("/api/punchout/login?token={}", live_token());

    let response = get(app(&[("APP_ENV", "production")]), &uri).await;
    let cookies = set_cookie_headers(&response);

    assert_eq!(cookies.len(), 2);
    assert!(
        cookies
            .iter()
            .all(|cookie| cookie.split("; ").any(|attr| attr == "Secure"))
    );
}

#[tokio::test]
async fn health_route_is_served() {
    let response = get(app(&[]), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
}
