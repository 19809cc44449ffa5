use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;

fn sample_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("vendors.yaml")
}

fn state_for(path: PathBuf) -> AppState {
    AppState {
        catalog: Arc::new(SnapshotCache::new(
            CatalogFileSource::new(path),
            100,
            Duration::from_secs(60),
        )),
        page_size: 8,
    }
}

fn open_auth() -> AuthState {
    AuthState::from_keys("", true).expect("dev allows missing keys")
}

fn app() -> Router {
    build_app(
        state_for(sample_catalog()),
        open_auth(),
        RateLimitState::per_minute(120),
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("validation_error", StatusCode::BAD_REQUEST),
        ("unauthorized", StatusCode::UNAUTHORIZED),
        ("rate_limited", StatusCode::TOO_MANY_REQUESTS),
        ("upstream_unavailable", StatusCode::SERVICE_UNAVAILABLE),
        ("something_else", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "message").into_response();
        assert_eq!(response.status(), status, "{code}");
    }
}

#[test]
fn normalize_limit_applies_defaults_and_bounds() {
    assert_eq!(normalize_limit(None, 8), 8);
    assert_eq!(normalize_limit(Some(0), 8), 1);
    assert_eq!(normalize_limit(Some(1_000), 8), MAX_PAGE_SIZE);
    assert_eq!(normalize_limit(Some(25), 8), 25);
}

#[test]
fn search_errors_map_to_api_codes() {
    let empty = map_search_error("r".to_string(), &SearchError::EmptyCategory);
    assert_eq!(empty.error.code, "validation_error");
    let source = map_search_error("r".to_string(), &SearchError::Source("down".to_string()));
    assert_eq!(source.error.code, "upstream_unavailable");
    assert!(!source.error.message.contains("down"));
}

#[tokio::test]
async fn health_reports_catalog_and_echoes_request_id() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-42")
    );

    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json parse");
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["vendors"], 7);
    assert_eq!(json["meta"]["request_id"], "req-42");
}

#[tokio::test]
async fn health_degrades_when_catalog_is_missing() {
    let app = build_app(
        state_for(PathBuf::from("/definitely/not/here.yaml")),
        open_auth(),
        RateLimitState::per_minute(120),
    );
    let (status, json) = send(app, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["data"]["catalog"], "unavailable");
}

#[tokio::test]
async fn search_ranks_paid_local_vendor_first() {
    let (status, json) = send(
        app(),
        get("/api/v1/search?category=Plumber&province=Gauteng&region=Sandton%2FRivonia"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["status"], "global");
    assert_eq!(data["total"], 2);
    assert_eq!(data["limit"], 8);
    assert_eq!(data["results"][0]["id"], "pro-001");
    assert_eq!(data["results"][0]["score"], 1104.5);
    assert_eq!(data["results"][1]["id"], "pro-002");
    assert_eq!(data["results"][1]["score"], 105.0);
}

#[tokio::test]
async fn search_pages_with_offset_and_limit() {
    let (status, json) = send(
        app(),
        get("/api/v1/search?category=Plumber&province=Gauteng&region=Sandton%2FRivonia&offset=1&limit=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["data"]["results"][0]["id"], "pro-002");
}

#[tokio::test]
async fn search_without_category_is_rejected() {
    let (status, json) = send(app(), get("/api/v1/search?province=Gauteng")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        SearchError::EmptyCategory.to_string()
    );
}

#[tokio::test]
async fn search_with_blank_category_is_rejected() {
    let (status, json) = send(
        app(),
        get("/api/v1/search?category=%20%20&province=Gauteng"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        SearchError::EmptyCategory.to_string()
    );
}

#[tokio::test]
async fn search_reports_unavailable_catalog() {
    let app = build_app(
        state_for(PathBuf::from("/definitely/not/here.yaml")),
        open_auth(),
        RateLimitState::per_minute(120),
    );
    let (status, json) = send(app, get("/api/v1/search?category=Plumber")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "upstream_unavailable");
}

#[tokio::test]
async fn featured_filters_by_location() {
    let (status, json) = send(
        app(),
        get("/api/v1/featured?province=Western%20Cape&region=Southern%20Suburbs"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["data"]["vendors"]
        .as_array()
        .map(|vs| vs.iter().filter_map(|v| v["id"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(ids, vec!["pro-003", "pro-005", "pro-004"]);
}

#[tokio::test]
async fn regions_lists_all_provinces_or_one() {
    let (status, json) = send(app(), get("/api/v1/regions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().map(Vec::len), Some(9));

    let (status, json) = send(app(), get("/api/v1/regions?province=north%20west")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["province"], "North West");
    assert_eq!(json["data"][0]["regions"][0], "Rustenburg (Bojanala)");
}

#[tokio::test]
async fn regions_rejects_unknown_province() {
    let (status, json) = send(app(), get("/api/v1/regions?province=Atlantis")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn resolve_returns_region_and_source() {
    let body = json!({
        "region": "Western Cape",
        "postalCode": "7570",
        "subregion": "Claremont"
    });
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/locations/resolve")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let (status, json) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["province"], "Western Cape");
    assert_eq!(json["data"]["region"], "Northern Suburbs");
    assert_eq!(json["data"]["source"], "postal_code");
}

#[tokio::test]
async fn protected_routes_require_bearer_token_when_keys_configured() {
    let auth = AuthState::from_keys("secret-key", false).expect("keys configured");
    let app = build_app(
        state_for(sample_catalog()),
        auth,
        RateLimitState::per_minute(120),
    );

    let (status, json) = send(app.clone(), get("/api/v1/regions")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "unauthorized");

    let authorized = Request::builder()
        .uri("/api/v1/regions")
        .header("authorization", "Bearer secret-key")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(app.clone(), authorized).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rate_limit_rejects_requests_over_the_window() {
    let app = build_app(
        state_for(sample_catalog()),
        open_auth(),
        RateLimitState::new(1, Duration::from_secs(60)),
    );

    let (status, _) = send(app.clone(), get("/api/v1/regions")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(app, get("/api/v1/regions")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "rate_limited");
}
