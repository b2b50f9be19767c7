//! Router assembly: health, docs, fallback, body limit and live serving.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::post,
    Router,
};
use tower::util::ServiceExt;
use utoipa::OpenApi;

use api_ingress::{ApiIngress, ApiIngressConfig};

#[utoipa::path(post, path = "/ping", responses((status = 200, description = "pong")))]
async fn ping() -> &'static str {
    "pong"
}

#[derive(OpenApi)]
#[openapi(paths(ping))]
struct PingDoc;

fn ingress(config: ApiIngressConfig) -> ApiIngress {
    ApiIngress::new(config).mount(
        "ping",
        Router::new().route("/ping", post(ping)),
        PingDoc::openapi(),
    )
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_status_and_timestamp() {
    let app = ingress(ApiIngressConfig::default()).build_router().unwrap();

    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_merges_mounted_docs() {
    let app = ingress(ApiIngressConfig::default()).build_router().unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert_eq!(doc["info"]["title"], "Notes API");
    assert!(doc["paths"]["/ping"]["post"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
    assert!(doc["components"]["schemas"]["Problem"].is_object());
}

#[tokio::test]
async fn docs_can_be_disabled() {
    let config = ApiIngressConfig {
        enable_docs: false,
        ..Default::default()
    };
    let app = ingress(config).build_router().unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_problem_json() {
    let app = ingress(ApiIngressConfig::default()).build_router().unwrap();

    let resp = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    assert_eq!(body_json(resp).await["code"], "ROUTE_NOT_FOUND");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let config = ApiIngressConfig {
        body_limit_bytes: 8,
        ..Default::default()
    };
    let app = ingress(config).build_router().unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ping")
                .header(header::CONTENT_LENGTH, "32")
                .body(Body::from("x".repeat(32)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn serves_until_shutdown() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();

    let server = tokio::spawn(async move {
        ingress(ApiIngressConfig::default())
            .serve_on(listener, async {
                let _ = rx.await;
            })
            .await
    });

    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
