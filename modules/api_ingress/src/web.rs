use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json},
};
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Unknown routes answer with a problem document instead of an empty 404.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    apikit::problem::from_parts(
        StatusCode::NOT_FOUND,
        "ROUTE_NOT_FOUND",
        "Not Found",
        format!("No route for {}", uri.path()),
        uri.path(),
    )
}

pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Notes API Docs</title>
  <script src="https://unpkg.com/@stoplight/elements@latest/web-components.min.js"></script>
  <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements@latest/styles.min.css">
</head>
<body>
  <elements-api apiDescriptionUrl="/openapi.json" router="hash" layout="sidebar"></elements-api>
</body>
</html>"#,
    )
}
