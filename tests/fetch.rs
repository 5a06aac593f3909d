use axum::{http::StatusCode, response::Html, routing::get, Router};
use seo_assistant::config::Config;
use seo_assistant::models::audit::Grade;
use seo_assistant::services::site_audit_service::{
    build_client, fetch_html, run_audit_from_url, ScoringRules,
};
use seo_assistant::utils::errors::AuditError;
use std::net::SocketAddr;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Served page</title>
  <link rel="canonical" href="https://example.com/served">
  <meta name="robots" content="index, follow">
</head>
<body><img src="x.png" alt="x"></body>
</html>"#;

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/", get(|| async { Html(PAGE) }))
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }))
        .route("/gone", get(|| async { StatusCode::NOT_FOUND }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn fetches_and_audits_a_served_page() {
    let addr = spawn_server().await;
    let client = build_client(&Config::default()).unwrap();
    let url = format!("http://{}/", addr);

    let html = fetch_html(&client, &url).await.unwrap();
    assert!(html.contains("<title>Served page</title>"));

    let outcome = run_audit_from_url(&client, &url, &ScoringRules::default())
        .await
        .unwrap();
    assert_eq!(outcome.source, url);
    // canonical 20 + robots 10 + title 15 + images 10
    assert_eq!(outcome.score.percentage, 55);
    assert_eq!(outcome.score.grade, Grade::D);
}

#[tokio::test]
async fn forbidden_becomes_access_denied() {
    let addr = spawn_server().await;
    let client = build_client(&Config::default()).unwrap();

    let err = fetch_html(&client, &format!("http://{}/forbidden", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, AuditError::AccessDenied { .. }));
    assert!(err.to_string().contains("Access Denied (403)"));
    assert!(err.is_upstream());
}

#[tokio::test]
async fn other_statuses_are_reported() {
    let addr = spawn_server().await;
    let client = build_client(&Config::default()).unwrap();

    let err = fetch_html(&client, &format!("http://{}/gone", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, AuditError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = build_client(&Config::default()).unwrap();
    let err = fetch_html(&client, &format!("http://{}/", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, AuditError::Fetch { .. }));
}
