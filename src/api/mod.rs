// src/api/mod.rs

pub mod handler;

pub use handler::{audit_html_handler, audit_url_handler, boilerplate_handler, sitemap_handler};

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/audit", get(audit_url_handler))
        .route("/audit/html", post(audit_html_handler))
        .route("/sitemap", post(sitemap_handler))
        .route("/boilerplate", post(boilerplate_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
