pub mod audit;
pub mod boilerplate;
pub mod sitemap;

pub use audit::{audit_html_handler, audit_url_handler};
pub use boilerplate::boilerplate_handler;
pub use sitemap::sitemap_handler;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "status": "error",
            "message": message.into(),
        })),
    )
        .into_response()
}
