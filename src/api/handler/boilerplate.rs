use super::error_response;
use crate::models::BoilerplateRequest;
use crate::services::boilerplate_service::render_html;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;

pub async fn boilerplate_handler(
    payload: Result<Json<BoilerplateRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    let settings = payload.settings.unwrap_or_default();
    let shape = payload.schema.unwrap_or_default();

    match render_html(&settings, shape, &payload.faq, Local::now().date_naive()) {
        Ok(html) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}
