use super::error_response;
use crate::models::{AppState, AuditHtmlRequest, AuditQuery, AuditResponse};
use crate::services::site_audit_service::{
    normalize_url, now_timestamp, perform_metadata_audit, run_audit_from_url, ScoringRules,
};
use crate::utils::errors::AuditError;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use std::sync::Arc;

fn audit_error_response(e: AuditError) -> Response {
    let status = match &e {
        e if e.is_upstream() => StatusCode::BAD_GATEWAY,
        AuditError::EmptyDocument | AuditError::FileNotFound(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error!("Audit failed: {}", e);
    error_response(status, e.to_string())
}

pub async fn audit_url_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AuditQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    if params.url.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Query parameter 'url' is required");
    }
    let url = normalize_url(&params.url);
    info!("Started URL audit for {}", url);

    let rules = ScoringRules {
        partial_credit: state.config.partial_credit,
    };
    match run_audit_from_url(&state.client, &url, &rules).await {
        Ok(outcome) => (StatusCode::OK, Json(AuditResponse::from(outcome))).into_response(),
        Err(e) => audit_error_response(e),
    }
}

pub async fn audit_html_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AuditHtmlRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    let source = payload
        .source_name
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "inline.html".to_string());

    let rules = ScoringRules {
        partial_credit: state.config.partial_credit,
    };
    match perform_metadata_audit(&payload.html, &source, &rules, &now_timestamp()) {
        Ok(outcome) => (StatusCode::OK, Json(AuditResponse::from(outcome))).into_response(),
        Err(e) => audit_error_response(e),
    }
}
