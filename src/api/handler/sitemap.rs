use super::error_response;
use crate::models::{AppState, Priority, SitemapOptions, SitemapRequest};
use crate::services::sitemap_service::generate_sitemap;
use crate::utils::errors::SitemapError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::{error, info};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Joins a client-supplied root onto the sites directory, refusing anything that could escape it.
pub fn resolve_site_root(sites_dir: &Path, root: &str) -> Result<PathBuf, SitemapError> {
    let relative = Path::new(root.trim());
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(SitemapError::InvalidRoot(relative.to_path_buf()));
    }
    Ok(sites_dir.join(relative))
}

pub async fn sitemap_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SitemapRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    let options = match payload
        .priority
        .map(Priority::new)
        .unwrap_or(Ok(Priority::default()))
        .and_then(|priority| {
            SitemapOptions::new(
                &payload.base_url,
                payload.changefreq.unwrap_or_default(),
                priority,
            )
        }) {
        Ok(options) => options,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let root = match resolve_site_root(&state.config.sites_dir, &payload.root) {
        Ok(root) => root,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    info!("Generating sitemap for {}", root.display());

    match generate_sitemap(&root, &options).await {
        Ok(sitemap) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            sitemap.xml,
        )
            .into_response(),
        Err(SitemapError::InvalidRoot(_)) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Please select a valid root folder: {}", payload.root),
        ),
        Err(e) => {
            error!("Sitemap generation failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_cannot_escape_the_sites_dir() {
        let sites = Path::new("/srv/sites");
        assert_eq!(
            resolve_site_root(sites, "blog").unwrap(),
            PathBuf::from("/srv/sites/blog")
        );
        assert!(resolve_site_root(sites, "../etc").is_err());
        assert!(resolve_site_root(sites, "blog/../../etc").is_err());
        assert!(resolve_site_root(sites, "/etc").is_err());
    }
}
