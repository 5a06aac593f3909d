use crate::config::Config;
use crate::utils::errors::AuditError;
use log::{info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};
use reqwest::{Client, StatusCode};
use std::path::Path;

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Shared client carrying the browser-like headers every fetch sends.
/// gzip/deflate/brotli are negotiated by reqwest itself.
pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(config.fetch_timeout)
        .build()
}

/// Prepends `https://` when the target carries no scheme.
pub fn normalize_url(target: &str) -> String {
    let target = target.trim();
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{}", target)
    }
}

pub async fn fetch_html(client: &Client, url: &str) -> Result<String, AuditError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| AuditError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status == StatusCode::FORBIDDEN {
        warn!("{} answered 403", url);
        return Err(AuditError::AccessDenied {
            url: url.to_string(),
        });
    }
    if !status.is_success() {
        warn!("{} answered {}", url, status);
        return Err(AuditError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| AuditError::Fetch {
        url: url.to_string(),
        source,
    })?;
    info!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

pub async fn read_html_file(path: &Path) -> Result<String, AuditError> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(AuditError::FileNotFound(path.to_path_buf()));
    }
    let html = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AuditError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Loaded {} bytes from {}", html.len(), path.display());
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalize_url_adds_scheme() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url(" http://example.com "), "http://example.com");
        assert_eq!(normalize_url("https://example.com/a"), "https://example.com/a");
    }

    #[tokio::test]
    async fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_html_file(&dir.path().join("nope.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuditError::FileNotFound(_)));
        assert!(!err.is_upstream());
    }

    #[tokio::test]
    async fn reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><title>Local</title></html>").unwrap();
        let html = read_html_file(file.path()).await.unwrap();
        assert!(html.contains("<title>Local</title>"));
    }

    #[test]
    fn client_builds_with_defaults() {
        assert!(build_client(&Config::default()).is_ok());
    }
}
