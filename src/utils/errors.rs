use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining or auditing a document
#[derive(Error, Debug)]
pub enum AuditError {
    #[error(
        "Access Denied (403). The server at '{url}' is actively blocking automated requests. \
         Try the local file option, or check if the server requires a different User-Agent."
    )]
    AccessDenied { url: String },

    #[error("Failed to fetch URL '{url}': server answered {status}")]
    HttpStatus { url: String, status: u16 },

    #[error(
        "Failed to fetch URL '{url}'. Check the URL, your internet connection, or if the server is blocking your request. ({source})"
    )]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("File not found at path: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The document is empty, nothing to audit")]
    EmptyDocument,

    #[error("Invalid selector {0}")]
    Selector(String),
}

impl AuditError {
    /// True when the failure came from the remote side rather than local input
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AuditError::AccessDenied { .. }
                | AuditError::HttpStatus { .. }
                | AuditError::Fetch { .. }
        )
    }
}

/// Errors raised while indexing a folder into a sitemap
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Please select a valid root folder: {0}")]
    InvalidRoot(PathBuf),

    #[error("Base URL must start with 'http://' or 'https://': {0}")]
    InvalidBaseUrl(String),

    #[error("Priority must be between 0.0 and 1.0, got {0}")]
    InvalidPriority(String),

    #[error("Unknown change frequency: {0}")]
    InvalidChangeFreq(String),

    #[error("IO error while indexing: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(String),
}

/// Errors raised while rendering a boilerplate page or handling its settings
#[derive(Error, Debug)]
pub enum BoilerplateError {
    #[error("An FAQ page needs at least one question and answer")]
    EmptyFaq,

    #[error("Invalid FAQ entry '{0}', expected \"question::answer\"")]
    InvalidFaqEntry(String),

    #[error("Invalid settings file format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while writing a report to disk
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Could not save file '{path}'. Check permissions or the path provided. ({source})")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build PDF document: {0}")]
    Pdf(String),
}

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
