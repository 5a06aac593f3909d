pub mod compute;
pub mod extract;
pub mod fetch;
pub mod quality;
pub mod remediation;
pub mod report;

pub use compute::{generate_overall_score_and_grade, ScoringRules};
pub use extract::extract_tags;
pub use fetch::{build_client, fetch_html, normalize_url, read_html_file};
pub use quality::analyze_tag_quality;
pub use remediation::{build_remediation_items, RemediationItem};
pub use report::{render_report, ReportContext};

use crate::models::audit::AuditOutcome;
use crate::utils::errors::AuditError;
use chrono::Local;
use log::info;
use reqwest::Client;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Runs extraction, quality checks, scoring and report rendering over one document.
pub fn perform_metadata_audit(
    html: &str,
    source: &str,
    rules: &ScoringRules,
    timestamp: &str,
) -> Result<AuditOutcome, AuditError> {
    let tags = extract_tags(html)?;
    let quality = analyze_tag_quality(&tags);
    let score = generate_overall_score_and_grade(&tags, &quality, rules);
    let remediation = build_remediation_items(&tags);

    let report = render_report(&ReportContext {
        source,
        timestamp,
        tags: &tags,
        quality: &quality,
        score: &score,
        remediation: &remediation,
    });
    info!(
        "Audited {}: {}% ({})",
        source, score.percentage, score.grade
    );

    Ok(AuditOutcome {
        source: source.to_string(),
        tags,
        quality,
        score,
        report,
    })
}

pub async fn run_audit_from_url(
    client: &Client,
    url: &str,
    rules: &ScoringRules,
) -> Result<AuditOutcome, AuditError> {
    let html = fetch_html(client, url).await?;
    perform_metadata_audit(&html, url, rules, &now_timestamp())
}

pub async fn run_audit_from_file(
    path: &Path,
    rules: &ScoringRules,
) -> Result<AuditOutcome, AuditError> {
    let html = read_html_file(path).await?;
    perform_metadata_audit(&html, &path.display().to_string(), rules, &now_timestamp())
}
