use crate::utils::errors::PersistError;
use crate::utils::pdf_utils::render_report_pdf;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Txt,
    Pdf,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Txt => "txt",
            ReportFormat::Pdf => "pdf",
        }
    }
}

pub fn sanitize_filename(url: &str) -> String {
    url.replace(|c: char| !c.is_alphanumeric() && c != '.', &'_'.to_string())
}

/// Host of a URL source, or the file stem of a local source.
fn source_base_name(source: &str) -> String {
    let source = source.trim();
    let stripped = source
        .strip_prefix("https://")
        .or_else(|| source.strip_prefix("http://"));

    let base = match stripped {
        Some(rest) => rest.split(['/', '?', '#']).next().unwrap_or_default().to_string(),
        None => Path::new(source)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    sanitize_filename(&base)
}

/// `<source>_audit_report_<YYYYmmdd_HHMMSS>.<ext>`
pub fn default_report_filename(
    source: &str,
    format: ReportFormat,
    now: DateTime<Local>,
) -> String {
    let base = source_base_name(source);
    let base = if base.trim_matches('_').is_empty() {
        "website".to_string()
    } else {
        base
    };
    format!(
        "{}_audit_report_{}.{}",
        base,
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

pub fn ensure_pdf_extension(filename: &str) -> String {
    if filename.to_lowercase().ends_with(".pdf") {
        filename.to_string()
    } else {
        format!("{}.pdf", filename)
    }
}

pub async fn save_report_text(path: &Path, report: &str) -> Result<(), PersistError> {
    fs::write(path, report)
        .await
        .map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved text report to {}", path.display());
    Ok(())
}

pub async fn save_report_pdf(path: &Path, report: &str) -> Result<(), PersistError> {
    let bytes = render_report_pdf(report)?;
    fs::write(path, bytes)
        .await
        .map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    info!("Saved PDF report to {}", path.display());
    Ok(())
}

/// Writes the report in the given format and returns the path actually used.
pub async fn save_report(
    path: &Path,
    report: &str,
    format: ReportFormat,
) -> Result<PathBuf, PersistError> {
    match format {
        ReportFormat::Txt => {
            save_report_text(path, report).await?;
            Ok(path.to_path_buf())
        }
        ReportFormat::Pdf => {
            let path = PathBuf::from(ensure_pdf_extension(&path.to_string_lossy()));
            save_report_pdf(&path, report).await?;
            Ok(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 17, 9, 3, 7).unwrap()
    }

    #[test]
    fn default_name_uses_host_or_stem() {
        assert_eq!(
            default_report_filename(
                "https://www.example.com/blog/post",
                ReportFormat::Txt,
                fixed_now()
            ),
            "www.example.com_audit_report_20240517_090307.txt"
        );
        assert_eq!(
            default_report_filename(
                "/home/me/site/landing page.html",
                ReportFormat::Pdf,
                fixed_now()
            ),
            "landing_page_audit_report_20240517_090307.pdf"
        );
        assert_eq!(
            default_report_filename("https://", ReportFormat::Txt, fixed_now()),
            "website_audit_report_20240517_090307.txt"
        );
    }

    #[test]
    fn pdf_extension_is_appended_once() {
        assert_eq!(ensure_pdf_extension("report"), "report.pdf");
        assert_eq!(ensure_pdf_extension("REPORT.PDF"), "REPORT.PDF");
    }

    #[tokio::test]
    async fn text_report_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let saved = save_report(&path, "✅ line one\nline two", ReportFormat::Txt)
            .await
            .unwrap();
        assert_eq!(saved, path);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "✅ line one\nline two"
        );
    }

    #[tokio::test]
    async fn pdf_report_gets_extension() {
        let dir = tempfile::tempdir().unwrap();
        let saved = save_report(&dir.path().join("audit"), "hello", ReportFormat::Pdf)
            .await
            .unwrap();
        assert_eq!(saved.extension().and_then(|e| e.to_str()), Some("pdf"));
        let bytes = std::fs::read(&saved).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[tokio::test]
    async fn unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = save_report_text(&path, "x").await.unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));
    }
}
