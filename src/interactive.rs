use crate::services::site_audit_service::{
    normalize_url, run_audit_from_file, run_audit_from_url, ScoringRules,
};
use crate::utils::errors::AuditError;
use crate::utils::{
    default_report_filename, ensure_pdf_extension, save_report_pdf, save_report_text, ReportFormat,
};
use anyhow::Result;
use chrono::Local;
use reqwest::Client;
use std::io::{BufRead, Write};
use std::path::Path;

const RULE: &str = "======================================================================";

/// Prints `message` and reads one trimmed line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report_failure<W: Write>(out: &mut W, err: &AuditError) -> Result<()> {
    writeln!(out, "❌ ERROR: {}", err)?;
    if let AuditError::FileNotFound(_) = err {
        if cfg!(windows) {
            writeln!(
                out,
                "💡 Hint: On Windows, use backslashes (\\) and make sure the file extension (.html) is included."
            )?;
        } else {
            writeln!(out, "💡 Hint: Ensure you've provided the full, correct path.")?;
        }
    }
    Ok(())
}

/// Main menu: audit a local file or a URL, then offer to save the report.
/// Ends after one successful audit, on "Exit", or when input runs out.
pub async fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    client: &Client,
    rules: &ScoringRules,
) -> Result<()> {
    loop {
        writeln!(out, "\n{}", RULE)?;
        writeln!(out, "           W E L C O M E   T O   T H E   S E O   A S S I S T A N T")?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Choose your audit source:")?;
        writeln!(out, "1. Local File (HTML file on your computer)")?;
        writeln!(out, "2. Web URL (Live website address)")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(input, out, "Enter your choice (1, 2, or 3): ")? else {
            return Ok(());
        };

        let (target, result) = match choice.as_str() {
            "1" => {
                let Some(path) = prompt(input, out, "Enter the full path to the HTML file: ")?
                else {
                    return Ok(());
                };
                let result = run_audit_from_file(Path::new(&path), rules).await;
                (path, result)
            }
            "2" => {
                let Some(url) =
                    prompt(input, out, "Enter the full URL (e.g., https://www.example.com): ")?
                else {
                    return Ok(());
                };
                let url = normalize_url(&url);
                let result = run_audit_from_url(client, &url, rules).await;
                (url, result)
            }
            "3" => {
                writeln!(out, "Exiting SEO Assistant. Goodbye!")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?;
                continue;
            }
        };

        match result {
            Ok(outcome) => {
                writeln!(out, "✅ Successfully loaded content from: {}", target)?;
                writeln!(out, "{}", outcome.report)?;
                save_results_interactive(input, out, &outcome.report, &target).await?;
                return Ok(());
            }
            Err(e) => report_failure(out, &e)?,
        }
    }
}

/// Save menu: text, PDF or nothing. Write failures are printed and end the menu.
pub async fn save_results_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    report: &str,
    source: &str,
) -> Result<()> {
    let now = Local::now();
    loop {
        writeln!(out, "\nChoose save format:")?;
        writeln!(out, "1. Text File (.txt)")?;
        writeln!(out, "2. PDF Document (.pdf)")?;
        writeln!(out, "3. Don't save")?;

        let Some(choice) = prompt(input, out, "Enter your choice (1, 2, or 3): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let default = default_report_filename(source, ReportFormat::Txt, now);
                let message = format!("Enter filename (default: {}): ", default);
                let filename = prompt(input, out, &message)?
                    .filter(|f| !f.is_empty())
                    .unwrap_or(default);
                match save_report_text(Path::new(&filename), report).await {
                    Ok(()) => writeln!(out, "✅ Results successfully saved to: {}", filename)?,
                    Err(e) => writeln!(out, "❌ ERROR: {}", e)?,
                }
                return Ok(());
            }
            "2" => {
                let default = default_report_filename(source, ReportFormat::Pdf, now);
                let message = format!("Enter PDF filename (default: {}): ", default);
                let filename = prompt(input, out, &message)?
                    .filter(|f| !f.is_empty())
                    .unwrap_or(default);
                let filename = ensure_pdf_extension(&filename);
                match save_report_pdf(Path::new(&filename), report).await {
                    Ok(()) => writeln!(out, "✅ Results successfully saved to PDF: {}", filename)?,
                    Err(e) => writeln!(out, "❌ ERROR: Could not save file as PDF. ({})", e)?,
                }
                return Ok(());
            }
            "3" => {
                writeln!(out, "Report not saved.")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}
