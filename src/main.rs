use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use seo_assistant::api;
use seo_assistant::cli::{Cli, Commands};
use seo_assistant::config::Config;
use seo_assistant::interactive::run_interactive;
use seo_assistant::models::{
    AppState, AuditResponse, BoilerplateSettings, FaqEntry, Priority, SchemaShape, SitemapOptions,
};
use seo_assistant::services::site_audit_service::{
    build_client, normalize_url, run_audit_from_file, run_audit_from_url, ScoringRules,
};
use seo_assistant::services::{generate_sitemap, load_settings, render_html, save_settings};
use seo_assistant::utils::{default_report_filename, save_report, ReportFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    let client = build_client(&config).context("Failed to build HTTP client")?;
    let rules = ScoringRules {
        partial_credit: config.partial_credit,
    };

    match cli.command {
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout();
            run_interactive(&mut input, &mut out, &client, &rules).await
        }
        Some(Commands::Audit {
            target,
            format,
            output,
            json,
        }) => run_audit(&client, &rules, &target, format, output, json).await,
        Some(Commands::Sitemap {
            root,
            base_url,
            changefreq,
            priority,
            output,
        }) => {
            let priority = Priority::new(priority)?;
            let options = SitemapOptions::new(&base_url, changefreq, priority)?;
            run_sitemap(&root, &options, &output).await
        }
        Some(Commands::Boilerplate {
            settings,
            schema,
            faq,
            output,
            export_settings,
        }) => {
            run_boilerplate(
                settings.as_deref(),
                schema,
                &faq,
                &output,
                export_settings.as_deref(),
            )
            .await
        }
        Some(Commands::Serve { bind }) => {
            let bind = bind.unwrap_or_else(|| config.bind_addr.clone());
            let state = Arc::new(AppState { config, client });
            serve(state, &bind).await
        }
    }
}

async fn run_audit(
    client: &reqwest::Client,
    rules: &ScoringRules,
    target: &str,
    format: Option<ReportFormat>,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let local = Path::new(target);
    let outcome = if tokio::fs::try_exists(local).await.unwrap_or(false) {
        run_audit_from_file(local, rules).await?
    } else {
        run_audit_from_url(client, &normalize_url(target), rules).await?
    };

    if json {
        let summary = AuditResponse::from(outcome.clone());
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", outcome.report);
    }

    if format.is_none() && output.is_none() {
        return Ok(());
    }
    let format = format.unwrap_or_default();
    let path = output.unwrap_or_else(|| {
        PathBuf::from(default_report_filename(&outcome.source, format, Local::now()))
    });
    let saved = save_report(&path, &outcome.report, format)
        .await
        .with_context(|| format!("Failed to save report to {}", path.display()))?;
    eprintln!("✅ Results successfully saved to: {}", saved.display());
    Ok(())
}

async fn run_sitemap(root: &Path, options: &SitemapOptions, output: &Path) -> Result<()> {
    let sitemap = generate_sitemap(root, options).await?;
    if sitemap.entries.is_empty() {
        warn!("No indexable files under {}", root.display());
        bail!(
            "No files found with accepted extensions under {}. Check the folder and try again.",
            root.display()
        );
    }

    tokio::fs::write(output, &sitemap.xml)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "✅ Sitemap successfully created with {} URLs at: {}",
        sitemap.entries.len(),
        output.display()
    );
    Ok(())
}

async fn run_boilerplate(
    settings_path: Option<&Path>,
    schema: SchemaShape,
    faq: &[FaqEntry],
    output: &Path,
    export_path: Option<&Path>,
) -> Result<()> {
    let settings = match settings_path {
        Some(path) => load_settings(path)
            .await
            .with_context(|| format!("Failed to import settings from {}", path.display()))?,
        None => BoilerplateSettings::default(),
    };

    let html = render_html(&settings, schema, faq, Local::now().date_naive())?;
    tokio::fs::write(output, html)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("✅ Boilerplate HTML saved to: {}", output.display());

    if let Some(path) = export_path {
        save_settings(path, &settings)
            .await
            .with_context(|| format!("Failed to export settings to {}", path.display()))?;
        println!("✅ Settings exported to: {}", path.display());
    }
    Ok(())
}

async fn serve(state: Arc<AppState>, bind: &str) -> Result<()> {
    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("Server running on http://{}", bind);
    println!("🚀 Server running on http://{}", bind);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
