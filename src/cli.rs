use crate::models::{ChangeFreq, FaqEntry, SchemaShape};
use crate::utils::ReportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seo-assistant",
    version,
    about = "Audit page metadata, build sitemaps and generate SEO-ready HTML"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a local HTML file or a live URL
    Audit {
        /// Path to a local file, or a URL (https:// is added when missing)
        target: String,
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
        #[arg(long, help = "Where to save the report (defaults to a timestamped name)")]
        output: Option<PathBuf>,
        #[arg(long, default_value_t = false, help = "Print a JSON summary instead of the report")]
        json: bool,
    },
    /// Index a folder of site files into sitemap.xml
    Sitemap {
        root: PathBuf,
        #[arg(long)]
        base_url: String,
        #[arg(long, value_enum, default_value_t = ChangeFreq::Monthly)]
        changefreq: ChangeFreq,
        #[arg(long, default_value_t = 0.5)]
        priority: f64,
        #[arg(long, default_value = "sitemap.xml")]
        output: PathBuf,
    },
    /// Render an HTML boilerplate page
    Boilerplate {
        #[arg(long, help = "JSON settings file to import")]
        settings: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = SchemaShape::Article)]
        schema: SchemaShape,
        #[arg(long = "faq", help = "Question and answer as \"question::answer\"")]
        faq: Vec<FaqEntry>,
        #[arg(long, default_value = "index.html")]
        output: PathBuf,
        #[arg(long, help = "Also write the effective settings to this JSON file")]
        export_settings: Option<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, help = "Listen address, overrides SEO_BIND_ADDR")]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["seo-assistant"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_boilerplate_faq_pairs() {
        let cli = Cli::try_parse_from([
            "seo-assistant",
            "boilerplate",
            "--schema",
            "faq",
            "--faq",
            "What?::This.",
            "--faq",
            "Why?::Because.",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Boilerplate { schema, faq, .. }) => {
                assert_eq!(schema, SchemaShape::Faq);
                assert_eq!(faq.len(), 2);
                assert_eq!(faq[1].answer, "Because.");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_changefreq() {
        assert!(Cli::try_parse_from([
            "seo-assistant",
            "sitemap",
            ".",
            "--base-url",
            "https://example.com",
            "--changefreq",
            "fortnightly",
        ])
        .is_err());
    }
}
