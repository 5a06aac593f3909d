use crate::utils::errors::SitemapError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ChangeFreq::Always),
            "hourly" => Ok(ChangeFreq::Hourly),
            "daily" => Ok(ChangeFreq::Daily),
            "weekly" => Ok(ChangeFreq::Weekly),
            "monthly" => Ok(ChangeFreq::Monthly),
            "yearly" => Ok(ChangeFreq::Yearly),
            "never" => Ok(ChangeFreq::Never),
            other => Err(SitemapError::InvalidChangeFreq(other.to_string())),
        }
    }
}

// Crawl priority, always within 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Priority(f64);

impl Priority {
    pub fn new(value: f64) -> Result<Self, SitemapError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Priority(value))
        } else {
            Err(SitemapError::InvalidPriority(value.to_string()))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority(0.5)
    }
}

impl FromStr for Priority {
    type Err = SitemapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| SitemapError::InvalidPriority(s.to_string()))?;
        Priority::new(value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapOptions {
    pub base_url: String,
    pub changefreq: ChangeFreq,
    pub priority: Priority,
}

impl SitemapOptions {
    /// Validates the base URL and normalizes it to end with `/`
    pub fn new(
        base_url: &str,
        changefreq: ChangeFreq,
        priority: Priority,
    ) -> Result<Self, SitemapError> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SitemapError::InvalidBaseUrl(base_url.to_string()));
        }
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Ok(Self {
            base_url,
            changefreq,
            priority,
        })
    }
}
