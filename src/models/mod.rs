// src/models/mod.rs

pub mod api;
pub mod app;
pub mod audit;
pub mod boilerplate;
pub mod sitemap;

pub use api::{AuditHtmlRequest, AuditQuery, AuditResponse, BoilerplateRequest, SitemapRequest};
pub use app::AppState;
pub use audit::{AuditOutcome, Grade, QualityReport, Score, ScoreCategory, TagBuckets};
pub use boilerplate::{BoilerplateSettings, FaqEntry, SchemaShape};
pub use sitemap::{ChangeFreq, Priority, SitemapEntry, SitemapOptions, SITEMAP_NS};
