use crate::models::audit::{AuditOutcome, CategoryScore, Grade, TagBuckets};
use crate::models::boilerplate::{BoilerplateSettings, FaqEntry, SchemaShape};
use crate::models::sitemap::ChangeFreq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AuditQuery {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct AuditHtmlRequest {
    pub source_name: Option<String>,
    pub html: String,
}

#[derive(Debug, Deserialize)]
pub struct SitemapRequest {
    pub root: String,
    pub base_url: String,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoilerplateRequest {
    pub settings: Option<BoilerplateSettings>,
    pub schema: Option<SchemaShape>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub audit_id: Uuid,
    pub source: String,
    pub score: u32,
    pub grade: Grade,
    pub breakdown: Vec<CategoryScore>,
    pub tags: TagBuckets,
    pub report: String,
}

impl From<AuditOutcome> for AuditResponse {
    fn from(outcome: AuditOutcome) -> Self {
        Self {
            audit_id: Uuid::new_v4(),
            source: outcome.source,
            score: outcome.score.percentage,
            grade: outcome.score.grade,
            breakdown: outcome.score.breakdown,
            tags: outcome.tags,
            report: outcome.report,
        }
    }
}
