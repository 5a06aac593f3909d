pub mod quality;
pub mod score;
pub mod tags;

pub use quality::{
    AltTextVerdict, LengthStatus, LengthVerdict, QualityReport, RenderBlockingVerdict,
    SchemaStatus, SchemaVerdict,
};
pub use score::{CategoryScore, Grade, Score, ScoreCategory, GRADING_SCALE, MAX_SCORE};
pub use tags::{
    or_missing, CoreSeoTags, EssentialTags, ExternalScript, HreflangEntry, IconLink, ImageStats,
    LinkTags, PerformanceHint, PwaTags, SocialTags, StructuredDataItem, TagBuckets,
    TechnicalTags, MISSING, NOT_AVAILABLE, PARSE_ERROR_TYPE, UNKNOWN_TYPE,
};

use serde::Serialize;

// Result of one audit run: extracted tags, quality verdicts, score and rendered text
#[derive(Debug, Clone, Serialize)]
pub struct AuditOutcome {
    pub source: String,
    pub tags: TagBuckets,
    pub quality: QualityReport,
    pub score: Score,
    pub report: String,
}
