use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

pub const MISSING: &str = "❌ MISSING";
pub const NOT_AVAILABLE: &str = "N/A";
pub const PARSE_ERROR_TYPE: &str = "PARSE ERROR";
pub const UNKNOWN_TYPE: &str = "Unknown Type";

/// Renders an optional tag value, falling back to the missing sentinel
pub fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

// <title> and charset
#[derive(Debug, Clone, Default, Serialize)]
pub struct EssentialTags {
    pub title: Option<String>,
    pub charset: Option<String>,
}

// pub struct for a language alternate; order and duplicates are kept as found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HreflangEntry {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CoreSeoTags {
    pub canonical: Option<String>,
    pub description: Option<String>,
    pub robots: Option<String>,
    pub keywords: Option<String>,
    pub hreflang: Vec<HreflangEntry>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialTags {
    pub open_graph: BTreeMap<String, String>,
    pub twitter_card: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PwaTags {
    pub meta: BTreeMap<String, String>,
    pub links: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceHint {
    pub href: String,
    #[serde(rename = "as")]
    pub as_type: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl fmt::Display for PerformanceHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (as='{}', type='{}')",
            self.href, self.as_type, self.mime_type
        )
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TechnicalTags {
    pub performance_hints: BTreeMap<String, PerformanceHint>,
    pub http_equiv: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconLink {
    pub href: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkTags {
    pub icons: BTreeMap<String, IconLink>,
    pub document: BTreeMap<String, String>,
    pub other: BTreeMap<String, String>,
}

// One JSON-LD script; `object` is None when the script could not be parsed
#[derive(Debug, Clone, Serialize)]
pub struct StructuredDataItem {
    pub index: usize,
    pub declared_type: String,
    pub snippet: String,
    pub object: Option<Map<String, Value>>,
}

impl StructuredDataItem {
    pub fn script_id(&self) -> String {
        format!("#{}", self.index)
    }

    pub fn failed(index: usize) -> Self {
        Self {
            index,
            declared_type: PARSE_ERROR_TYPE.to_string(),
            snippet: "Error parsing JSON".to_string(),
            object: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ImageStats {
    pub total: usize,
    pub missing_alt: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalScript {
    pub src: String,
    pub is_async: bool,
    pub defer: bool,
}

// Everything collected from a document in the single extraction pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagBuckets {
    pub essential: EssentialTags,
    pub core: CoreSeoTags,
    pub social: SocialTags,
    pub pwa: PwaTags,
    pub technical: TechnicalTags,
    pub links: LinkTags,
    pub other_meta: BTreeMap<String, String>,
    pub structured_data: Vec<StructuredDataItem>,
    pub images: ImageStats,
    pub scripts: Vec<ExternalScript>,
}
