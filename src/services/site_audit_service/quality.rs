use crate::models::audit::{
    AltTextVerdict, ExternalScript, ImageStats, LengthStatus, LengthVerdict, QualityReport,
    RenderBlockingVerdict, SchemaStatus, SchemaVerdict, StructuredDataItem, TagBuckets,
};
use serde_json::Value;

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_DESC_CHARS: usize = 160;
pub const MIN_DESC_CHARS: usize = 70;

// Scripts served from this prefix are not flagged as render-blocking
pub const CDN_ALLOW_PREFIX: &str = "//cdnjs";
const SCRIPT_SRC_CHARS: usize = 50;

// Properties Google requires for the schema types we know how to validate
pub const SCHEMA_REQUIREMENTS: [(&str, &[&str]); 6] = [
    ("Article", &["headline", "image", "datePublished"]),
    ("TechArticle", &["headline", "image", "datePublished"]),
    (
        "NewsArticle",
        &["headline", "image", "datePublished", "dateModified"],
    ),
    ("Product", &["name", "image", "description", "offers"]),
    (
        "Recipe",
        &[
            "name",
            "image",
            "description",
            "aggregateRating",
            "recipeIngredient",
        ],
    ),
    ("FAQPage", &["mainEntity"]),
];

pub fn schema_requirements(schema_type: &str) -> Option<&'static [&'static str]> {
    SCHEMA_REQUIREMENTS
        .iter()
        .find(|(name, _)| *name == schema_type)
        .map(|(_, required)| *required)
}

pub fn analyze_tag_quality(tags: &TagBuckets) -> QualityReport {
    QualityReport {
        title: check_title(tags.essential.title.as_deref()),
        description: check_description(tags.core.description.as_deref()),
        image_alt: check_image_alt(tags.images),
        render_blocking: check_render_blocking(&tags.scripts),
        schema: tags.structured_data.iter().map(validate_schema).collect(),
    }
}

pub fn check_title(title: Option<&str>) -> LengthVerdict {
    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return LengthVerdict::missing();
    };
    let length = title.chars().count();

    if length > MAX_TITLE_CHARS {
        let over = length - MAX_TITLE_CHARS;
        LengthVerdict {
            status: LengthStatus::TooLong { over },
            length,
            recommendation: format!(
                "Title is {} characters over the recommended limit. It may be truncated in search results.",
                over
            ),
        }
    } else {
        LengthVerdict {
            status: LengthStatus::Optimal,
            length,
            recommendation: format!(
                "Title length is good ({}/{} chars).",
                length, MAX_TITLE_CHARS
            ),
        }
    }
}

pub fn check_description(description: Option<&str>) -> LengthVerdict {
    let Some(description) = description.filter(|d| !d.is_empty()) else {
        return LengthVerdict::missing();
    };
    let length = description.chars().count();

    let (status, recommendation) = if length > MAX_DESC_CHARS {
        let over = length - MAX_DESC_CHARS;
        (
            LengthStatus::TooLong { over },
            format!(
                "Description is {} characters over the recommended limit. It will likely be truncated.",
                over
            ),
        )
    } else if length < MIN_DESC_CHARS {
        (
            LengthStatus::TooShort,
            format!(
                "Description is too short. Try to elaborate to use the full {} characters for better CTR.",
                MIN_DESC_CHARS
            ),
        )
    } else {
        (
            LengthStatus::Optimal,
            format!(
                "Description length is good ({}/{} chars).",
                length, MAX_DESC_CHARS
            ),
        )
    };

    LengthVerdict {
        status,
        length,
        recommendation,
    }
}

pub fn check_image_alt(images: ImageStats) -> AltTextVerdict {
    let recommendation = match (images.total, images.missing_alt) {
        (0, _) => "No <img> tags found.".to_string(),
        (_, 0) => "✅ All images have \"alt\" text.".to_string(),
        (total, missing) => format!(
            "❌ {} out of {} images are missing \"alt\" text. Fix this for accessibility and Image SEO.",
            missing, total
        ),
    };
    AltTextVerdict {
        total: images.total,
        missing: images.missing_alt,
        recommendation,
    }
}

pub fn check_render_blocking(scripts: &[ExternalScript]) -> RenderBlockingVerdict {
    RenderBlockingVerdict {
        scripts: scripts
            .iter()
            .filter(|s| !s.is_async && !s.defer && !s.src.starts_with(CDN_ALLOW_PREFIX))
            .map(|s| s.src.chars().take(SCRIPT_SRC_CHARS).collect())
            .collect(),
    }
}

/// JSON truthiness: null, false, 0 and empty containers count as missing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub fn validate_schema(item: &StructuredDataItem) -> SchemaVerdict {
    let Some(object) = &item.object else {
        return SchemaVerdict {
            index: item.index,
            schema_type: item.declared_type.clone(),
            status: SchemaStatus::Malformed,
        };
    };

    let schema_type = item
        .declared_type
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let status = match schema_requirements(&schema_type) {
        Some(required) => {
            let missing: Vec<String> = required
                .iter()
                .filter(|prop| !object.get(**prop).is_some_and(is_present))
                .map(|prop| prop.to_string())
                .collect();
            if missing.is_empty() {
                SchemaStatus::Valid
            } else {
                SchemaStatus::MissingProperties { missing }
            }
        }
        None => SchemaStatus::Unknown,
    };

    SchemaVerdict {
        index: item.index,
        schema_type,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parsed_item(value: Value) -> StructuredDataItem {
        let object = value.as_object().cloned().unwrap();
        let declared_type = object
            .get("@type")
            .and_then(Value::as_str)
            .unwrap_or("Unknown Type")
            .to_string();
        StructuredDataItem {
            index: 1,
            declared_type,
            snippet: String::new(),
            object: Some(object),
        }
    }

    #[test]
    fn title_boundary_at_sixty_chars() {
        let at_limit = "a".repeat(60);
        assert_eq!(check_title(Some(&at_limit)).status, LengthStatus::Optimal);

        let over = "a".repeat(61);
        let verdict = check_title(Some(&over));
        assert_eq!(verdict.status, LengthStatus::TooLong { over: 1 });
        assert_eq!(verdict.length, 61);
        assert!(verdict.recommendation.starts_with("Title is 1 characters over"));

        assert_eq!(check_title(None).status, LengthStatus::Missing);
        assert_eq!(check_title(Some("")).status, LengthStatus::Missing);
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let title = "é".repeat(60);
        assert_eq!(check_title(Some(&title)).status, LengthStatus::Optimal);
    }

    #[test]
    fn description_boundaries() {
        let check = |n: usize| check_description(Some(&"d".repeat(n))).status;
        assert_eq!(check(69), LengthStatus::TooShort);
        assert_eq!(check(70), LengthStatus::Optimal);
        assert_eq!(check(160), LengthStatus::Optimal);
        assert_eq!(check(161), LengthStatus::TooLong { over: 1 });
        assert_eq!(check_description(Some("")).status, LengthStatus::Missing);
    }

    #[test]
    fn image_alt_recommendations() {
        let none = check_image_alt(ImageStats::default());
        assert_eq!(none.recommendation, "No <img> tags found.");

        let some_missing = check_image_alt(ImageStats {
            total: 4,
            missing_alt: 1,
        });
        assert!(some_missing.recommendation.starts_with("❌ 1 out of 4"));
    }

    #[test]
    fn async_defer_and_cdn_scripts_are_not_blocking() {
        let script = |src: &str, is_async: bool, defer: bool| ExternalScript {
            src: src.to_string(),
            is_async,
            defer,
        };
        let verdict = check_render_blocking(&[
            script("/app.js", false, false),
            script("/async.js", true, false),
            script("/defer.js", false, true),
            script("//cdnjs.cloudflare.com/lib.js", false, false),
            script(&format!("/{}", "x".repeat(80)), false, false),
        ]);
        assert_eq!(verdict.scripts.len(), 2);
        assert_eq!(verdict.scripts[0], "/app.js");
        assert_eq!(verdict.scripts[1].chars().count(), SCRIPT_SRC_CHARS);
        assert!(verdict.lines()[0].starts_with("⚠️"));

        assert!(check_render_blocking(&[]).lines()[0].starts_with("✅"));
    }

    #[test]
    fn schema_with_all_required_properties_is_valid() {
        let verdict = validate_schema(&parsed_item(json!({
            "@type": "Article",
            "headline": "Hello",
            "image": ["https://example.com/a.png"],
            "datePublished": "2024-01-01"
        })));
        assert!(verdict.is_valid());
        assert_eq!(
            verdict.message(),
            "✅ Article: All required properties are present."
        );
    }

    #[test]
    fn falsy_properties_count_as_missing() {
        let verdict = validate_schema(&parsed_item(json!({
            "@type": "NewsArticle",
            "headline": "",
            "image": [],
            "datePublished": "2024-01-01",
            "dateModified": null
        })));
        assert_eq!(
            verdict.status,
            SchemaStatus::MissingProperties {
                missing: vec![
                    "headline".to_string(),
                    "image".to_string(),
                    "dateModified".to_string()
                ]
            }
        );
        assert!(verdict.message().contains("headline, image, dateModified"));
    }

    #[test]
    fn unknown_and_malformed_schemas() {
        let unknown = validate_schema(&parsed_item(json!({"@type": "WebSite", "name": "x"})));
        assert_eq!(unknown.status, SchemaStatus::Unknown);
        assert!(unknown.message().starts_with("ℹ️ WebSite"));

        let malformed = validate_schema(&StructuredDataItem::failed(2));
        assert_eq!(malformed.status, SchemaStatus::Malformed);
        assert_eq!(malformed.index, 2);
        assert!(!malformed.is_valid());
    }
}
