use crate::models::audit::{
    ExternalScript, HreflangEntry, IconLink, PerformanceHint, StructuredDataItem, TagBuckets,
    NOT_AVAILABLE, UNKNOWN_TYPE,
};
use crate::utils::errors::AuditError;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use serde_json::{Map, Value};

// Link relations for icons, PWA, performance hints and document navigation
const ICON_RELS: [&str; 6] = [
    "icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
    "shortcut icon",
    "fluid-icon",
    "mask-icon",
];
const PWA_MOBILE_RELS: [&str; 2] = ["manifest", "apple-touch-startup-image"];
const PERFORMANCE_RELS: [&str; 6] = [
    "dns-prefetch",
    "preconnect",
    "preload",
    "prefetch",
    "prerender",
    "modulepreload",
];
const DOCUMENT_RELS: [&str; 8] = [
    "prev",
    "next",
    "license",
    "author",
    "search",
    "help",
    "pingback",
    "privacy-policy",
];

// Meta names for PWA/mobile/Microsoft tiles, compared lowercased
const PWA_MOBILE_NAMES: [&str; 9] = [
    "apple-mobile-web-app-capable",
    "apple-mobile-web-app-status-bar-style",
    "apple-mobile-web-app-title",
    "msapplication-tilecolor",
    "msapplication-tileimage",
    "msapplication-config",
    "application-name",
    "theme-color",
    "viewport",
];

const ALL_HTTP_EQUIVS: [&str; 7] = [
    "content-type",
    "content-language",
    "refresh",
    "page-enter",
    "page-exit",
    "x-ua-compatible",
    "default-style",
];

const SNIPPET_CHARS: usize = 100;

fn selector(css: &str) -> Result<Selector, AuditError> {
    Selector::parse(css).map_err(|e| AuditError::Selector(format!("'{}': {:?}", css, e)))
}

/// Parses the document once and sorts every link, meta and JSON-LD tag into its bucket.
pub fn extract_tags(html: &str) -> Result<TagBuckets, AuditError> {
    if html.trim().is_empty() {
        return Err(AuditError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let mut tags = TagBuckets::default();

    extract_essential(&document, &mut tags)?;
    extract_links(&document, &mut tags)?;
    extract_meta(&document, &mut tags)?;
    extract_structured_data(&document, &mut tags)?;
    extract_images(&document, &mut tags)?;
    extract_scripts(&document, &mut tags)?;

    debug!(
        "Extracted {} open graph, {} twitter, {} json-ld, {} images",
        tags.social.open_graph.len(),
        tags.social.twitter_card.len(),
        tags.structured_data.len(),
        tags.images.total
    );
    Ok(tags)
}

fn attr<'a>(el: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

fn attr_lower(el: &ElementRef<'_>, name: &str) -> String {
    attr(el, name).unwrap_or_default().trim().to_lowercase()
}

fn attr_or_na(el: &ElementRef<'_>, name: &str) -> String {
    attr(el, name).unwrap_or(NOT_AVAILABLE).to_string()
}

fn extract_essential(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    tags.essential.title = document
        .select(&selector("title")?)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    tags.essential.charset = match document.select(&selector("meta[charset]")?).next() {
        Some(el) => attr(&el, "charset").map(str::to_string),
        None => document
            .select(&selector("meta[http-equiv]")?)
            .find(|el| attr_lower(el, "http-equiv") == "content-type")
            .and_then(|el| attr(&el, "content").map(str::to_string)),
    };
    Ok(())
}

/// Lowercased rel value with whitespace collapsed; matches a set by whole value or by token.
fn rel_matches(rel: &str, set: &[&str]) -> bool {
    set.contains(&rel) || rel.split(' ').any(|token| set.contains(&token))
}

fn extract_links(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    for el in document.select(&selector("link")?) {
        let rel = attr(&el, "rel")
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        if rel.is_empty() {
            continue;
        }

        let href = attr_or_na(&el, "href");
        let tag_key = format!("rel='{}'", rel);
        let hreflang = attr(&el, "hreflang").filter(|h| !h.is_empty());

        if rel == "canonical" {
            tags.core.canonical = Some(href);
        } else if rel.contains("alternate") && hreflang.is_some() {
            tags.core.hreflang.push(HreflangEntry {
                hreflang: hreflang.unwrap_or_default().to_string(),
                href,
            });
        } else if rel_matches(&rel, &PWA_MOBILE_RELS) {
            tags.pwa.links.insert(tag_key, href);
        } else if rel_matches(&rel, &PERFORMANCE_RELS) {
            tags.technical.performance_hints.insert(
                tag_key,
                PerformanceHint {
                    href,
                    as_type: attr_or_na(&el, "as"),
                    mime_type: attr_or_na(&el, "type"),
                },
            );
        } else if rel_matches(&rel, &ICON_RELS) {
            tags.links.icons.insert(
                tag_key,
                IconLink {
                    href,
                    sizes: attr_or_na(&el, "sizes"),
                    mime_type: attr_or_na(&el, "type"),
                },
            );
        } else if rel_matches(&rel, &DOCUMENT_RELS) {
            tags.links.document.insert(tag_key, href);
        } else if rel != "alternate" {
            tags.links.other.insert(tag_key, href);
        }
    }
    Ok(())
}

fn extract_meta(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    for el in document.select(&selector("meta")?) {
        if attr(&el, "charset").is_some_and(|c| !c.is_empty()) {
            continue;
        }
        let name = attr_lower(&el, "name");
        let prop = attr_lower(&el, "property");
        let http_equiv = attr_lower(&el, "http-equiv");
        let content = attr(&el, "content").unwrap_or_default().to_string();

        // og: is only read from `property`, twitter: only from `name`
        if prop.starts_with("og:") {
            tags.social.open_graph.insert(prop, content);
        } else if name.starts_with("twitter:") {
            tags.social.twitter_card.insert(name, content);
        } else if name == "description" {
            tags.core.description = Some(content);
        } else if name == "robots" {
            tags.core.robots = Some(content);
        } else if name == "keywords" {
            tags.core.keywords = Some(content);
        } else if PWA_MOBILE_NAMES.contains(&name.as_str()) {
            tags.pwa.meta.insert(name, content);
        } else if ALL_HTTP_EQUIVS.contains(&http_equiv.as_str()) {
            tags.technical.http_equiv.insert(http_equiv, content);
        } else if !name.is_empty() || !prop.is_empty() {
            let key = if name.is_empty() { prop } else { name };
            tags.other_meta.insert(key, content);
        }
    }
    Ok(())
}

fn declared_type(object: &Map<String, Value>) -> String {
    match object.get("@type") {
        Some(Value::String(t)) => t.clone(),
        Some(Value::Array(types)) => types
            .iter()
            .find_map(Value::as_str)
            .unwrap_or(UNKNOWN_TYPE)
            .to_string(),
        _ => UNKNOWN_TYPE.to_string(),
    }
}

fn snippet(source: &str) -> String {
    let flat: String = source.replace('\n', "").chars().take(SNIPPET_CHARS).collect();
    format!("{}...", flat)
}

fn extract_structured_data(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    let scripts = selector(r#"script[type="application/ld+json"]"#)?;
    for (i, el) in document.select(&scripts).enumerate() {
        let index = i + 1;
        let raw = el.text().collect::<String>();
        let source = raw.trim();

        let item = match serde_json::from_str::<Value>(source) {
            Ok(Value::Object(object)) => StructuredDataItem {
                index,
                declared_type: declared_type(&object),
                snippet: snippet(source),
                object: Some(object),
            },
            Ok(_) => {
                warn!("JSON-LD script #{} is not a JSON object", index);
                StructuredDataItem::failed(index)
            }
            Err(e) => {
                warn!("JSON-LD script #{} could not be parsed: {}", index, e);
                StructuredDataItem::failed(index)
            }
        };
        tags.structured_data.push(item);
    }
    Ok(())
}

fn extract_images(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    for el in document.select(&selector("img")?) {
        tags.images.total += 1;
        if attr(&el, "alt").map_or(true, str::is_empty) {
            tags.images.missing_alt += 1;
        }
    }
    Ok(())
}

fn extract_scripts(document: &Html, tags: &mut TagBuckets) -> Result<(), AuditError> {
    for el in document.select(&selector("script[src]")?) {
        let Some(src) = attr(&el, "src").filter(|s| !s.is_empty()) else {
            continue;
        };
        tags.scripts.push(ExternalScript {
            src: src.to_string(),
            is_async: attr(&el, "async").is_some(),
            defer: attr(&el, "defer").is_some(),
        });
    }
    Ok(())
}
