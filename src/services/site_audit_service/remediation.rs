use crate::models::audit::TagBuckets;
use serde::Serialize;
use serde_json::Value;

pub const PLACEHOLDER_IMAGE: &str = "https://www.yourdomain.com/social-image-1200x630.jpg";
pub const EXAMPLE_URL: &str = "https://www.yourdomain.com/this-page-path";

/// One checklist entry; warnings carry an instruction instead of a snippet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemediationItem {
    pub item: String,
    pub why: String,
    pub fix: String,
    pub warning: bool,
}

impl RemediationItem {
    fn snippet(item: &str, why: &str, fix: String) -> Self {
        Self {
            item: item.to_string(),
            why: why.to_string(),
            fix,
            warning: false,
        }
    }
}

fn image_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(image_value),
        Value::Object(map) => map.get("url").and_then(image_value),
        _ => None,
    }
}

/// Best social image we can find on the page, or a placeholder.
pub fn suggested_image(tags: &TagBuckets) -> String {
    let og = tags
        .social
        .open_graph
        .get("og:image")
        .filter(|s| !s.is_empty());
    let twitter = tags
        .social
        .twitter_card
        .get("twitter:image")
        .filter(|s| !s.is_empty());
    if let Some(image) = og.or(twitter) {
        return image.clone();
    }

    tags.structured_data
        .first()
        .and_then(|item| item.object.as_ref())
        .and_then(|object| {
            object.get("image").and_then(image_value).or_else(|| {
                object
                    .get("publisher")
                    .and_then(|p| p.get("logo"))
                    .and_then(|l| l.get("url"))
                    .and_then(image_value)
            })
        })
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

pub fn build_remediation_items(tags: &TagBuckets) -> Vec<RemediationItem> {
    let mut items = Vec::new();

    let title = tags
        .essential
        .title
        .as_deref()
        .unwrap_or("YOUR PAGE TITLE");
    let description = tags
        .core
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("YOUR PAGE DESCRIPTION");

    if tags.core.canonical.is_none() {
        items.push(RemediationItem::snippet(
            "Canonical Link",
            "Tells Google the definitive URL, preventing duplicate content dilution. **CRITICAL for SEO.**",
            format!("<link rel=\"canonical\" href=\"{}\">\n", EXAMPLE_URL),
        ));
    }

    let robots_blocks = tags
        .core
        .robots
        .as_ref()
        .map_or(true, |r| r.to_lowercase().contains("noindex"));
    if robots_blocks {
        items.push(RemediationItem::snippet(
            "Meta Robots Tag",
            "Tells crawlers they may index this page and follow its links. A missing or `noindex` value costs visibility.",
            "<meta name=\"robots\" content=\"index, follow\">\n".to_string(),
        ));
    }

    if tags.essential.title.is_none() {
        items.push(RemediationItem::snippet(
            "Title Tag",
            "The title is the headline shown in search results and browser tabs.",
            "<title>YOUR PAGE TITLE</title>\n".to_string(),
        ));
    }

    if tags
        .core
        .description
        .as_deref()
        .map_or(true, str::is_empty)
    {
        items.push(RemediationItem::snippet(
            "Meta Description",
            "Search engines use it as the snippet under your title. Without it they pick arbitrary page text.",
            "<meta name=\"description\" content=\"YOUR PAGE DESCRIPTION\">\n".to_string(),
        ));
    }

    if tags.core.keywords.is_some() {
        items.push(RemediationItem {
            item: "Meta Keywords Tag".to_string(),
            why: "Google officially ignores this tag. Remove it for cleaner, lighter code."
                .to_string(),
            fix: "Remove the `<meta name=\"keywords\" ...>` tag from your HTML.".to_string(),
            warning: true,
        });
    }

    let image = suggested_image(tags);

    if tags.social.open_graph.is_empty() {
        items.push(RemediationItem::snippet(
            "Open Graph (og:) Tags",
            "Controls the rich snippet when shared on Facebook, LinkedIn, etc.",
            format!(
                "<meta property=\"og:title\" content=\"{title}\">\n\
                 <meta property=\"og:description\" content=\"{description}\">\n\
                 <meta property=\"og:type\" content=\"article\">\n\
                 <meta property=\"og:url\" content=\"{EXAMPLE_URL}\">\n\
                 <meta property=\"og:image\" content=\"{image}\">\n"
            ),
        ));
    }

    if tags.social.twitter_card.is_empty() {
        items.push(RemediationItem::snippet(
            "Twitter Card Tags (twitter:)",
            "Controls the rich media display for your link when shared on X (formerly Twitter).",
            format!(
                "<meta name=\"twitter:card\" content=\"summary_large_image\">\n\
                 <meta name=\"twitter:site\" content=\"@yourhandle\"> (Replace with your X handle)\n\
                 <meta name=\"twitter:title\" content=\"{title}\">\n\
                 <meta name=\"twitter:description\" content=\"{description}\">\n\
                 <meta name=\"twitter:image\" content=\"{image}\">\n"
            ),
        ));
    }

    items
}
