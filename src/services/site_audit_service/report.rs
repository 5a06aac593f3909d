use super::quality::{MAX_DESC_CHARS, MAX_TITLE_CHARS, MIN_DESC_CHARS};
use super::remediation::RemediationItem;
use crate::models::audit::{or_missing, QualityReport, Score, TagBuckets};
use std::collections::BTreeMap;
use std::fmt::Display;

const RULE_WIDTH: usize = 70;

/// Everything the text report is rendered from.
pub struct ReportContext<'a> {
    pub source: &'a str,
    pub timestamp: &'a str,
    pub tags: &'a TagBuckets,
    pub quality: &'a QualityReport,
    pub score: &'a Score,
    pub remediation: &'a [RemediationItem],
}

fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

fn category<V: Display>(out: &mut Vec<String>, title: &str, data: &BTreeMap<String, V>) {
    out.push(format!("\n--- {} ({}) ---", title, data.len()));
    if data.is_empty() {
        out.push("  (None Found)".to_string());
    }
    for (key, value) in data {
        out.push(format!("  > {:<35}: {}", key, value));
    }
}

fn link_category<V: Display>(out: &mut Vec<String>, title: &str, data: &BTreeMap<String, V>) {
    out.push(format!("\n--- {} ({}) ---", title, data.len()));
    if data.is_empty() {
        out.push("  (None Found)".to_string());
    }
    for (key, value) in data {
        out.push(format!("  > {:<25}: {}", key, value));
    }
}

pub fn render_report(ctx: &ReportContext<'_>) -> String {
    let mut out = Vec::new();
    out.push(format!("\n--- Running Audit for: {} ---", ctx.source));
    out.push(format!("--- Timestamp: {} ---\n", ctx.timestamp));

    render_tags(&mut out, ctx.tags);
    render_score(&mut out, ctx.score);
    render_remediation(&mut out, ctx.remediation);
    render_quality(&mut out, ctx.quality);

    out.join("\n")
}

fn render_tags(out: &mut Vec<String>, tags: &TagBuckets) {
    out.push(rule('='));
    out.push("           C O M P R E H E N S I V E   M E T A D A T A   A U D I T".to_string());
    out.push(rule('='));

    let essential = BTreeMap::from([
        (
            "<meta charset>".to_string(),
            or_missing(&tags.essential.charset).to_string(),
        ),
        (
            "<title>".to_string(),
            or_missing(&tags.essential.title).to_string(),
        ),
    ]);
    category(out, "1. ESSENTIAL HTML TAGS (Title, Charset)", &essential);

    out.push("\n--- 2. CORE SEO TAGS ---".to_string());
    out.push(format!(
        "  > {:<35}: {}",
        "Canonical URL",
        or_missing(&tags.core.canonical)
    ));
    out.push(format!(
        "  > {:<35}: {}",
        "Meta Description",
        or_missing(&tags.core.description)
    ));
    out.push(format!(
        "  > {:<35}: {}",
        "Meta Robots",
        or_missing(&tags.core.robots)
    ));
    if let Some(keywords) = &tags.core.keywords {
        out.push(format!("  > {:<35}: {}", "Meta Keywords (Legacy)", keywords));
    }

    out.push("\n--- 3. INTERNATIONALIZATION (Hreflang) ---".to_string());
    out.push(format!(
        "  Hreflang Tags Found ({}):",
        tags.core.hreflang.len()
    ));
    if tags.core.hreflang.is_empty() {
        out.push("    (None Found)".to_string());
    }
    for link in &tags.core.hreflang {
        out.push(format!("    - {:<5}: {}", link.hreflang, link.href));
    }

    category(
        out,
        "4. SOCIAL MEDIA TAGS - OPEN GRAPH (Facebook, LinkedIn)",
        &tags.social.open_graph,
    );
    category(
        out,
        "4. SOCIAL MEDIA TAGS - TWITTER CARD (X)",
        &tags.social.twitter_card,
    );

    category(
        out,
        "5. PWA, MOBILE, AND DEVICE CONFIGURATION - Meta Tags",
        &tags.pwa.meta,
    );
    link_category(
        out,
        "5. PWA, MOBILE, AND DEVICE CONFIGURATION - Link Tags (Manifest, Startup Image)",
        &tags.pwa.links,
    );

    link_category(
        out,
        "6. PERFORMANCE HINTS & HTTP-EQUIVS - Performance Link Hints",
        &tags.technical.performance_hints,
    );
    let http_equivs: BTreeMap<String, &String> = tags
        .technical
        .http_equiv
        .iter()
        .map(|(k, v)| (format!("http-equiv: {}", k), v))
        .collect();
    category(
        out,
        "6. PERFORMANCE HINTS & HTTP-EQUIVS - HTTP-EQUIV Meta Tags",
        &http_equivs,
    );

    let mut other_links: BTreeMap<String, String> = tags
        .links
        .icons
        .iter()
        .map(|(k, icon)| (k.clone(), format!("{} (Sizes: {})", icon.href, icon.sizes)))
        .collect();
    other_links.extend(tags.links.document.clone());
    other_links.extend(tags.links.other.clone());
    link_category(
        out,
        "7. OTHER CRITICAL LINK RELATIONS (Icons, Stylesheet, Next/Prev)",
        &other_links,
    );

    category(out, "8. ALL OTHER/CUSTOM META TAGS", &tags.other_meta);

    out.push("\n--- 9. JSON-LD STRUCTURED DATA ---".to_string());
    if tags.structured_data.is_empty() {
        out.push("❌ No JSON-LD Structured Data Found.".to_string());
    } else {
        out.push(format!(
            "✅ Found {} JSON-LD Script(s).",
            tags.structured_data.len()
        ));
        for item in &tags.structured_data {
            out.push(format!("  {} [Type: {}]", item.script_id(), item.declared_type));
            out.push(format!("    Snippet: {}", item.snippet));
        }
    }
    out.push(rule('='));
}

fn render_score(out: &mut Vec<String>, score: &Score) {
    out.push(format!("\n\n{}", rule('#')));
    out.push("       🌟 O V E R A L L   S E O   S C O R E   &   G R A D E 🌟".to_string());
    out.push(rule('#'));
    out.push(format!("          Current Score: {}%", score.percentage));
    out.push(format!("          Final Grade: **{}**", score.grade));
    out.push(String::new());
    for entry in &score.breakdown {
        out.push(format!(
            "  > {:<25}: {:>4.1} / {}",
            entry.category.label(),
            entry.points,
            entry.weight
        ));
    }
    out.push(rule('#'));
}

fn render_remediation(out: &mut Vec<String>, items: &[RemediationItem]) {
    out.push(format!("\n\n{}", rule('#')));
    out.push("           🛠️  M E T A D A T A   R E M E D I A T I O N   R E P O R T".to_string());
    out.push(rule('#'));

    if items.is_empty() {
        out.push(
            "\n🎉 **Congratulations!** All critical SEO and Social Sharing tags are present."
                .to_string(),
        );
    } else {
        out.push(format!(
            "\n**Action Required! Found {} critical metadata item(s) to add/fix.**\n",
            items.len()
        ));
        for (i, item) in items.iter().enumerate() {
            out.push(format!("--- {}. {} ---", i + 1, item.item));
            out.push(format!("**Reason**: {}", item.why));
            if item.warning {
                out.push(format!("**Action**: {}\n", item.fix));
            } else {
                out.push(
                    "**Action**: Insert the following code into your `<head>` section:"
                        .to_string(),
                );
                out.push(format!("```html\n{}```", item.fix));
                out.push("\n(Remember to replace placeholder URLs/text!)\n".to_string());
            }
        }
    }
    out.push(rule('#'));
}

fn render_quality(out: &mut Vec<String>, quality: &QualityReport) {
    out.push(format!("\n{}", rule('=')));
    out.push("           ✨ C O N T E N T   Q U A L I T Y   A N A L Y S I S ✨".to_string());
    out.push(rule('='));

    out.push(format!(
        "\n--- Title Tag Length ({}) ---",
        quality.title.status.label()
    ));
    out.push(format!(
        "  Length: {} chars. (Goal: max {})",
        quality.title.length, MAX_TITLE_CHARS
    ));
    out.push(format!("  > {}", quality.title.recommendation));

    out.push(format!(
        "\n--- Meta Description Length ({}) ---",
        quality.description.status.label()
    ));
    out.push(format!(
        "  Length: {} chars. (Goal: {} to {})",
        quality.description.length, MIN_DESC_CHARS, MAX_DESC_CHARS
    ));
    out.push(format!("  > {}", quality.description.recommendation));

    out.push("\n--- Image Alt Text Check ---".to_string());
    out.push(format!("  > {}", quality.image_alt.recommendation));

    out.push("\n--- Performance Check (Render Blocking JS) ---".to_string());
    for line in quality.render_blocking.lines() {
        out.push(format!("  > {}", line));
    }

    out.push("\n--- Structured Data (Schema) Validation ---".to_string());
    for verdict in &quality.schema {
        out.push(format!("  > {}", verdict.message()));
    }
    out.push(format!("\n{}", rule('=')));
}
