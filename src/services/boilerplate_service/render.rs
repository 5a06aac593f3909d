use crate::models::boilerplate::{BoilerplateSettings, FaqEntry, SchemaShape};
use crate::utils::errors::BoilerplateError;
use chrono::NaiveDate;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use serde::Serialize;
use serde_json::{json, Value};

const NORMALIZE_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/normalize/8.0.1/normalize.min.css";

/// Structured data for the page, shaped as an article or an FAQ page.
pub fn build_json_ld(
    settings: &BoilerplateSettings,
    shape: SchemaShape,
    faq: &[FaqEntry],
    date: NaiveDate,
) -> Result<Value, BoilerplateError> {
    let date = date.format("%Y-%m-%d").to_string();

    match shape {
        SchemaShape::Article => Ok(json!({
            "@context": "https://schema.org",
            "@type": settings.json_ld_type,
            "headline": settings.title,
            "articleBody": settings.description,
            "keywords": settings.keywords,
            "datePublished": date,
            "dateModified": date,
            "url": settings.site_url,
            "image": settings.image_url,
            "author": {
                "@type": "Person",
                "name": settings.author
            },
            "publisher": {
                "@type": "Organization",
                "name": settings.json_ld_name,
                "logo": {
                    "@type": "ImageObject",
                    "url": settings.json_ld_logo
                }
            },
            "mainEntityOfPage": {
                "@type": "WebPage",
                "@id": settings.site_url
            }
        })),
        SchemaShape::Faq => {
            if faq.is_empty() {
                return Err(BoilerplateError::EmptyFaq);
            }
            let questions: Vec<Value> = faq
                .iter()
                .map(|entry| {
                    json!({
                        "@type": "Question",
                        "name": entry.question,
                        "acceptedAnswer": {
                            "@type": "Answer",
                            "text": entry.answer
                        }
                    })
                })
                .collect();
            Ok(json!({
                "@context": "https://schema.org",
                "@type": "FAQPage",
                "mainEntity": questions
            }))
        }
    }
}

/// Pretty JSON with four-space indent, safe to embed in a `<script>` element.
fn script_json(value: &Value) -> Result<String, BoilerplateError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    let json = String::from_utf8_lossy(&buf).into_owned();
    Ok(json.replace("</", "<\\/"))
}

pub fn render_json_ld_block(json_ld: &Value) -> Result<String, BoilerplateError> {
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        script_json(json_ld)?
    ))
}

/// Renders the full HTML document from the form values.
pub fn render_html(
    settings: &BoilerplateSettings,
    shape: SchemaShape,
    faq: &[FaqEntry],
    date: NaiveDate,
) -> Result<String, BoilerplateError> {
    let v = settings.trimmed();
    let json_ld_block = render_json_ld_block(&build_json_ld(&v, shape, faq, date)?)?;
    let gtag_id_js = serde_json::to_string(&v.gtag_id)?.replace("</", "<\\/");

    let title = attr(&v.title);
    let description = attr(&v.description);
    let site_url = attr(&v.site_url);
    let image_url = attr(&v.image_url);
    let handle = attr(&v.twitter_handle);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">

    <!-- Google Tag (gtag.js) -->
    <script async src="https://www.googletagmanager.com/gtag/js?id={gtag_id}"></script>
    <script>
      window.dataLayer = window.dataLayer || [];
      function gtag(){{dataLayer.push(arguments);}}
      gtag('js', new Date());
      gtag('config', {gtag_id_js});
    </script>

    <!-- JSON-LD Structured Data (For Rich Snippets) -->
{json_ld_block}

    <link rel="canonical" href="{site_url}" />
    <link rel="alternate" hreflang="x-default" href="{site_url}" />

    <title>{title_text}</title>

    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <meta name="author" content="{author}">
    <meta name="robots" content="index, follow">

    <link rel="stylesheet" href="{NORMALIZE_CSS}">

    <link rel="icon" href="/favicon.ico" sizes="any">
    <link rel="icon" href="/favicon-32x32.png" type="image/png" sizes="32x32">
    <link rel="icon" href="/favicon-16x16.png" type="image/png" sizes="16x16">
    <link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
    <link rel="manifest" href="/site.webmanifest">

    <!-- Open Graph / Facebook / LinkedIn -->
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:url" content="{site_url}">
    <meta property="og:type" content="{og_type}">
    <meta property="og:image" content="{image_url}">

    <!-- Twitter Card -->
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="{handle}">
    <meta name="twitter:creator" content="{handle}">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{description}">
    <meta name="twitter:image" content="{image_url}">

    <style>
        body {{ font-family: sans-serif; margin: 20px; background-color: #f4f4f9; }}
        h1 {{ color: #333; }}
        code {{ background-color: #eee; padding: 2px 4px; border-radius: 3px; }}
        .header-info {{ border: 1px solid #ccc; padding: 15px; background-color: #fff; margin-bottom: 20px; border-radius: 8px; }}
    </style>
</head>
<body>
    <div class="header-info">
        <h1>{title_text}</h1>
        <p><strong>Description:</strong> {description_text}</p>
        <p>This is your generated SEO-optimized HTML boilerplate page. All necessary meta tags, JSON-LD, and Google Analytics code are included in the <code>&lt;head&gt;</code> section.</p>
        <p>Start adding your main content here!</p>
    </div>

    <!-- START MAIN PAGE CONTENT HERE -->


    <!-- END MAIN PAGE CONTENT HERE -->
</body>
</html>
"#,
        gtag_id = attr(&v.gtag_id),
        title_text = text(&v.title),
        description_text = text(&v.description),
        keywords = attr(&v.keywords),
        author = attr(&v.author),
        og_type = attr(&v.og_type),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn article_json_ld_uses_settings() {
        let settings = BoilerplateSettings::default();
        let value = build_json_ld(&settings, SchemaShape::Article, &[], date()).unwrap();
        assert_eq!(value["@type"], "TechArticle");
        assert_eq!(value["headline"], settings.title.as_str());
        assert_eq!(value["datePublished"], "2024-03-09");
        assert_eq!(value["image"], settings.image_url.as_str());
        assert_eq!(value["publisher"]["logo"]["url"], settings.json_ld_logo.as_str());
        assert_eq!(value["mainEntityOfPage"]["@id"], settings.site_url.as_str());
    }

    #[test]
    fn faq_requires_entries() {
        let settings = BoilerplateSettings::default();
        assert!(matches!(
            build_json_ld(&settings, SchemaShape::Faq, &[], date()),
            Err(BoilerplateError::EmptyFaq)
        ));

        let faq = vec![FaqEntry {
            question: "Why?".to_string(),
            answer: "Because.".to_string(),
        }];
        let value = build_json_ld(&settings, SchemaShape::Faq, &faq, date()).unwrap();
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"][0]["name"], "Why?");
        assert_eq!(value["mainEntity"][0]["acceptedAnswer"]["text"], "Because.");
    }

    #[test]
    fn values_are_escaped() {
        let settings = BoilerplateSettings {
            title: "Tom & Jerry \"quoted\" <b>".to_string(),
            description: "</script><script>alert(1)</script>".to_string(),
            ..BoilerplateSettings::default()
        };
        let html = render_html(&settings, SchemaShape::Article, &[], date()).unwrap();
        assert!(html.contains("<title>Tom &amp; Jerry \"quoted\" &lt;b&gt;</title>"));
        assert!(html.contains("content=\"Tom &amp; Jerry &quot;quoted&quot; &lt;b&gt;\""));
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn head_carries_expected_tags() {
        let html = render_html(
            &BoilerplateSettings::default(),
            SchemaShape::Article,
            &[],
            date(),
        )
        .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<meta name=\"robots\" content=\"index, follow\">"));
        assert!(html.contains("hreflang=\"x-default\""));
        assert!(html.contains("gtag('config', \"G-XXXXXXXXXX\");"));
        assert_eq!(html.matches("<meta property=\"og:").count(), 5);
        assert_eq!(html.matches("<meta name=\"twitter:").count(), 6);
    }
}
