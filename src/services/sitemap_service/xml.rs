use crate::models::sitemap::{SitemapEntry, SitemapOptions, SITEMAP_NS};
use crate::utils::errors::SitemapError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

type XmlWriter = Writer<Vec<u8>>;

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<(), SitemapError> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Xml(e.to_string()))
}

fn write_text_element(
    writer: &mut XmlWriter,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

/// Serializes the entries as an indented `urlset` document.
pub fn render_sitemap_xml(
    entries: &[SitemapEntry],
    options: &SitemapOptions,
) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    write(&mut writer, Event::Start(urlset))?;

    let changefreq = options.changefreq.to_string();
    let priority = options.priority.to_string();
    for entry in entries {
        write(&mut writer, Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.loc)?;
        write_text_element(&mut writer, "lastmod", &entry.lastmod)?;
        write_text_element(&mut writer, "changefreq", &changefreq)?;
        write_text_element(&mut writer, "priority", &priority)?;
        write(&mut writer, Event::End(BytesEnd::new("url")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

    let mut xml =
        String::from_utf8(writer.into_inner()).map_err(|e| SitemapError::Xml(e.to_string()))?;
    xml.push('\n');
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sitemap::{ChangeFreq, Priority};

    #[test]
    fn renders_urlset_with_escaped_locations() {
        let options = SitemapOptions::new(
            "https://example.com",
            ChangeFreq::Weekly,
            Priority::new(0.8).unwrap(),
        )
        .unwrap();
        let entries = vec![SitemapEntry {
            loc: "https://example.com/a&b.html".to_string(),
            lastmod: "2024-01-02".to_string(),
        }];
        let xml = render_sitemap_xml(&entries, &options).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
        assert!(xml.contains("<loc>https://example.com/a&amp;b.html</loc>"));
        assert!(xml.contains("<lastmod>2024-01-02</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
