pub mod walk;
pub mod xml;

pub use walk::{file_url, index_local_files, ACCEPTED_EXTENSIONS, SKIP_DIRS};
pub use xml::render_sitemap_xml;

use crate::models::sitemap::{SitemapEntry, SitemapOptions};
use crate::utils::errors::SitemapError;
use log::info;
use std::path::Path;

pub struct GeneratedSitemap {
    pub entries: Vec<SitemapEntry>,
    pub xml: String,
}

/// Indexes `root` and renders the sitemap; an empty index still renders an empty `urlset`.
pub async fn generate_sitemap(
    root: &Path,
    options: &SitemapOptions,
) -> Result<GeneratedSitemap, SitemapError> {
    let entries = index_local_files(root, options).await?;
    info!(
        "Indexed {} file(s) under {} for {}",
        entries.len(),
        root.display(),
        options.base_url
    );
    let xml = render_sitemap_xml(&entries, options)?;
    Ok(GeneratedSitemap { entries, xml })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sitemap::{ChangeFreq, Priority};
    use std::fs;

    fn options() -> SitemapOptions {
        SitemapOptions::new("https://example.com/", ChangeFreq::Monthly, Priority::default())
            .unwrap()
    }

    #[tokio::test]
    async fn index_and_about_pages() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("about.html"), "<html></html>").unwrap();

        let sitemap = generate_sitemap(dir.path(), &options()).await.unwrap();
        let locs: Vec<&str> = sitemap.entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec!["https://example.com/about.html", "https://example.com/"]
        );
        assert_eq!(sitemap.xml.matches("<url>").count(), 2);
    }

    #[tokio::test]
    async fn skips_dev_directories_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("blog")).unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "").unwrap();
        fs::write(root.join(".git/config.json"), "{}").unwrap();
        fs::write(root.join("blog/index.htm"), "").unwrap();
        fs::write(root.join("blog/post.HTML"), "").unwrap();
        fs::write(root.join("logo.png"), "").unwrap();
        fs::write(root.join("style.css"), "").unwrap();

        let sitemap = generate_sitemap(root, &options()).await.unwrap();
        let locs: Vec<&str> = sitemap.entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://example.com/style.css",
                "https://example.com/blog/",
                "https://example.com/blog/post.HTML"
            ]
        );
        for entry in &sitemap.entries {
            assert_eq!(entry.lastmod.len(), 10);
        }
    }

    #[tokio::test]
    async fn missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_sitemap(&dir.path().join("absent"), &options())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, SitemapError::InvalidRoot(_)));
    }

    #[tokio::test]
    async fn empty_root_yields_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let sitemap = generate_sitemap(dir.path(), &options()).await.unwrap();
        assert!(sitemap.entries.is_empty());
        assert!(!sitemap.xml.contains("<url>"));
    }
}
