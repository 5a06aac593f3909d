use crate::models::sitemap::{SitemapEntry, SitemapOptions};
use crate::utils::errors::SitemapError;
use chrono::{DateTime, Local};
use futures::StreamExt;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use tokio_stream::wrappers::ReadDirStream;

pub const SKIP_DIRS: [&str; 7] = [
    ".git",
    "node_modules",
    "__pycache__",
    "venv",
    "tmp",
    "temp",
    "logs",
];

pub const ACCEPTED_EXTENSIONS: [&str; 9] = [
    "html", "htm", "php", "asp", "aspx", "js", "css", "xml", "json",
];

const INDEX_FILES: [&str; 3] = ["index.html", "index.htm", "index.php"];

fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn url_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Maps a file below the root to its public URL; index files map to their directory.
pub fn file_url(relative: &Path, base_url: &str) -> String {
    let is_index = relative
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| INDEX_FILES.contains(&n.to_lowercase().as_str()));

    if is_index {
        match relative.parent().map(url_path).filter(|p| !p.is_empty()) {
            Some(dir) => format!("{}{}/", base_url, dir),
            None => base_url.to_string(),
        }
    } else {
        format!("{}{}", base_url, url_path(relative))
    }
}

async fn lastmod(path: &Path) -> String {
    let modified = tokio::fs::metadata(path)
        .await
        .and_then(|meta| meta.modified());
    match modified {
        Ok(time) => DateTime::<Local>::from(time).format("%Y-%m-%d").to_string(),
        Err(e) => {
            warn!("No modification time for {}: {}", path.display(), e);
            Local::now().format("%Y-%m-%d").to_string()
        }
    }
}

async fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, SitemapError> {
    let mut stream = ReadDirStream::new(tokio::fs::read_dir(dir).await?);
    let mut paths = Vec::new();
    while let Some(entry) = stream.next().await {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

/// Walks the root depth-first (files before subdirectories, names sorted)
/// and collects one entry per accepted file.
pub async fn index_local_files(
    root: &Path,
    options: &SitemapOptions,
) -> Result<Vec<SitemapEntry>, SitemapError> {
    if !tokio::fs::metadata(root)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        return Err(SitemapError::InvalidRoot(root.to_path_buf()));
    }

    let mut entries = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut subdirs = Vec::new();

        for path in sorted_entries(&dir).await? {
            let file_type = match tokio::fs::symlink_metadata(&path).await {
                Ok(meta) => meta.file_type(),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                let skipped = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| SKIP_DIRS.contains(&n));
                if skipped {
                    debug!("Skipping directory {}", path.display());
                } else {
                    subdirs.push(path);
                }
                continue;
            }

            if !is_accepted(&path)
                || !tokio::fs::metadata(&path)
                    .await
                    .is_ok_and(|m| m.is_file())
            {
                continue;
            }

            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            entries.push(SitemapEntry {
                loc: file_url(relative, &options.base_url),
                lastmod: lastmod(&path).await,
            });
        }

        pending.extend(subdirs.into_iter().rev());
    }

    Ok(entries)
}
