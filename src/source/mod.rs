// src/source/mod.rs
// =============================================================================
// This module provides the HTML document to check.
//
// Two sources are supported:
// - A local file (--file)
// - A remote page (--url), downloaded to a temporary file first
//
// Either way the caller gets back a Document: the parsed HTML plus, in remote
// mode, the temp file guard that deletes the download when dropped.
//
// Rust concepts:
// - Enums: DocumentSource is "a file OR a URL", never both
// - Ownership: Document owns the temp file, so its lifetime bounds the file's
// =============================================================================

mod local;
mod remote;

use std::path::{Path, PathBuf};
use std::time::Duration;

use scraper::Html;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::Result;

pub use local::read_document;
pub use remote::{
    create_temp_html, fetch_to_temp, temp_file_name, Fetcher, TEMP_FILE_PREFIX, TEMP_INDEX_MAX,
};

/// Where the HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Read the page from this path
    LocalFile(PathBuf),
    /// Fetch the page from this URL
    Remote(String),
}

/// Settings that only matter in remote mode
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Request timeout, none by default
    pub timeout: Option<Duration>,
    /// Directory the tempIndex<n>.html file is created in
    pub temp_dir: PathBuf,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: None,
            temp_dir: PathBuf::from("."),
        }
    }
}

/// A parsed page, ready for checking
pub struct Document {
    html: Html,
    path: PathBuf,
    // Held only for its Drop: removes the downloaded file
    _temp: Option<NamedTempFile>,
}

impl Document {
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The file the document was read from (the temp file in remote mode)
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// Produces the document for `source`
//
// Local mode reads and parses the file. Remote mode fetches the URL, writes the
// body to a temp file and then reads that file exactly like local mode.
pub async fn load_document(source: &DocumentSource, options: &FetchOptions) -> Result<Document> {
    match source {
        DocumentSource::LocalFile(path) => {
            let html = parse_file(path)?;
            Ok(Document {
                html,
                path: path.clone(),
                _temp: None,
            })
        }
        DocumentSource::Remote(url) => {
            let fetcher = Fetcher::new(options.timeout)?;
            let temp = fetch_to_temp(&fetcher, url, &options.temp_dir).await?;

            // If parsing fails `temp` is dropped here and the file goes with it
            let html = parse_file(temp.path())?;
            Ok(Document {
                html,
                path: temp.path().to_path_buf(),
                _temp: Some(temp),
            })
        }
    }
}

fn parse_file(path: &Path) -> Result<Html> {
    let text = read_document(path)?;
    debug!("parsing {} byte(s) from {}", text.len(), path.display());
    Ok(Html::parse_document(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::check_presence;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_local_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<h1>Local</h1>").unwrap();

        let source = DocumentSource::LocalFile(path.clone());
        let document = load_document(&source, &FetchOptions::default()).await.unwrap();

        assert_eq!(document.path(), path.as_path());
        let result = check_presence(document.html(), &["h1".to_string()]).unwrap();
        assert_eq!(result.get("h1"), Some(&true));
    }

    #[tokio::test]
    async fn test_remote_document_removes_temp_file_on_drop() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body("<div class='hero'></div>");
            })
            .await;

        let dir = TempDir::new().unwrap();
        let options = FetchOptions {
            timeout: None,
            temp_dir: dir.path().to_path_buf(),
        };
        let source = DocumentSource::Remote(server.url("/"));
        let document = load_document(&source, &options).await.unwrap();

        let temp_path = document.path().to_path_buf();
        assert!(temp_path.exists());
        let name = temp_path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with(TEMP_FILE_PREFIX) && name.ends_with(".html"));

        let result = check_presence(document.html(), &["div.hero".to_string()]).unwrap();
        assert_eq!(result.get("div.hero"), Some(&true));

        drop(document);
        assert!(!temp_path.exists());
    }
}
