// src/source/remote.rs
// =============================================================================
// This module downloads a page and stores it in a temporary file.
//
// Strategy:
// - One plain GET request, no retries
// - Anything other than a 2xx response is an error
// - The body is written byte for byte to tempIndex<n>.html, n in 1..=10000
//
// The temp file is a tempfile::NamedTempFile, so it is deleted as soon as
// the value is dropped, whether the check succeeded or failed.
//
// Rust concepts:
// - async functions: For network I/O
// - Drop: NamedTempFile removes the file from disk in its destructor
// =============================================================================

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use rand::Rng;
use reqwest::Client;
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::error::{GraderError, Result};

/// Prefix of the temporary file the page is written to
pub const TEMP_FILE_PREFIX: &str = "tempIndex";

/// Upper bound (inclusive) of the number in the temporary file name
pub const TEMP_INDEX_MAX: u32 = 10_000;

// How many names we try before giving up when tempIndex<n>.html is taken
const MAX_NAME_ATTEMPTS: usize = 16;

// Thin wrapper around a reqwest client
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Builds the HTTP client
    //
    // No timeout unless the caller asks for one; we rely on the transport's
    // defaults otherwise.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Fetcher {
            client: builder.build()?,
        })
    }

    // Fetches `url` and returns the raw response body
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GraderError::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response.bytes().await.map_err(|e| fetch_error(url, e))?;
        debug!("received {} byte(s) from {}", body.len(), url);

        Ok(body.to_vec())
    }
}

// Downloads `url` into a fresh tempIndex<n>.html inside `dir`
//
// Returns the open temp file; the caller keeps it alive for as long as the
// path is needed.
pub async fn fetch_to_temp(fetcher: &Fetcher, url: &str, dir: &Path) -> Result<NamedTempFile> {
    let body = fetcher.fetch(url).await?;

    let mut temp = create_temp_html(dir)?;
    info!("Writing url text to {}", temp.path().display());

    temp.write_all(&body)?;
    temp.flush()?;

    Ok(temp)
}

// Creates an empty tempIndex<n>.html in `dir`
//
// A name that already exists is never overwritten; we pick another number.
pub fn create_temp_html(dir: &Path) -> Result<NamedTempFile> {
    let mut rng = rand::thread_rng();

    for _ in 0..MAX_NAME_ATTEMPTS {
        let name = temp_file_name(rng.gen_range(1..=TEMP_INDEX_MAX));

        match Builder::new().prefix(&name).rand_bytes(0).tempfile_in(dir) {
            Ok(file) => return Ok(file),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{} already exists, picking another name", name);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(GraderError::Io(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free {}<n>.html name in {}", TEMP_FILE_PREFIX, dir.display()),
    )))
}

// Builds the file name for a given index, e.g. 42 -> "tempIndex42.html"
pub fn temp_file_name(index: u32) -> String {
    format!("{}{}.html", TEMP_FILE_PREFIX, index)
}

// Turns a reqwest error into a Fetch error with a readable message
//
// Timeouts, redirect loops and connection failures get a short explanation,
// anything else keeps reqwest's own message.
fn fetch_error(url: &str, error: reqwest::Error) -> GraderError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    GraderError::Fetch {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn index_of(path: &Path) -> u32 {
        let name = path.file_name().unwrap().to_str().unwrap();
        name.strip_prefix(TEMP_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(".html"))
            .unwrap()
            .parse()
            .unwrap()
    }

    #[test]
    fn test_temp_file_name() {
        assert_eq!(temp_file_name(1), "tempIndex1.html");
        assert_eq!(temp_file_name(10000), "tempIndex10000.html");
    }

    #[test]
    fn test_create_temp_html_name_and_cleanup() {
        let dir = TempDir::new().unwrap();

        let temp = create_temp_html(dir.path()).unwrap();
        let path = temp.path().to_path_buf();
        let index = index_of(&path);

        assert!((1..=TEMP_INDEX_MAX).contains(&index));
        assert_eq!(path.parent(), Some(dir.path()));
        assert!(path.exists());

        drop(temp);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_fetch_to_temp_writes_body_verbatim() {
        let server = MockServer::start_async().await;
        let page = "<html><body><h1>Remote</h1></body></html>";
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/page");
                then.status(200).header("Content-Type", "text/html").body(page);
            })
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = Fetcher::new(None).unwrap();
        let temp = fetch_to_temp(&fetcher, &server.url("/page"), dir.path())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(std::fs::read_to_string(temp.path()).unwrap(), page);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404);
            })
            .await;

        let dir = TempDir::new().unwrap();
        let fetcher = Fetcher::new(None).unwrap();
        let err = fetch_to_temp(&fetcher, &server.url("/missing"), dir.path())
            .await
            .unwrap_err();

        match err {
            GraderError::Fetch { message, .. } => assert!(message.contains("404")),
            other => panic!("unexpected error: {other}"),
        }

        // Nothing is written when the request fails
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Port 9 (discard) is almost never listening on localhost
        let fetcher = Fetcher::new(Some(Duration::from_secs(5))).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, GraderError::Fetch { .. }));
    }
}
