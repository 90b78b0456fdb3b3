//! Source loading utilities
//!
//! An input string is classified as either a URL or a local path, then read
//! through the matching `SourceLoader`. Each read is a single blocking
//! attempt with no retries.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use crate::error::AnalysisError;

/// Where the markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Remote document fetched over HTTP(S)
    Url(Url),
    /// Local file
    Path(PathBuf),
}

impl InputSource {
    /// Classify an input string. Anything that is not a URL is a path.
    pub fn classify(input: &str) -> Self {
        match parse_url(input) {
            Some(url) => InputSource::Url(url),
            None => InputSource::Path(PathBuf::from(input)),
        }
    }
}

fn parse_url(input: &str) -> Option<Url> {
    // The authority must be spelled out; `Url::parse` fills one in for
    // inputs like "http:example.com".
    let (_, rest) = input.split_once(':')?;
    if !rest.starts_with("//") {
        return None;
    }

    let url = Url::parse(input).ok()?;
    let has_host = url.host_str().map_or(false, |host| !host.is_empty());
    if url.scheme().is_empty() || !has_host {
        return None;
    }
    Some(url)
}

/// Check if the input string is a URL with both a scheme and a host.
///
/// Never fails: malformed strings are simply not URLs.
pub fn is_url(input: &str) -> bool {
    parse_url(input).is_some()
}

/// Something that can turn an input string into markup text
pub trait SourceLoader {
    fn fetch(&self, input: &str) -> Result<String, AnalysisError>;
}

/// Fetches documents with a single HTTP GET
///
/// Without a preconfigured client, a default one is built on the first
/// fetch, so constructing the loader never touches the network stack.
#[derive(Default)]
pub struct HttpLoader {
    client: Option<Client>,
}

impl HttpLoader {
    /// Loader using the HTTP client's default settings
    pub fn new() -> Self {
        Self { client: None }
    }

    /// Loader using a preconfigured client
    pub fn with_client(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    fn client(&self, input: &str) -> Result<Client, AnalysisError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => Client::builder()
                .build()
                .map_err(|e| AnalysisError::fetch(input, e)),
        }
    }
}

impl SourceLoader for HttpLoader {
    fn fetch(&self, input: &str) -> Result<String, AnalysisError> {
        let client = self.client(input)?;
        let response = client
            .get(input)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| AnalysisError::fetch(input, e))?;

        debug!("GET {} returned {}", input, response.status());

        response.text().map_err(|e| AnalysisError::fetch(input, e))
    }
}

/// Reads documents from the local filesystem as UTF-8
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLoader;

impl SourceLoader for FileLoader {
    fn fetch(&self, input: &str) -> Result<String, AnalysisError> {
        read_html_file(Path::new(input))
    }
}

/// Read a local file, distinguishing a missing file from other I/O failures.
pub fn read_html_file(file_path: &Path) -> Result<String, AnalysisError> {
    match fs::read_to_string(file_path) {
        Ok(content) => {
            debug!("Read {} bytes from {}", content.len(), file_path.display());
            Ok(content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AnalysisError::FileNotFound {
            path: file_path.to_path_buf(),
        }),
        Err(e) => Err(AnalysisError::Read {
            path: file_path.to_path_buf(),
            source: e,
        }),
    }
}
