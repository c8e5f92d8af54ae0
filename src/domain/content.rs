use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUNDLED_INDEX: &str = include_str!("../../data/contents.json");

/// Characters in a page slug that read as word breaks when searching.
const SLUG_SEPARATORS: [char; 3] = ['-', '_', '/'];

/// Searchable metadata for one page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub page: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl ContentRecord {
    /// The title, if the record has a non-empty one. Untitled records never show up in search.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The page slug with separators turned into spaces, so `climate-risks` matches "climate risks".
    #[must_use]
    pub fn spaced_page(&self) -> String {
        self.page.replace(SLUG_SEPARATORS, " ")
    }

    /// Absolute URL of the page on the site rooted at `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.page.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed content index: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content record #{0} has an empty page slug")]
    EmptyPage(usize),
    #[error("duplicate page slug in content index: {0}")]
    DuplicatePage(String),
}

/// The static set of records the palette searches. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentIndex {
    records: Vec<ContentRecord>,
}

impl ContentIndex {
    pub fn new(records: Vec<ContentRecord>) -> Result<Self, ContentError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if record.page.trim().is_empty() {
                return Err(ContentError::EmptyPage(i));
            }
            if !seen.insert(record.page.as_str()) {
                return Err(ContentError::DuplicatePage(record.page.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The index compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_INDEX)
    }

    /// Loads the index at `path`, or the bundled one when no path is configured.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&json)
            }
            None => Self::bundled(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
