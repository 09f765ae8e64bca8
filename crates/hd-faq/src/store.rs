//! FAQ data source. Load failures degrade to an empty list.

use crate::matcher::match_query;
use crate::types::FaqEntry;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Failed to read FAQ file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse FAQ file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug)]
enum FaqSource {
    File {
        path: PathBuf,
        cache: Option<OnceLock<Vec<FaqEntry>>>,
    },
    Inline(Vec<FaqEntry>),
}

/// Where FAQ entries come from.
#[derive(Debug)]
pub struct FaqStore {
    source: FaqSource,
}

impl FaqStore {
    /// Re-read `path` on every lookup.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FaqSource::File { path: path.into(), cache: None },
        }
    }

    /// Read `path` until it parses once, then keep that list.
    pub fn cached(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FaqSource::File {
                path: path.into(),
                cache: Some(OnceLock::new()),
            },
        }
    }

    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { source: FaqSource::Inline(entries) }
    }

    /// Parse a JSON array of `{question, answer}` records.
    pub fn read_file(path: &Path) -> Result<Vec<FaqEntry>, FaqError> {
        let raw = std::fs::read_to_string(path).map_err(|source| FaqError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FaqError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Current entries; empty when the source cannot be read.
    pub fn load_entries(&self) -> Vec<FaqEntry> {
        match &self.source {
            FaqSource::Inline(entries) => entries.clone(),
            FaqSource::File { path, cache } => {
                if let Some(entries) = cache.as_ref().and_then(|c| c.get()) {
                    return entries.clone();
                }
                match Self::read_file(path) {
                    Ok(entries) => {
                        debug!(path = %path.display(), count = entries.len(), "loaded FAQ entries");
                        if let Some(cache) = cache {
                            let _ = cache.set(entries.clone());
                        }
                        entries
                    }
                    Err(e) => {
                        warn!(error = %e, "FAQ data unavailable");
                        Vec::new()
                    }
                }
            }
        }
    }

    /// Load the entries and answer `query` against them.
    pub fn lookup(&self, query: &str) -> String {
        match_query(query, &self.load_entries())
    }
}
