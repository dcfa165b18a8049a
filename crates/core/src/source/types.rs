//! Types for song record sources.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Header names of the three columns a tabular source must provide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnMapping {
    #[serde(default = "default_title_column")]
    pub title: String,
    #[serde(default = "default_artist_column")]
    pub artist: String,
    #[serde(default = "default_release_year_column")]
    pub release_year: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            title: default_title_column(),
            artist: default_artist_column(),
            release_year: default_release_year_column(),
        }
    }
}

fn default_title_column() -> String {
    "Song Clean".to_string()
}

fn default_artist_column() -> String {
    "ARTIST CLEAN".to_string()
}

fn default_release_year_column() -> String {
    "Release Year".to_string()
}

/// Errors raised while loading records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Song source not found: {0}")]
    NotFound(String),

    #[error("Failed to read song source: {0}")]
    Read(String),

    #[error("Missing column '{0}' in song source header")]
    MissingColumn(String),

    #[error("Row {row} has no value for column '{column}'")]
    MissingField { row: u64, column: String },
}
