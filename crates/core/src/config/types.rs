use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::source::ColumnMapping;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Song catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// CSV file holding the initial songs
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
    /// Songs per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Header names for title, artist and release year
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
            page_size: default_page_size(),
            columns: ColumnMapping::default(),
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("songlist.csv")
}

fn default_page_size() -> usize {
    10
}
