//! Query service - paged views over a song catalog.
//!
//! [`TunePal`] owns one [`Catalog`] and one [`PageCursor`]. The full listing,
//! prefix search and release-year filter are all windowed by that same
//! cursor, so switching between query kinds keeps the current page index.
//! An instance is meant for a single caller; it does no locking.

mod types;

pub use types::*;

use tracing::{debug, info};

use crate::catalog::{Catalog, Song};
use crate::config::CatalogConfig;
use crate::pagination::PageCursor;
use crate::source::{CsvSongSource, SongSource};

/// Paginated song catalog accessor.
#[derive(Debug, Clone)]
pub struct TunePal {
    catalog: Catalog,
    cursor: PageCursor,
}

impl TunePal {
    /// Build a service from a record source, with the cursor on page 0.
    ///
    /// A zero page size is raised to 1.
    pub fn new<S: SongSource>(page_size: usize, source: S) -> Result<Self, QueryError> {
        let catalog = Catalog::from(source.load()?);
        info!(
            "Song catalog ready: {} songs, page size {}",
            catalog.len(),
            page_size.max(1)
        );
        Ok(Self::with_catalog(page_size, catalog))
    }

    /// Build a service over an existing catalog.
    pub fn with_catalog(page_size: usize, catalog: Catalog) -> Self {
        Self {
            catalog,
            cursor: PageCursor::new(page_size),
        }
    }

    /// Build a service reading the CSV file named in `config`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, QueryError> {
        let source = CsvSongSource::new(&config.path).with_columns(config.columns.clone());
        Self::new(config.page_size, source)
    }

    /// Add a song unless the exact (title, artist, release_year) record exists.
    pub fn add_song(&mut self, title: &str, artist: &str, release_year: &str) {
        if self.catalog.add(title, artist, release_year) {
            debug!("Added song {:?} by {:?}", title, artist);
        }
    }

    /// Current page of the full catalog.
    pub fn get_songs(&self) -> Result<Vec<Song>, QueryError> {
        Ok(self.cursor.window(self.catalog.songs())?.to_vec())
    }

    /// Current page of songs whose title or artist starts with `query`.
    ///
    /// No matches yields an empty page on page 0 and `OutOfRange` elsewhere.
    pub fn search(&self, query: &str) -> Result<Vec<Song>, QueryError> {
        let hits: Vec<&Song> = self.catalog.search_matches(query).collect();
        self.page_of(&hits)
    }

    /// Current page of songs with `release_year >= year`, compared as text.
    ///
    /// Fails with `NoSongsFound` when nothing qualifies, before any windowing.
    pub fn get_songs_since(&self, year: &str) -> Result<Vec<Song>, QueryError> {
        let hits: Vec<&Song> = self.catalog.released_since(year).collect();
        if hits.is_empty() {
            return Err(QueryError::NoSongsFound {
                since: year.to_string(),
            });
        }
        self.page_of(&hits)
    }

    fn page_of(&self, hits: &[&Song]) -> Result<Vec<Song>, QueryError> {
        let window = self.cursor.window(hits)?;
        Ok(window.iter().map(|song| (*song).clone()).collect())
    }

    pub fn next_page(&mut self) {
        self.cursor.next_page();
        debug!("Moved to page {}", self.cursor.page_index());
    }

    pub fn previous_page(&mut self) {
        self.cursor.previous_page();
        debug!("Moved to page {}", self.cursor.page_index());
    }

    /// Set the page size; values below 1 are clamped to 1.
    pub fn set_page_size(&mut self, page_size: i64) {
        self.cursor.set_page_size(page_size);
    }

    /// Jump to `page_index` without any bounds check.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.cursor.set_page_index(page_index);
    }

    pub fn current_page_index(&self) -> usize {
        self.cursor.page_index()
    }

    pub fn page_size(&self) -> usize {
        self.cursor.page_size()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
