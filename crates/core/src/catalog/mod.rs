//! Song catalog - the full, unfiltered, in-memory record store.
//!
//! Each service owns its own catalog. Records keep insertion order and
//! duplicates are only rejected when going through [`Catalog::add`].

mod types;

pub use types::*;

use tracing::debug;

/// Ordered collection of songs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song unless an identical (title, artist, release_year) record exists.
    ///
    /// The duplicate probe runs over the title-prefix matches, which always
    /// include an exact title match. Returns `true` when the song was appended.
    pub fn add(&mut self, title: &str, artist: &str, release_year: &str) -> bool {
        let duplicate = self
            .search_matches(title)
            .any(|song| song.is(title, artist, release_year));
        if duplicate {
            debug!(title, artist, release_year, "Skipping duplicate song");
            return false;
        }

        self.songs.push(Song::new(title, artist, release_year));
        true
    }

    /// All songs whose title or artist starts with `query`, in catalog order.
    pub fn search_matches<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |song| song.matches_prefix(query))
    }

    /// All songs with `release_year >= year` (text comparison), in catalog order.
    pub fn released_since<'a>(&'a self, year: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |song| song.released_since(year))
    }

    /// Full scan in insertion order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl From<Vec<Song>> for Catalog {
    fn from(songs: Vec<Song>) -> Self {
        Self { songs }
    }
}

impl FromIterator<Song> for Catalog {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        Self {
            songs: iter.into_iter().collect(),
        }
    }
}
