//! Record sources - where a catalog's initial songs come from.
//!
//! The service only sees the [`SongSource`] trait. [`CsvSongSource`] reads
//! a headered CSV table; tests use `testing::MockSongSource`.

mod csv_source;
mod types;

pub use csv_source::CsvSongSource;
pub use types::*;

use crate::catalog::Song;

/// Trait for song record sources.
pub trait SongSource {
    /// Load every record, in source order.
    ///
    /// Fails if the source cannot be read or a record lacks one of the
    /// title, artist or release year fields.
    fn load(&self) -> Result<Vec<Song>, SourceError>;
}

impl<S: SongSource + ?Sized> SongSource for &S {
    fn load(&self) -> Result<Vec<Song>, SourceError> {
        (**self).load()
    }
}

impl SongSource for Vec<Song> {
    fn load(&self) -> Result<Vec<Song>, SourceError> {
        Ok(self.clone())
    }
}
