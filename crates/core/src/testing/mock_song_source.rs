//! Mock song source for testing.

use std::sync::{Arc, RwLock};

use crate::catalog::Song;
use crate::source::{SongSource, SourceError};

/// Mock implementation of the SongSource trait.
///
/// Provides controllable behavior for testing:
/// - Return a configurable record list
/// - Count loads for assertions
/// - Simulate read failures
#[derive(Debug, Clone, Default)]
pub struct MockSongSource {
    songs: Arc<RwLock<Vec<Song>>>,
    loads: Arc<RwLock<usize>>,
    /// If set, the next load fails with this message.
    next_error: Arc<RwLock<Option<String>>>,
}

impl MockSongSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock source that yields `songs`.
    pub fn with_songs(songs: Vec<Song>) -> Self {
        let source = Self::new();
        source.set_songs(songs);
        source
    }

    pub fn set_songs(&self, songs: Vec<Song>) {
        *self.songs.write().unwrap() = songs;
    }

    /// Make the next `load` fail with a read error.
    pub fn fail_next_load(&self, message: &str) {
        *self.next_error.write().unwrap() = Some(message.to_string());
    }

    /// How many times `load` has been called.
    pub fn load_count(&self) -> usize {
        *self.loads.read().unwrap()
    }
}

impl SongSource for MockSongSource {
    fn load(&self) -> Result<Vec<Song>, SourceError> {
        *self.loads.write().unwrap() += 1;
        if let Some(message) = self.next_error.write().unwrap().take() {
            return Err(SourceError::Read(message));
        }
        Ok(self.songs.read().unwrap().clone())
    }
}
