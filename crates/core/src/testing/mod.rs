//! Testing utilities and mock implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use tunepal_core::testing::{fixtures, MockSongSource};
//! use tunepal_core::TunePal;
//!
//! let source = MockSongSource::with_songs(fixtures::classic_rock());
//! let pal = TunePal::new(10, &source)?;
//! assert_eq!(source.load_count(), 1);
//! ```

mod mock_song_source;

pub use mock_song_source::MockSongSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Song;

    /// `n` distinct songs titled "Song 0".."Song n-1", years cycling 1960..1999.
    pub fn numbered_songs(n: usize) -> Vec<Song> {
        (0..n)
            .map(|i| {
                Song::new(
                    format!("Song {}", i),
                    format!("Artist {}", i % 7),
                    (1960 + i % 40).to_string(),
                )
            })
            .collect()
    }

    /// A small hand-picked classic rock catalog.
    pub fn classic_rock() -> Vec<Song> {
        [
            ("Black Dog", "Led Zeppelin", "1971"),
            ("Back in Black", "AC/DC", "1980"),
            ("Paint It Black", "The Rolling Stones", "1966"),
            ("Blackbird", "The Beatles", "1968"),
            ("Iron Man", "Black Sabbath", "1970"),
            ("Paranoid", "Black Sabbath", "1970"),
            ("Black Magic Woman", "Santana", "1970"),
            ("Roxanne", "The Police", "1978"),
            ("Hotel California", "Eagles", "1976"),
            ("Baba O'Riley", "The Who", "1971"),
            ("More Than a Feeling", "Boston", "1976"),
            ("Don't Stop Believin'", "Journey", "1981"),
            ("Layla", "Derek and the Dominos", "1970"),
            ("Tom Sawyer", "Rush", "1981"),
            ("Fantasy Girl", ".38 Special", ""),
        ]
        .into_iter()
        .map(|(title, artist, year)| Song::new(title, artist, year))
        .collect()
    }
}
