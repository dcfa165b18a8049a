//! Types for the song catalog.

use serde::{Deserialize, Serialize};

/// A single song record.
///
/// All fields are kept as text exactly as the record source supplied them.
/// `release_year` is never parsed; comparisons against it are lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Song title.
    pub title: String,
    /// Performing artist.
    pub artist: String,
    /// Release year as text (e.g. "1979", possibly empty).
    pub release_year: String,
}

impl Song {
    /// Create a new song record.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        release_year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            release_year: release_year.into(),
        }
    }

    /// Whether the title or the artist starts with `query` (case-sensitive).
    pub fn matches_prefix(&self, query: &str) -> bool {
        self.title.starts_with(query) || self.artist.starts_with(query)
    }

    /// Whether this song was released in or after `year`, compared as text.
    pub fn released_since(&self, year: &str) -> bool {
        self.release_year.as_str() >= year
    }

    /// Whether this record holds exactly the given triple.
    pub fn is(&self, title: &str, artist: &str, release_year: &str) -> bool {
        self.title == title && self.artist == artist && self.release_year == release_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_prefix_title_or_artist() {
        let song = Song::new("Black Dog", "Led Zeppelin", "1971");
        assert!(song.matches_prefix("Black"));
        assert!(song.matches_prefix("Led"));
        assert!(song.matches_prefix(""));
        assert!(!song.matches_prefix("Dog"));
    }

    #[test]
    fn test_matches_prefix_is_case_sensitive() {
        let song = Song::new("Black Dog", "Led Zeppelin", "1971");
        assert!(!song.matches_prefix("black"));
        assert!(!song.matches_prefix("LED"));
    }

    #[test]
    fn test_released_since_is_lexicographic() {
        let song = Song::new("Layla", "Derek and the Dominos", "1970");
        assert!(song.released_since("1970"));
        assert!(song.released_since("197"));
        assert!(!song.released_since("1971"));
        // Text comparison: "1970" >= "10000" because '9' > '0'.
        assert!(song.released_since("10000"));
    }

    #[test]
    fn test_empty_release_year_sorts_before_any_year() {
        let song = Song::new("Unknown", "Someone", "");
        assert!(!song.released_since("1900"));
        assert!(song.released_since(""));
    }

    #[test]
    fn test_is_requires_all_three_fields() {
        let song = Song::new("Layla", "Derek and the Dominos", "1970");
        assert!(song.is("Layla", "Derek and the Dominos", "1970"));
        assert!(!song.is("Layla", "Eric Clapton", "1970"));
        assert!(!song.is("Layla", "Derek and the Dominos", "1992"));
    }

    #[test]
    fn test_song_serialization() {
        let song = Song::new("Roxanne", "The Police", "1978");
        let json = serde_json::to_string(&song).unwrap();
        let parsed: Song = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, song);
    }
}
