//! CSV-backed song source.

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use super::{ColumnMapping, SongSource, SourceError};
use crate::catalog::Song;

enum Input {
    File(PathBuf),
    Text(String),
}

/// Song source reading a headered CSV table.
///
/// Field values are taken verbatim: no trimming, no numeric parsing, empty
/// values allowed. Columns other than the mapped three are ignored.
pub struct CsvSongSource {
    input: Input,
    columns: ColumnMapping,
}

impl CsvSongSource {
    /// Read from a CSV file on disk. The file is opened on [`SongSource::load`].
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            input: Input::File(path.as_ref().to_path_buf()),
            columns: ColumnMapping::default(),
        }
    }

    /// Read from an in-memory table, consuming `reader` right away.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, SourceError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| SourceError::Read(e.to_string()))?;
        Ok(Self {
            input: Input::Text(text),
            columns: ColumnMapping::default(),
        })
    }

    /// Use custom header names instead of the defaults.
    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }

    fn read_all<R: Read>(&self, reader: R) -> Result<Vec<Song>, SourceError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| SourceError::Read(e.to_string()))?
            .clone();
        let title = column_index(&headers, &self.columns.title)?;
        let artist = column_index(&headers, &self.columns.artist)?;
        let release_year = column_index(&headers, &self.columns.release_year)?;

        let mut songs = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| SourceError::Read(e.to_string()))?;
            let row = record.position().map(|p| p.line()).unwrap_or_default();
            let field = |index: usize, column: &str| {
                record
                    .get(index)
                    .map(str::to_string)
                    .ok_or_else(|| SourceError::MissingField {
                        row,
                        column: column.to_string(),
                    })
            };

            songs.push(Song {
                title: field(title, &self.columns.title)?,
                artist: field(artist, &self.columns.artist)?,
                release_year: field(release_year, &self.columns.release_year)?,
            });
        }

        Ok(songs)
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize, SourceError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| SourceError::MissingColumn(name.to_string()))
}

impl SongSource for CsvSongSource {
    fn load(&self) -> Result<Vec<Song>, SourceError> {
        let songs = match &self.input {
            Input::File(path) => {
                if !path.exists() {
                    return Err(SourceError::NotFound(path.display().to_string()));
                }
                debug!("Reading songs from {:?}", path);
                let file =
                    std::fs::File::open(path).map_err(|e| SourceError::Read(e.to_string()))?;
                self.read_all(file)?
            }
            Input::Text(text) => self.read_all(text.as_bytes())?,
        };

        info!("Loaded {} songs", songs.len());
        Ok(songs)
    }
}
