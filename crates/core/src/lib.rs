pub mod catalog;
pub mod config;
pub mod pagination;
pub mod query;
pub mod source;
pub mod testing;

pub use catalog::{Catalog, Song};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
};
pub use pagination::{PageCursor, PageError};
pub use query::{QueryError, TunePal};
pub use source::{ColumnMapping, CsvSongSource, SongSource, SourceError};
