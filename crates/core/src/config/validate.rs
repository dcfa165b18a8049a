use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Catalog page size is not 0
/// - Column names are not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let catalog = &config.catalog;

    if catalog.page_size == 0 {
        return Err(ConfigError::ValidationError(
            "catalog.page_size cannot be 0".to_string(),
        ));
    }

    let columns = [
        ("title", &catalog.columns.title),
        ("artist", &catalog.columns.artist),
        ("release_year", &catalog.columns.release_year),
    ];
    for (key, name) in columns {
        if name.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "catalog.columns.{} cannot be empty",
                key
            )));
        }
    }

    Ok(())
}
