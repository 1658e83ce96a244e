//! Command implementations.

pub mod inspect;
pub mod serve;

use tabscan::{Loader, LoaderConfig, Table};

/// Load a table with the given temporal column name.
pub fn load_table(
    file: &std::path::Path,
    date_column: String,
) -> Result<Table, Box<dyn std::error::Error>> {
    let loader = Loader::with_config(LoaderConfig {
        temporal_column: Some(date_column),
        ..LoaderConfig::default()
    });
    Ok(loader.load(file)?)
}
