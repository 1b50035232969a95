//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Where the library lives
    #[serde(default)]
    pub library: RawLibraryConfig,

    /// What a valid book looks like
    #[serde(default)]
    pub catalog: RawCatalogConfig,
}

/// Library file location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawLibraryConfig {
    /// Data directory holding the library file
    pub data_dir: Option<PathBuf>,

    /// Library file name within the data directory
    pub file_name: Option<String>,
}

/// Catalog settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawCatalogConfig {
    /// Allowed genres, in display order
    pub genres: Option<Vec<String>>,

    /// Earliest accepted publication year
    pub min_year: Option<i32>,

    /// How many authors the statistics view lists
    pub top_authors: Option<usize>,
}
