//! Validated settings

use crate::Catalog;
use crate::schema::{RawCatalogConfig, RawConfig, RawLibraryConfig};
use bookshelf_api::{DEFAULT_MIN_YEAR, Genre};
use bookshelf_util::DEFAULT_LIBRARY_FILE;
use std::path::PathBuf;

/// Number of authors shown in statistics unless configured
pub const DEFAULT_TOP_AUTHORS: usize = 5;

/// Validated settings ready for use by the library and the shell
#[derive(Debug, Clone)]
pub struct Settings {
    pub library: LibrarySettings,
    pub catalog: Catalog,
    pub top_authors: usize,
}

impl Settings {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let top_authors = raw.catalog.top_authors.unwrap_or(DEFAULT_TOP_AUTHORS);

        Self {
            library: LibrarySettings::from_raw(raw.library),
            catalog: catalog_from_raw(raw.catalog),
            top_authors,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            catalog: Catalog::default(),
            top_authors: DEFAULT_TOP_AUTHORS,
        }
    }
}

fn catalog_from_raw(raw: RawCatalogConfig) -> Catalog {
    let defaults = Catalog::default();
    let genres = raw
        .genres
        .map(|g| g.iter().map(|name| Genre::new(name.trim())).collect())
        .unwrap_or_else(|| defaults.genres().to_vec());

    Catalog::new(genres, raw.min_year.unwrap_or(DEFAULT_MIN_YEAR))
}

/// Where the library file lives
#[derive(Debug, Clone)]
pub struct LibrarySettings {
    pub data_dir: PathBuf,
    pub file_name: String,
}

impl LibrarySettings {
    fn from_raw(raw: RawLibraryConfig) -> Self {
        Self {
            data_dir: raw.data_dir.unwrap_or_else(bookshelf_util::default_data_dir),
            file_name: raw
                .file_name
                .unwrap_or_else(|| DEFAULT_LIBRARY_FILE.to_string()),
        }
    }

    /// Full path of the library file
    pub fn library_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self::from_raw(RawLibraryConfig::default())
    }
}
