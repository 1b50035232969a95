//! Configuration validation

use crate::schema::{RawCatalogConfig, RawConfig, RawLibraryConfig};
use std::collections::HashSet;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Genre list cannot be empty")]
    NoGenres,

    #[error("Genre #{position} is blank")]
    BlankGenre { position: usize },

    #[error("Duplicate genre: {0}")]
    DuplicateGenre(String),

    #[error("min_year {min_year} is after the current year {current_year}")]
    MinYearInFuture { min_year: i32, current_year: i32 },

    #[error("Invalid library file name '{value}': {message}")]
    InvalidFileName { value: String, message: String },

    #[error("top_authors must be at least 1")]
    ZeroTopAuthors,
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_library(&config.library));
    errors.extend(validate_catalog(&config.catalog));
    errors
}

fn validate_library(library: &RawLibraryConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(name) = &library.file_name {
        if name.trim().is_empty() {
            errors.push(ValidationError::InvalidFileName {
                value: name.clone(),
                message: "cannot be empty".into(),
            });
        } else if name.contains('/') || name.contains('\\') {
            errors.push(ValidationError::InvalidFileName {
                value: name.clone(),
                message: "must be a bare file name; set data_dir for the directory".into(),
            });
        }
    }

    errors
}

fn validate_catalog(catalog: &RawCatalogConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(genres) = &catalog.genres {
        if genres.is_empty() {
            errors.push(ValidationError::NoGenres);
        }

        // Genres are matched case-insensitively, so "Self-Help" and
        // "Self-help" would be the same entry
        let mut seen = HashSet::new();
        for (i, genre) in genres.iter().enumerate() {
            let name = genre.trim();
            if name.is_empty() {
                errors.push(ValidationError::BlankGenre { position: i + 1 });
                continue;
            }
            if !seen.insert(name.to_lowercase()) {
                errors.push(ValidationError::DuplicateGenre(name.to_string()));
            }
        }
    }

    if let Some(min_year) = catalog.min_year {
        let current_year = bookshelf_util::current_year();
        if min_year > current_year {
            errors.push(ValidationError::MinYearInFuture {
                min_year,
                current_year,
            });
        }
    }

    if catalog.top_authors == Some(0) {
        errors.push(ValidationError::ZeroTopAuthors);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_catalog(catalog: RawCatalogConfig) -> RawConfig {
        RawConfig {
            config_version: 1,
            library: Default::default(),
            catalog,
        }
    }

    #[test]
    fn default_config_is_valid() {
        let config = config_with_catalog(Default::default());
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn test_duplicate_genre_detection() {
        let config = config_with_catalog(RawCatalogConfig {
            genres: Some(vec!["Self-Help".into(), "Fiction".into(), "self-help".into()]),
            ..Default::default()
        });

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ValidationError::DuplicateGenre(g) if g == "self-help"));
    }

    #[test]
    fn test_blank_and_empty_genres() {
        let config = config_with_catalog(RawCatalogConfig {
            genres: Some(vec![]),
            ..Default::default()
        });
        assert!(matches!(validate_config(&config).as_slice(), [ValidationError::NoGenres]));

        let config = config_with_catalog(RawCatalogConfig {
            genres: Some(vec!["Fiction".into(), "  ".into()]),
            ..Default::default()
        });
        assert!(matches!(
            validate_config(&config).as_slice(),
            [ValidationError::BlankGenre { position: 2 }]
        ));
    }

    #[test]
    fn test_min_year_in_future() {
        let config = config_with_catalog(RawCatalogConfig {
            min_year: Some(99_999),
            ..Default::default()
        });

        let errors = validate_config(&config);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MinYearInFuture { min_year: 99_999, .. })));
    }

    #[test]
    fn test_zero_top_authors() {
        let config = config_with_catalog(RawCatalogConfig {
            top_authors: Some(0),
            ..Default::default()
        });
        assert!(matches!(validate_config(&config).as_slice(), [ValidationError::ZeroTopAuthors]));
    }

    #[test]
    fn test_file_name_rules() {
        let mut config = config_with_catalog(Default::default());

        config.library.file_name = Some("".into());
        assert_eq!(validate_config(&config).len(), 1);

        config.library.file_name = Some("nested/library.json".into());
        assert!(matches!(
            validate_config(&config).as_slice(),
            [ValidationError::InvalidFileName { .. }]
        ));

        config.library.file_name = Some("books.json".into());
        assert!(validate_config(&config).is_empty());
    }
}
