//! The catalog: which genres exist and which publication years are plausible

use bookshelf_api::{DEFAULT_GENRES, DEFAULT_MIN_YEAR, Genre, NewBook};
use thiserror::Error;

/// Why a new book was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("publication year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("unknown genre '{0}'")]
    UnknownGenre(String),
}

/// Validated genre set and year bounds
#[derive(Debug, Clone)]
pub struct Catalog {
    genres: Vec<Genre>,
    min_year: i32,
}

impl Catalog {
    /// Build a catalog from already-validated parts
    pub fn new(genres: Vec<Genre>, min_year: i32) -> Self {
        Self { genres, min_year }
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Look up a genre ignoring case, returning its canonical spelling
    pub fn canonical_genre(&self, name: &str) -> Option<&Genre> {
        let name = name.trim().to_lowercase();
        self.genres
            .iter()
            .find(|g| g.as_str().to_lowercase() == name)
    }

    /// Validate a new book against the current calendar year.
    ///
    /// On success returns the book with title and author trimmed and the
    /// genre in its canonical spelling.
    pub fn check(&self, book: &NewBook) -> Result<NewBook, Vec<BookValidationError>> {
        self.check_at(book, bookshelf_util::current_year())
    }

    /// Validate a new book with an explicit upper year bound
    pub fn check_at(
        &self,
        book: &NewBook,
        current_year: i32,
    ) -> Result<NewBook, Vec<BookValidationError>> {
        let mut errors = Vec::new();

        let title = book.title.trim();
        if title.is_empty() {
            errors.push(BookValidationError::EmptyTitle);
        }

        let author = book.author.trim();
        if author.is_empty() {
            errors.push(BookValidationError::EmptyAuthor);
        }

        if !(self.min_year..=current_year).contains(&book.publication_year) {
            errors.push(BookValidationError::YearOutOfRange {
                year: book.publication_year,
                min: self.min_year,
                max: current_year,
            });
        }

        let genre = self.canonical_genre(&book.genre);
        if genre.is_none() {
            errors.push(BookValidationError::UnknownGenre(book.genre.clone()));
        }

        match genre {
            Some(genre) if errors.is_empty() => Ok(NewBook {
                title: title.to_string(),
                author: author.to_string(),
                publication_year: book.publication_year,
                genre: genre.as_str().to_string(),
                read_status: book.read_status,
            }),
            _ => Err(errors),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            genres: DEFAULT_GENRES.iter().map(|g| Genre::from(*g)).collect(),
            min_year: DEFAULT_MIN_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str, year: i32, genre: &str) -> NewBook {
        NewBook::new(title, author, year, genre, false)
    }

    #[test]
    fn accepts_valid_book_and_normalizes() {
        let catalog = Catalog::default();
        let checked = catalog
            .check_at(&book("  Dune ", " Frank Herbert", 1965, "self-help"), 2025)
            .unwrap();

        assert_eq!(checked.title, "Dune");
        assert_eq!(checked.author, "Frank Herbert");
        assert_eq!(checked.genre, "Self-Help");
    }

    #[test]
    fn rejects_empty_fields() {
        let catalog = Catalog::default();
        let errors = catalog.check_at(&book(" ", "", 2000, "Fiction"), 2025).unwrap_err();

        assert_eq!(
            errors,
            vec![BookValidationError::EmptyTitle, BookValidationError::EmptyAuthor]
        );
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let catalog = Catalog::default();

        assert!(catalog.check_at(&book("A", "B", 1000, "Art"), 2025).is_ok());
        assert!(catalog.check_at(&book("A", "B", 2025, "Art"), 2025).is_ok());

        let errors = catalog.check_at(&book("A", "B", 999, "Art"), 2025).unwrap_err();
        assert_eq!(
            errors,
            vec![BookValidationError::YearOutOfRange { year: 999, min: 1000, max: 2025 }]
        );
        assert!(catalog.check_at(&book("A", "B", 2026, "Art"), 2025).is_err());
    }

    #[test]
    fn rejects_unknown_genre() {
        let catalog = Catalog::new(vec![Genre::from("Mystery")], 1000);
        let errors = catalog.check_at(&book("A", "B", 2000, "Fiction"), 2025).unwrap_err();
        assert_eq!(errors, vec![BookValidationError::UnknownGenre("Fiction".into())]);
    }

    #[test]
    fn genre_lookup_folds_non_ascii_case() {
        let catalog = Catalog::new(vec![Genre::from("Ästhetik"), Genre::from("Émigré")], 1000);

        assert_eq!(catalog.canonical_genre("ästhetik").unwrap().as_str(), "Ästhetik");
        assert_eq!(catalog.canonical_genre(" ÉMIGRÉ ").unwrap().as_str(), "Émigré");

        let checked = catalog.check_at(&book("A", "B", 2000, "ästhetik"), 2025).unwrap();
        assert_eq!(checked.genre, "Ästhetik");
    }

    #[test]
    fn default_catalog_has_every_default_genre() {
        let catalog = Catalog::default();
        for name in DEFAULT_GENRES {
            assert_eq!(catalog.canonical_genre(&name.to_uppercase()).unwrap().as_str(), name);
        }
    }
}
