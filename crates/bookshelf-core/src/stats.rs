//! Statistics over a book list

use bookshelf_api::{AuthorCount, Book, DecadeCount, GenreCount, LibraryStats};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Compute totals, read share and frequency tables
pub fn compute_stats(books: &[Book]) -> LibraryStats {
    let total = books.len();
    let read = books.iter().filter(|b| b.read_status).count();

    let authors = frequencies(books.iter().map(|b| b.author.clone()))
        .into_iter()
        .map(|(author, count)| AuthorCount { author, count })
        .collect();

    let genres = frequencies(books.iter().map(|b| b.genre.clone()))
        .into_iter()
        .map(|(genre, count)| GenreCount { genre, count })
        .collect();

    let mut decades: BTreeMap<i32, usize> = BTreeMap::new();
    for book in books {
        *decades.entry(book.decade()).or_default() += 1;
    }

    LibraryStats {
        total,
        read,
        unread: total - read,
        percentage_read: percentage(read, total),
        authors,
        genres,
        decades: decades
            .into_iter()
            .map(|(decade, count)| DecadeCount { decade, count })
            .collect(),
    }
}

/// `part / total` in percent, rounded to one decimal; 0 when `total` is 0
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Count occurrences, most frequent first. Equal counts keep the order in
/// which the keys were first seen.
fn frequencies<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match slots.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
