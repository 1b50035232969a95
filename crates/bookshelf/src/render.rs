//! Text rendering for the terminal front-end

use bookshelf_api::{Book, Genre, LibraryEvent, LibraryStats, Response, SearchHit, SyncStatus};
use bookshelf_util::format_timestamp;
use std::fmt::Write;

pub const EMPTY_LIBRARY: &str = "Your library is empty. Add some books to get started!";
pub const EMPTY_STATS: &str = "Your library is empty. Add some books to see stats!";
pub const NO_MATCHES: &str = "No books found matching your search.";

/// Widest bar in the distribution charts
const BAR_WIDTH: usize = 30;

/// One book as a small card, headed by its current position
pub fn book_card(index: usize, book: &Book) -> String {
    format!(
        "[#{index}] {title}\n\
         \x20     Author: {author}\n\
         \x20     Publication Year: {year}\n\
         \x20     Genre: {genre}\n\
         \x20     {status}  (added {added}, id {id})\n",
        title = book.title,
        author = book.author,
        year = book.publication_year,
        genre = book.genre,
        status = book.status_label(),
        added = format_timestamp(&book.added_date),
        id = book.id,
    )
}

pub fn book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return format!("{EMPTY_LIBRARY}\n");
    }

    let mut out = format!("Your Library ({} books)\n\n", books.len());
    for (index, book) in books.iter().enumerate() {
        out.push_str(&book_card(index, book));
        out.push('\n');
    }
    out
}

pub fn search_results(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let noun = if hits.len() == 1 { "result" } else { "results" };
    let mut out = format!("Found {} {noun}:\n\n", hits.len());
    for hit in hits {
        out.push_str(&book_card(hit.index, &hit.book));
        out.push('\n');
    }
    out
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

pub fn stats(stats: &LibraryStats, top_authors: usize) -> String {
    if stats.total == 0 {
        return format!("{EMPTY_STATS}\n");
    }

    let mut out = String::from("Your Library Statistics\n\n");
    let _ = writeln!(out, "  Total Books:     {}", stats.total);
    let _ = writeln!(out, "  Books Read:      {}", stats.read);
    let _ = writeln!(out, "  Books Unread:    {}", stats.unread);
    let _ = writeln!(out, "  Percentage Read: {:.1}%", stats.percentage_read);

    let top = stats.top_authors(top_authors);
    if !top.is_empty() {
        out.push_str("\nTop Authors\n");
        for author in top {
            let plural = if author.count > 1 { "s" } else { "" };
            let _ = writeln!(out, "  {}: {} book{plural}", author.author, author.count);
        }
    }

    let max = stats.genres.iter().map(|g| g.count).max().unwrap_or(0);
    out.push_str("\nBooks by Genre\n");
    for genre in &stats.genres {
        let _ = writeln!(
            out,
            "  {:<14} {:>3} {}",
            genre.genre.as_str(),
            genre.count,
            bar(genre.count, max)
        );
    }

    let max = stats.decades.iter().map(|d| d.count).max().unwrap_or(0);
    out.push_str("\nBooks by Publication Decade\n");
    for decade in &stats.decades {
        let label = format!("{}s", decade.decade);
        let _ = writeln!(out, "  {:<14} {:>3} {}", label, decade.count, bar(decade.count, max));
    }

    out
}

pub fn genres(genres: &[Genre]) -> String {
    let mut out = String::from("Genres\n");
    for (i, genre) in genres.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}) {}", i + 1, genre);
    }
    out
}

/// Warning for a mutation that did not reach disk
pub fn sync_notice(sync: &SyncStatus) -> Option<String> {
    match sync {
        SyncStatus::Saved => None,
        SyncStatus::Unsaved { reason } => Some(warning(&format!(
            "Changes are kept for this session but were not saved: {reason}"
        ))),
    }
}

pub fn warning(message: &str) -> String {
    format!("Warning: {message}\n")
}

/// One-line status for a change notification
pub fn event_notice(event: &LibraryEvent) -> String {
    match event {
        LibraryEvent::Loaded { count } => {
            let noun = if *count == 1 { "book" } else { "books" };
            format!("Loaded {count} {noun}.\n")
        }
        LibraryEvent::BookAdded { index, title, .. } => {
            format!("Book added successfully! \"{title}\" is #{index}.\n")
        }
        LibraryEvent::BookRemoved { index, title, .. } => {
            format!("Removed \"{title}\" (was #{index}).\n")
        }
    }
}

/// Render a library response. Success messages for adds and removes come
/// from [`event_notice`]; here those only produce text when the write failed.
pub fn response(response: &Response, top_authors: usize) -> String {
    match response {
        Response::Loaded { count } => event_notice(&LibraryEvent::Loaded { count: *count }),
        Response::Books { books } => book_list(books),
        Response::Added { sync, .. } | Response::Removed { sync, .. } => {
            sync_notice(sync).unwrap_or_default()
        }
        Response::NotRemoved => "No book at that position.\n".to_string(),
        Response::SearchResults { hits } => search_results(hits),
        Response::Stats(s) => stats(s, top_authors),
        Response::Error(info) => format!("Error: {}\n", info.message),
    }
}
