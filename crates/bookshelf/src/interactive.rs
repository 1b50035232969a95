//! Interactive menu loop

use bookshelf_api::{Command, Genre, LibraryEvent, NewBook, Response, SearchField};
use bookshelf_core::Library;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use tracing::debug;

use crate::render;

const MENU: &str = "\n\
== Personal Library Manager ==\n\
  1) View Library\n\
  2) Add Book\n\
  3) Search\n\
  4) Statistics\n\
  5) Remove Book\n\
  q) Quit\n";

/// Menu choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Library,
    Add,
    Search,
    Stats,
    Remove,
    Quit,
}

impl View {
    fn parse(choice: &str) -> Option<Self> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "v" | "view" | "list" => Some(Self::Library),
            "2" | "a" | "add" => Some(Self::Add),
            "3" | "s" | "search" => Some(Self::Search),
            "4" | "t" | "stats" => Some(Self::Stats),
            "5" | "r" | "remove" => Some(Self::Remove),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Menu-driven front-end over a [`Library`]
pub struct Shell<'a, R, W> {
    library: &'a mut Library,
    input: R,
    output: W,
    top_authors: usize,
    events: Rc<RefCell<Vec<LibraryEvent>>>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(library: &'a mut Library, input: R, output: W, top_authors: usize) -> Self {
        let events: Rc<RefCell<Vec<LibraryEvent>>> = Rc::default();
        let sink = events.clone();
        library.subscribe(move |event: &LibraryEvent| sink.borrow_mut().push(event.clone()));

        Self {
            library,
            input,
            output,
            top_authors,
            events,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.output.write_all(MENU.as_bytes())?;
            let Some(choice) = self.prompt("> ")? else {
                break;
            };
            if choice.trim().is_empty() {
                continue;
            }

            let Some(view) = View::parse(&choice) else {
                writeln!(self.output, "Unknown option '{}'.", choice.trim())?;
                continue;
            };
            debug!(?view, "Menu selection");

            let keep_going = match view {
                View::Library => self.show(Command::List),
                View::Add => self.add_form(),
                View::Search => self.search_form(),
                View::Stats => self.show(Command::Stats),
                View::Remove => self.remove_form(),
                View::Quit => Ok(false),
            }?;

            self.flush_events()?;
            if !keep_going {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        Ok(())
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn execute(&mut self, command: Command) -> io::Result<Response> {
        let response = self.library.execute(command);
        let text = render::response(&response, self.top_authors);
        self.output.write_all(text.as_bytes())?;
        Ok(response)
    }

    fn show(&mut self, command: Command) -> io::Result<bool> {
        self.execute(command)?;
        Ok(true)
    }

    /// Write a notice for every change since the last action
    fn flush_events(&mut self) -> io::Result<()> {
        let events: Vec<LibraryEvent> = self.events.borrow_mut().drain(..).collect();
        for event in &events {
            self.output.write_all(render::event_notice(event).as_bytes())?;
        }
        Ok(())
    }

    fn add_form(&mut self) -> io::Result<bool> {
        writeln!(self.output, "\nAdd a New Book")?;

        let Some(title) = self.prompt("Book Title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(false);
        };
        let Some(publication_year) = self.read_year()? else {
            return Ok(false);
        };
        let Some(genre) = self.read_genre()? else {
            return Ok(false);
        };
        let Some(read_status) = self.read_status()? else {
            return Ok(false);
        };

        // Same gate as the form: nothing is submitted without title and author
        if title.trim().is_empty() || author.trim().is_empty() {
            writeln!(self.output, "Title and author are required; book not added.")?;
            return Ok(true);
        }

        self.execute(Command::Add(NewBook {
            title,
            author,
            publication_year,
            genre: genre.as_str().to_string(),
            read_status,
        }))?;
        Ok(true)
    }

    fn read_year(&mut self) -> io::Result<Option<i32>> {
        let min = self.library.catalog().min_year();
        let max = bookshelf_util::current_year();

        loop {
            let Some(text) = self.prompt(&format!("Publication Year ({min}-{max}): "))? else {
                return Ok(None);
            };
            match text.trim().parse::<i32>() {
                Ok(year) if (min..=max).contains(&year) => return Ok(Some(year)),
                _ => writeln!(self.output, "Enter a year between {min} and {max}.")?,
            }
        }
    }

    fn read_genre(&mut self) -> io::Result<Option<Genre>> {
        let genres = self.library.catalog().genres().to_vec();
        self.output.write_all(render::genres(&genres).as_bytes())?;

        loop {
            let Some(text) = self.prompt("Genre (number or name) [1]: ")? else {
                return Ok(None);
            };
            let text = text.trim();

            let choice = if text.is_empty() {
                genres.first().cloned()
            } else if let Ok(n) = text.parse::<usize>() {
                n.checked_sub(1).and_then(|i| genres.get(i)).cloned()
            } else {
                self.library.catalog().canonical_genre(text).cloned()
            };

            match choice {
                Some(genre) => return Ok(Some(genre)),
                None => writeln!(self.output, "Pick one of the listed genres.")?,
            }
        }
    }

    fn read_status(&mut self) -> io::Result<Option<bool>> {
        loop {
            let Some(text) = self.prompt("Have you read it? (y/N): ")? else {
                return Ok(None);
            };
            match text.trim().to_lowercase().as_str() {
                "y" | "yes" | "read" => return Ok(Some(true)),
                "" | "n" | "no" | "unread" => return Ok(Some(false)),
                _ => writeln!(self.output, "Answer y or n.")?,
            }
        }
    }

    fn search_form(&mut self) -> io::Result<bool> {
        let Some(by) = self.prompt("Search by (title/author/genre) [title]: ")? else {
            return Ok(false);
        };
        let field = if by.trim().is_empty() {
            SearchField::Title
        } else {
            match by.parse::<SearchField>() {
                Ok(field) => field,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    return Ok(true);
                }
            }
        };

        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(false);
        };
        if term.trim().is_empty() {
            writeln!(self.output, "Enter a search term to search.")?;
            return Ok(true);
        }

        self.execute(Command::Search { term, field })?;
        Ok(true)
    }

    fn remove_form(&mut self) -> io::Result<bool> {
        if self.library.is_empty() {
            writeln!(self.output, "{}", render::EMPTY_LIBRARY)?;
            return Ok(true);
        }

        let last = self.library.len() - 1;
        let Some(text) = self.prompt(&format!("Position of the book to remove (0-{last}): "))?
        else {
            return Ok(false);
        };

        match text.trim().parse::<usize>() {
            Ok(index) => {
                self.execute(Command::Remove { index })?;
            }
            Err(_) => writeln!(self.output, "No book at position '{}'.", text.trim())?,
        }
        Ok(true)
    }
}
