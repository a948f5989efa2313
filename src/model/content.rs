//! Content view state for the main area: shelves, book details, reader, quiz, chat.

use super::catalog::{Book, Category};
use super::reader::ReaderPosition;

/// Book detail view data
#[derive(Clone, Debug)]
pub struct BookDetail {
    pub book: Book,
    pub related: Vec<Book>,
}

/// Represents the current view in the main content area
#[derive(Clone, Debug)]
pub enum ContentView {
    /// Landing view: category tiles plus the full catalog grid.
    Home {
        selected: usize,
    },
    /// Catalog sorted by rating, highest first.
    Trending {
        books: Vec<Book>,
        selected: usize,
    },
    /// One shelf. An unknown or empty shelf renders with an empty list.
    Category {
        category: Category,
        books: Vec<Book>,
        selected: usize,
    },
    BookDetail {
        detail: BookDetail,
        /// Index into the related list; 0 is the "read this book" action.
        selected: usize,
    },
    Reader {
        book: Book,
        position: ReaderPosition,
    },
    /// Quiz hub: book selection, the running session and results all render
    /// here, driven by the separate QuizState.
    Quiz {
        selected: usize,
    },
    Chat,
    /// Shown for a dead link (unknown book id).
    NotFound {
        book_id: String,
    },
}

impl Default for ContentView {
    fn default() -> Self {
        ContentView::Home { selected: 0 }
    }
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub navigation_stack: Vec<ContentView>,
}
