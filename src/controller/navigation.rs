//! Navigation-related controller methods (sidebar, shelves, book details, reader)

use crate::model::{ActiveSection, Book, BookDetail, ContentView, QuizState, ReaderPosition};
use super::AppController;

impl AppController {
    pub async fn open_library_item(&self, index: usize) {
        let model = self.model.lock().await;
        self.reset_quiz_if_leaving(&model).await;

        let view = match index {
            0 => ContentView::Home { selected: 0 },
            1 => ContentView::Trending {
                books: model.catalog.trending(),
                selected: 0,
            },
            2 => ContentView::Quiz { selected: 0 },
            3 => ContentView::Chat,
            _ => return,
        };
        tracing::debug!(index, "Opening library item");
        model.reset_view(view).await;
        model.set_active_section(ActiveSection::MainContent).await;
    }

    pub async fn open_category(&self, index: usize) {
        let model = self.model.lock().await;
        self.reset_quiz_if_leaving(&model).await;

        let ui_state = model.get_ui_state().await;
        let Some(category) = ui_state.categories.get(index).copied() else {
            return;
        };
        let books = model.catalog.books_by_category(category.id);
        tracing::debug!(category = category.id.slug(), books = books.len(), "Opening category shelf");
        model.reset_view(ContentView::Category {
            category,
            books,
            selected: 0,
        }).await;
        model.set_active_section(ActiveSection::MainContent).await;
    }

    /// Open a book's detail page. A dead id lands on the not-found view, a
    /// locked special book is refused with a notification.
    pub async fn open_book(&self, book_id: &str) {
        let model = self.model.lock().await;

        let Some(book) = model.catalog.book_by_id(book_id).cloned() else {
            tracing::warn!(book_id, "Book lookup missed");
            model.push_view(ContentView::NotFound {
                book_id: book_id.to_string(),
            }).await;
            return;
        };

        if model.catalog.is_special(&book.id) && !model.get_progress().await.unlocked {
            model.set_error(
                "This book is locked. Score 100 quiz points to unlock it.".to_string(),
            ).await;
            return;
        }

        let related = model.catalog.related_books(&book);
        model.push_view(ContentView::BookDetail {
            detail: BookDetail { book, related },
            selected: 0,
        }).await;
    }

    /// Open reading mode for a book that has content pages.
    pub async fn open_reader(&self, book: Book) {
        let model = self.model.lock().await;

        let total_pages = book.content.as_ref().map(|c| c.len()).unwrap_or(0);
        if total_pages == 0 {
            model.set_error("This book has no reading content yet.".to_string()).await;
            return;
        }

        tracing::info!(book_id = book.id, pages = total_pages, "Opening reader");
        let position = ReaderPosition::open(book.id, total_pages);
        model.push_view(ContentView::Reader { book, position }).await;
    }

    /// Enter on the main content area, dispatched per view.
    pub async fn activate_content_selection(&self) {
        let model = self.model.lock().await;
        let view = model.get_content_state().await.view;

        match view {
            ContentView::Home { .. }
            | ContentView::Trending { .. }
            | ContentView::Category { .. } => {
                let selected = model.get_selected_book().await;
                drop(model);
                if let Some(book) = selected {
                    self.open_book(book.id).await;
                }
            }
            ContentView::BookDetail { detail, selected } => {
                drop(model);
                if selected == 0 {
                    self.open_reader(detail.book).await;
                } else if let Some(book) = detail.related.get(selected - 1) {
                    self.open_book(book.id).await;
                }
            }
            ContentView::Quiz { .. } => {
                let quiz = model.get_quiz_state().await;
                let selected = model.get_selected_book().await;
                drop(model);
                if matches!(quiz, QuizState::SelectingBook) {
                    if let Some(book) = selected {
                        self.start_quiz(&book).await;
                    }
                }
            }
            ContentView::NotFound { .. } => {
                model.navigate_back().await;
            }
            _ => {}
        }
    }

    /// Back out of the current view, tearing down per-view state first.
    pub async fn go_back(&self) {
        let model = self.model.lock().await;
        self.reset_quiz_if_leaving(&model).await;
        model.navigate_back().await;
    }

    /// Leaving the quiz view abandons any running session.
    async fn reset_quiz_if_leaving(&self, model: &crate::model::AppModel) {
        let state = model.get_content_state().await;
        if matches!(state.view, ContentView::Quiz { .. }) {
            let quiz = model.get_quiz_state().await;
            if !matches!(quiz, QuizState::SelectingBook) {
                tracing::debug!("Abandoning quiz session on navigation");
                model.set_quiz_state(QuizState::SelectingBook).await;
            }
        }
    }
}
