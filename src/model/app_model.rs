//! Main application model with state management

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::auth::AuthService;
use crate::storage::KeyValueStore;

use super::catalog::{Book, Catalog};
use super::chat::ChatState;
use super::content::{ContentState, ContentView};
use super::quiz::{QuizState, UserProgress};
use super::types::{ActiveSection, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub catalog: Arc<Catalog>,
    pub store: Arc<dyn KeyValueStore>,
    pub auth: Arc<dyn AuthService>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub content_state: Arc<Mutex<ContentState>>,
    pub chat: Arc<Mutex<ChatState>>,
    pub quiz: Arc<Mutex<QuizState>>,
    pub progress: Arc<Mutex<UserProgress>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        auth: Arc<dyn AuthService>,
        progress: UserProgress,
    ) -> Self {
        let mut ui_state = UiState::default();
        ui_state.categories = catalog.categories().to_vec();

        Self {
            catalog: Arc::new(catalog),
            store,
            auth,
            ui_state: Arc::new(Mutex::new(ui_state)),
            content_state: Arc::new(Mutex::new(ContentState::default())),
            chat: Arc::new(Mutex::new(ChatState::new())),
            quiz: Arc::new(Mutex::new(QuizState::default())),
            progress: Arc::new(Mutex::new(progress)),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Library => {
                if state.library_selected > 0 {
                    state.library_selected -= 1;
                }
            }
            ActiveSection::Categories => {
                if state.category_selected > 0 {
                    state.category_selected -= 1;
                }
            }
            _ => {}
        }
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Library => {
                if state.library_selected < state.library_items.len().saturating_sub(1) {
                    state.library_selected += 1;
                }
            }
            ActiveSection::Categories => {
                if state.category_selected < state.categories.len().saturating_sub(1) {
                    state.category_selected += 1;
                }
            }
            _ => {}
        }
    }

    pub async fn append_to_chat_input(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.chat_input.push(c);
    }

    pub async fn backspace_chat_input(&self) {
        let mut state = self.ui_state.lock().await;
        state.chat_input.pop();
    }

    pub async fn take_chat_input(&self) -> String {
        let mut state = self.ui_state.lock().await;
        std::mem::take(&mut state.chat_input)
    }

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > 5 {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    pub async fn show_auth_panel(&self) {
        let mut state = self.ui_state.lock().await;
        state.auth_form = Default::default();
        state.show_auth_panel = true;
    }

    pub async fn hide_auth_panel(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_auth_panel = false;
    }

    pub async fn is_auth_panel_open(&self) -> bool {
        self.ui_state.lock().await.show_auth_panel
    }

    pub async fn set_user_email(&self, email: Option<String>) {
        let mut state = self.ui_state.lock().await;
        state.user_email = email;
    }

    pub async fn get_user_email(&self) -> Option<String> {
        self.ui_state.lock().await.user_email.clone()
    }

    // ========================================================================
    // Content navigation
    // ========================================================================

    pub async fn get_content_state(&self) -> ContentState {
        self.content_state.lock().await.clone()
    }

    /// Replace the current view, pushing the old one onto the stack.
    pub async fn push_view(&self, view: ContentView) {
        let mut state = self.content_state.lock().await;
        let previous = std::mem::replace(&mut state.view, view);
        state.navigation_stack.push(previous);
    }

    /// Replace the current view and drop any history (sidebar jumps).
    pub async fn reset_view(&self, view: ContentView) {
        let mut state = self.content_state.lock().await;
        state.navigation_stack.clear();
        state.view = view;
    }

    pub async fn navigate_back(&self) -> bool {
        let mut state = self.content_state.lock().await;
        if let Some(previous_view) = state.navigation_stack.pop() {
            state.view = previous_view;
            true
        } else {
            // No history left, land on home
            state.view = ContentView::default();
            false
        }
    }

    pub async fn content_move_up(&self) {
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::Home { selected }
            | ContentView::Trending { selected, .. }
            | ContentView::Category { selected, .. }
            | ContentView::BookDetail { selected, .. }
            | ContentView::Quiz { selected } => {
                if *selected > 0 {
                    *selected -= 1;
                }
            }
            _ => {}
        }
    }

    pub async fn content_move_down(&self) {
        let catalog = &self.catalog;
        let mut state = self.content_state.lock().await;
        match &mut state.view {
            ContentView::Home { selected } => {
                if *selected < catalog.books().len().saturating_sub(1) {
                    *selected += 1;
                }
            }
            ContentView::Trending { books, selected }
            | ContentView::Category { books, selected, .. } => {
                if *selected < books.len().saturating_sub(1) {
                    *selected += 1;
                }
            }
            ContentView::BookDetail { detail, selected } => {
                // Slot 0 is the read action, then the related books.
                if *selected < detail.related.len() {
                    *selected += 1;
                }
            }
            ContentView::Quiz { selected } => {
                if *selected < catalog.books_with_quiz().len().saturating_sub(1) {
                    *selected += 1;
                }
            }
            _ => {}
        }
    }

    /// The book the current view's cursor points at, if any.
    pub async fn get_selected_book(&self) -> Option<Book> {
        let state = self.content_state.lock().await;
        match &state.view {
            ContentView::Home { selected } => self.catalog.books().get(*selected).cloned(),
            ContentView::Trending { books, selected }
            | ContentView::Category { books, selected, .. } => books.get(*selected).cloned(),
            ContentView::BookDetail { detail, selected } => {
                if *selected == 0 {
                    Some(detail.book.clone())
                } else {
                    detail.related.get(*selected - 1).cloned()
                }
            }
            ContentView::Quiz { selected } => self.catalog.books_with_quiz().get(*selected).cloned(),
            _ => None,
        }
    }

    // ========================================================================
    // Quiz & progress
    // ========================================================================

    pub async fn get_quiz_state(&self) -> QuizState {
        self.quiz.lock().await.clone()
    }

    pub async fn set_quiz_state(&self, quiz: QuizState) {
        *self.quiz.lock().await = quiz;
    }

    pub async fn get_progress(&self) -> UserProgress {
        *self.progress.lock().await
    }

    // ========================================================================
    // Chat
    // ========================================================================

    pub async fn get_chat_state(&self) -> ChatState {
        self.chat.lock().await.clone()
    }
}
