//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (colors, formatting, scrollable lists)
//! - `layout`: Main layout structure (top bar, sidebar, status bar)
//! - `content`: Main content area rendering
//! - `reader`: Reading-mode rendering
//! - `overlays`: Modal overlays (error, auth panel, help)

mod utils;
mod layout;
mod content;
mod reader;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Catalog, ChatState, ContentState, QuizState, UiState, UserProgress};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        catalog: &Catalog,
        ui_state: &UiState,
        content_state: &ContentState,
        quiz: &QuizState,
        chat: &ChatState,
        progress: &UserProgress,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nova prompt + account
                Constraint::Min(0),    // Main content (sidebar + content)
                Constraint::Length(3), // Status bar with quiz progress
            ])
            .split(frame.area());

        // Top bar: Nova prompt + account
        layout::render_top_bar(frame, chunks[0], ui_state);

        // Middle: Sidebar (Library + Categories) and Main Content
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30), // Sidebar (Library + Categories)
                Constraint::Percentage(70), // Main content
            ])
            .split(chunks[1]);

        layout::render_sidebar(frame, main_chunks[0], ui_state);

        content::render_main_content(
            frame,
            main_chunks[1],
            catalog,
            ui_state,
            content_state,
            quiz,
            chat,
            progress,
        );

        // Bottom: quiz score and unlock status
        layout::render_status_bar(frame, chunks[2], progress);

        // Error notification overlay (if there's an error)
        if ui_state.error_message.is_some() {
            overlays::render_error_notification(frame, ui_state);
        }

        // Auth panel overlay (if open)
        if ui_state.show_auth_panel {
            overlays::render_auth_panel(frame, ui_state);
        }

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
