//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: usize,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Map a category accent tag to a terminal color.
pub fn accent_color(accent: &str) -> Color {
    match accent {
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        "blue" => Color::Blue,
        "pink" => Color::LightMagenta,
        "gold" => Color::Yellow,
        _ => Color::White,
    }
}

/// Five-star rating string, fractional stars rounded down.
pub fn rating_stars(rating: f32) -> String {
    let full = rating.floor() as usize;
    let empty = 5usize.saturating_sub(full);
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(empty), rating)
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}
