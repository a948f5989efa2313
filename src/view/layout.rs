//! Layout rendering (top bar, sidebar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::quiz::UNLOCK_THRESHOLD;
use crate::model::{ActiveSection, UiState, UserProgress};
use super::utils::accent_color;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Chat prompt
            Constraint::Length(30), // Account
        ])
        .split(area);

    let prompt_style = if ui_state.active_section == ActiveSection::ChatPrompt {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let prompt_text = if ui_state.chat_input.is_empty() {
        "Ask Nova for recommendations..."
    } else {
        &ui_state.chat_input
    };

    let prompt = Paragraph::new(prompt_text)
        .style(prompt_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ask Nova ")
                .padding(Padding::horizontal(1))
                .border_style(if ui_state.active_section == ActiveSection::ChatPrompt {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(prompt, chunks[0]);

    let account_text = match &ui_state.user_email {
        Some(email) => format!("👤 {}", email),
        None => "Not signed in ('a' to login)".to_string(),
    };
    let account = Paragraph::new(account_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Account "));
    frame.render_widget(account, chunks[1]);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Library (4 items + 2 borderlines)
            Constraint::Min(0),    // Categories (fills remaining space)
        ])
        .split(area);

    // Library section
    let library_items: Vec<ListItem> = ui_state
        .library_items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == ui_state.library_selected
                && ui_state.active_section == ActiveSection::Library
            {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == ui_state.library_selected {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(item.name.clone()).style(style)
        })
        .collect();

    let library_border_style = if ui_state.active_section == ActiveSection::Library {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let library = List::new(library_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Library ")
            .padding(Padding::horizontal(1))
            .border_style(library_border_style),
    );
    frame.render_widget(library, chunks[0]);

    // Categories section
    let category_items: Vec<ListItem> = ui_state
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if i == ui_state.category_selected
                && ui_state.active_section == ActiveSection::Categories
            {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if i == ui_state.category_selected {
                Style::default()
                    .fg(accent_color(category.accent))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent_color(category.accent))
            };
            ListItem::new(format!("{} {}", category.icon, category.name)).style(style)
        })
        .collect();

    let categories_border_style = if ui_state.active_section == ActiveSection::Categories {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let categories = List::new(category_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Categories ")
                .padding(Padding::horizontal(1))
                .border_style(categories_border_style),
        )
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(Some(ui_state.category_selected));

    frame.render_stateful_widget(categories, chunks[1], &mut list_state);
}

/// Bottom bar: quiz score, unlock status and key hints.
pub fn render_status_bar(frame: &mut Frame, area: Rect, progress: &UserProgress) {
    let unlock_text = if progress.unlocked {
        "🏆 Secret shelf unlocked".to_string()
    } else {
        format!("🔒 {}/{} points to the secret shelf", progress.cumulative, UNLOCK_THRESHOLD)
    };
    let status = format!(" ⭐ Quiz score: {}  |  {}", progress.cumulative, unlock_text);

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" NeoVerse ")
                .title_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(bar, area);
}
