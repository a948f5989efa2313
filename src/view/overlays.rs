//! Overlay rendering (error notification, auth panel, help popup)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{AuthField, AuthMode, UiState};

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        // Fixed width popup (responsive to screen size)
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4) as usize; // account for borders

        // Calculate how many lines the error message will take when wrapped
        let error_line_count = ((error_msg.chars().count() as f32) / (inner_width as f32)).ceil() as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_height = (2 + error_line_count.max(1)).min(area.height - 4);

        let popup_x = area.width.saturating_sub(popup_width) / 2;
        let popup_y = area.height.saturating_sub(popup_height) / 2;

        let popup_area = Rect {
            x: popup_x,
            y: popup_y,
            width: popup_width,
            height: popup_height,
        };

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(ratatui::widgets::Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_auth_panel(frame: &mut Frame, ui_state: &UiState) {
    let area = frame.area();
    let form = &ui_state.auth_form;

    let popup_width = 48.min(area.width.saturating_sub(4));
    let popup_height = 11.min(area.height.saturating_sub(4));

    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let title = match form.mode {
        AuthMode::Login => " Welcome Back (Tab: switch to signup) ",
        AuthMode::Signup => " Join NeoVerse (Tab: switch to login) ",
    };

    let field_line = |label: &str, value: &str, field: AuthField, masked: bool| {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let style = if form.field == field {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if form.field == field { "▎" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:>10}: ", label), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}{}", shown, cursor), style),
        ])
    };

    let mut lines = vec![
        Line::default(),
        field_line("Email", &form.email, AuthField::Email, false),
        Line::default(),
        field_line("Password", &form.password, AuthField::Password, true),
    ];
    if form.mode == AuthMode::Signup {
        lines.push(Line::default());
        lines.push(field_line("Confirm", &form.confirm, AuthField::Confirm, true));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  ↑↓ field · Enter submit · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(panel, popup_area);
}

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = vec![
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle sections"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open / Select"),
        ("Backspace / Esc", "Go back"),
        ("G", "Focus the Nova prompt"),
        ("", ""),
        ("", "── Reading mode ──"),
        ("← / →", "Turn page"),
        ("+ / -", "Font size"),
        ("T", "Day / night theme"),
        ("", ""),
        ("", "── Quiz ──"),
        ("1-4", "Pick an answer"),
        ("Enter", "Lock in / next question"),
        ("", ""),
        ("", "── General ──"),
        ("A", "Sign in / sign out"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let popup_width = 62;
    let popup_height = (keybindings.len() as u16 + 2).min(area.height - 4);

    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;

    let popup_area = Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        desc.to_string(),
                        Style::default().fg(Color::White),
                    ),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
