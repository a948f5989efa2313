//! Reading-mode rendering (page content + progress bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{Book, ReaderPosition};

pub fn render_reader(
    frame: &mut Frame,
    area: Rect,
    book: &Book,
    position: &ReaderPosition,
    border_style: Style,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Page text
            Constraint::Length(3), // Progress bar
        ])
        .split(area);

    let (fg, bg) = if position.light_mode {
        (Color::Black, Color::White)
    } else {
        (Color::White, Color::Reset)
    };

    let current_page = book
        .content
        .as_ref()
        .and_then(|pages| pages.get(position.page));

    let mut body = Text::from(current_page.map(|p| p.text).unwrap_or(""));
    if let Some(scene) = current_page.map(|p| p.bg_image) {
        // Page backdrops are image URLs; surface them as a footnote
        body.push_line(Line::default());
        body.push_line(Line::styled(
            format!("Scene: {}", scene),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = format!(
        " {} — page {}/{} · font {} · {} ",
        book.title,
        position.page + 1,
        position.total_pages,
        position.font_size,
        if position.light_mode { "day" } else { "night" },
    );

    let page = Paragraph::new(body)
        .style(Style::default().fg(fg).bg(bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(2))
                .border_style(border_style),
        );
    frame.render_widget(page, chunks[0]);

    let progress = position.progress();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ←/→ turn page · +/- font · t theme · Esc close ")
                .title_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .ratio(progress.clamp(0.0, 1.0))
        .label(format!("{:.0}%", progress * 100.0));
    frame.render_widget(gauge, chunks[1]);
}
