//! Main content area rendering (shelves, book details, quiz, chat)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Wrap},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{
    ActiveSection, Book, BookDetail, Catalog, Category, ChatState, ContentState, ContentView,
    QuizSession, QuizState, Speaker, UiState, UserProgress,
};
use super::utils::{accent_color, rating_stars, render_scrollable_list, truncate_string};

pub fn render_main_content(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    ui_state: &UiState,
    content_state: &ContentState,
    quiz: &QuizState,
    chat: &ChatState,
    progress: &UserProgress,
) {
    let is_focused = ui_state.active_section == ActiveSection::MainContent;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match &content_state.view {
        ContentView::Home { selected } => {
            render_book_list(frame, area, " Home ", catalog.books(), *selected, border_style);
        }
        ContentView::Trending { books, selected } => {
            render_trending(frame, area, books, *selected, border_style);
        }
        ContentView::Category {
            category,
            books,
            selected,
        } => {
            render_category(frame, area, category, books, *selected, is_focused);
        }
        ContentView::BookDetail { detail, selected } => {
            render_book_detail(frame, area, detail, *selected, border_style);
        }
        ContentView::Reader { book, position } => {
            super::reader::render_reader(frame, area, book, position, border_style);
        }
        ContentView::Quiz { selected } => {
            render_quiz(frame, area, catalog, quiz, progress, *selected, border_style);
        }
        ContentView::Chat => {
            render_chat(frame, area, chat, border_style);
        }
        ContentView::NotFound { book_id } => {
            let content = Paragraph::new(format!(
                "404 — no book with id \"{}\" on any shelf.\n\nPress Esc to go back.",
                book_id
            ))
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Not Found ")
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
            frame.render_widget(content, area);
        }
    }
}

fn book_line(book: &Book, is_selected: bool) -> ListItem<'static> {
    let style = if is_selected {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    ListItem::new(format!(
        "{}  {}  {}",
        truncate_string(book.title, 32),
        truncate_string(book.author, 20),
        rating_stars(book.rating),
    ))
    .style(style)
}

fn render_book_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    books: &[Book],
    selected: usize,
    border_style: Style,
) {
    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, b)| book_line(b, i == selected))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_trending(
    frame: &mut Frame,
    area: Rect,
    books: &[Book],
    selected: usize,
    border_style: Style,
) {
    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let style = if i == selected {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "#{:<3} {}  {}",
                i + 1,
                truncate_string(b.title, 32),
                rating_stars(b.rating),
            ))
            .style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🔥 Trending ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_category(
    frame: &mut Frame,
    area: Rect,
    category: &Category,
    books: &[Book],
    selected: usize,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(accent_color(category.accent))
    };
    let title = format!(" {} {} ", category.icon, category.name);

    if books.is_empty() {
        let empty = Paragraph::new("Nothing on this shelf yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .padding(Padding::horizontal(1))
                    .border_style(border_style),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, b)| book_line(b, i == selected))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_book_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &BookDetail,
    selected: usize,
    border_style: Style,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),                                      // Book info
            Constraint::Length(detail.related.len() as u16 + 3),     // Read action + related
        ])
        .split(area);

    let book = &detail.book;
    let info_lines = vec![
        Line::from(Span::styled(
            book.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("by {}", book.author)),
        Line::default(),
        Line::from(format!(
            "{}  ·  {} pages  ·  {}",
            rating_stars(book.rating),
            book.pages,
            book.year
        )),
        Line::default(),
        Line::from(book.description),
        Line::default(),
        // Covers are image URLs from the catalog data; a terminal can only link them
        Line::from(Span::styled(
            format!("Cover: {}", book.cover),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let info = Paragraph::new(info_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Book ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(info, chunks[0]);

    // Slot 0 is the read action, then the related books
    let mut items: Vec<ListItem> = Vec::with_capacity(detail.related.len() + 1);
    let read_label = if book.content.is_some() {
        "▶ Start reading"
    } else {
        "▶ Start reading (no content yet)"
    };
    items.push(
        ListItem::new(read_label).style(if selected == 0 {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }),
    );
    for (i, related) in detail.related.iter().enumerate() {
        items.push(book_line(related, selected == i + 1));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" You Might Also Like ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    render_scrollable_list(frame, chunks[1], items, selected, block);
}

fn render_quiz(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    quiz: &QuizState,
    progress: &UserProgress,
    selected: usize,
    border_style: Style,
) {
    match quiz {
        QuizState::SelectingBook => {
            render_quiz_selection(frame, area, catalog, progress, selected, border_style)
        }
        QuizState::InProgress(session) => render_quiz_question(frame, area, session, border_style),
        QuizState::Completed(session) => {
            render_quiz_results(frame, area, catalog, session, progress, border_style)
        }
    }
}

fn render_quiz_selection(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    progress: &UserProgress,
    selected: usize,
    border_style: Style,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Quiz books
            Constraint::Percentage(45), // Leaderboard + secret shelf
        ])
        .split(area);

    let books = catalog.books_with_quiz();
    let items: Vec<ListItem> = books
        .iter()
        .enumerate()
        .map(|(i, b)| book_line(b, i == selected))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Quiz Challenge — pick a book ")
        .padding(Padding::horizontal(1))
        .border_style(border_style);
    render_scrollable_list(frame, chunks[0], items, selected, block);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),                                        // Leaderboard
            Constraint::Length(catalog.special_books().len() as u16 + 2),
        ])
        .split(chunks[1]);

    let mut board_lines = Vec::new();
    for (i, entry) in catalog.leaderboard().iter().enumerate() {
        board_lines.push(Line::from(format!(
            "{}. {}  {} pts  ({} books, {} quizzes)",
            i + 1,
            truncate_string(entry.name, 16),
            entry.score,
            entry.books_read,
            entry.quizzes_taken,
        )));
    }
    let board = Paragraph::new(board_lines)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 🏆 Leaderboard ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(board, side_chunks[0]);

    let secret_lines: Vec<Line> = catalog
        .special_books()
        .iter()
        .map(|b| {
            if progress.unlocked {
                Line::from(Span::styled(
                    format!("✨ {}", b.title),
                    Style::default().fg(Color::Yellow),
                ))
            } else {
                Line::from(Span::styled(
                    format!("🔒 {}", b.title),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();
    let secret = Paragraph::new(secret_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Secret Shelf ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(secret, side_chunks[1]);
}

fn render_quiz_question(frame: &mut Frame, area: Rect, session: &QuizSession, border_style: Style) {
    let question = session.current_question();

    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "Question {}/{}  ·  {} pts  ·  score {}",
                session.index + 1,
                session.questions.len(),
                question.points,
                session.score
            ),
            Style::default().fg(Color::Yellow),
        )),
        Line::default(),
        Line::from(Span::styled(
            question.question,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let style = if session.answered {
            // Reveal: correct is green, a wrong pick is red
            if i == question.correct {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if Some(i) == session.selected {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            }
        } else if Some(i) == session.selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let marker = if Some(i) == session.selected { "▶" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(" {} {}. {}", marker, i + 1, option),
            style,
        )));
    }

    lines.push(Line::default());
    let hint = if session.answered {
        if session.is_last_question() {
            "Enter: finish quiz"
        } else {
            "Enter: next question"
        }
    } else {
        "1-4 or ↑↓ to pick · Enter to lock in"
    };
    lines.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Quiz ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}

fn render_quiz_results(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    session: &QuizSession,
    progress: &UserProgress,
    border_style: Style,
) {
    let book_title = catalog
        .book_by_id(&session.book_id)
        .map(|b| b.title)
        .unwrap_or("this book");
    let max = session.max_score();
    let verdict = if session.score == max {
        "Perfect run! 🎉"
    } else if session.score * 2 >= max {
        "Nice work!"
    } else {
        "Better luck next time."
    };

    let mut lines = vec![
        Line::from(Span::styled(
            verdict,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "You scored {} of {} points on \"{}\".",
            session.score, max, book_title
        )),
        Line::from(format!("Total quiz score: {}", progress.cumulative)),
        Line::default(),
    ];
    if progress.unlocked {
        lines.push(Line::from(Span::styled(
            "✨ The secret shelf is unlocked!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "Enter: back to book selection · Esc: leave",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .padding(Padding::horizontal(1))
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}

fn render_chat(frame: &mut Frame, area: Rect, chat: &ChatState, border_style: Style) {
    let mut lines: Vec<Line> = Vec::new();
    for message in &chat.messages {
        match message.speaker {
            Speaker::Nova => {
                lines.push(Line::from(vec![
                    Span::styled("Nova: ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
                    Span::raw(message.text.clone()),
                ]));
                for book in &message.books {
                    lines.push(Line::from(Span::styled(
                        format!("   📖 {} — {}", book.title, book.author),
                        Style::default().fg(Color::Cyan),
                    )));
                }
            }
            Speaker::User => {
                lines.push(Line::from(vec![
                    Span::styled("You:  ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                    Span::raw(message.text.clone()),
                ]));
            }
        }
        lines.push(Line::default());
    }
    if chat.reply_pending {
        lines.push(Line::from(Span::styled(
            "Nova is thinking…",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the tail of the transcript in view
    let inner_height = area.height.saturating_sub(3) as usize;
    let scroll = lines.len().saturating_sub(inner_height) as u16;

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Nova — 1-4 for quick prompts, type above ")
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(widget, area);
}
