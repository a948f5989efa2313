//! Reading-mode state: page position, font size, theme, and the flip guard.

use std::time::{Duration, Instant};

pub const FONT_MIN: u16 = 14;
pub const FONT_MAX: u16 = 28;
pub const FONT_STEP: u16 = 2;
pub const FONT_DEFAULT: u16 = 18;

/// Page turns are ignored while the previous one is still settling.
pub const FLIP_SETTLE: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTurn {
    Forward,
    Backward,
}

/// Position and presentation for one open book.
#[derive(Clone, Debug)]
pub struct ReaderPosition {
    pub book_id: String,
    pub page: usize,
    pub total_pages: usize,
    pub font_size: u16,
    pub light_mode: bool,
    flip_started: Option<Instant>,
}

impl ReaderPosition {
    pub fn open(book_id: &str, total_pages: usize) -> Self {
        Self {
            book_id: book_id.to_string(),
            page: 0,
            total_pages,
            font_size: FONT_DEFAULT,
            light_mode: false,
            flip_started: None,
        }
    }

    fn flipping(&self) -> bool {
        self.flip_started
            .is_some_and(|started| started.elapsed() < FLIP_SETTLE)
    }

    /// Turn one page. No-op at either bound and while a flip is settling.
    /// Returns whether the page actually changed.
    pub fn turn_page(&mut self, direction: PageTurn) -> bool {
        if self.flipping() {
            return false;
        }
        let next = match direction {
            PageTurn::Forward if self.page + 1 < self.total_pages => self.page + 1,
            PageTurn::Backward if self.page > 0 => self.page - 1,
            _ => return false,
        };
        self.page = next;
        self.flip_started = Some(Instant::now());
        true
    }

    /// Fraction read, in `[0, 1]`. An empty book reads as fully done.
    pub fn progress(&self) -> f64 {
        if self.total_pages == 0 {
            return 1.0;
        }
        (self.page + 1) as f64 / self.total_pages as f64
    }

    pub fn font_larger(&mut self) {
        self.font_size = (self.font_size + FONT_STEP).min(FONT_MAX);
    }

    pub fn font_smaller(&mut self) {
        self.font_size = self.font_size.saturating_sub(FONT_STEP).max(FONT_MIN);
    }

    pub fn toggle_theme(&mut self) {
        self.light_mode = !self.light_mode;
    }

    #[cfg(test)]
    fn settle(&mut self) {
        self.flip_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_turns_respect_bounds() {
        let mut reader = ReaderPosition::open("1", 3);
        assert!(!reader.turn_page(PageTurn::Backward));
        assert_eq!(reader.page, 0);

        assert!(reader.turn_page(PageTurn::Forward));
        reader.settle();
        assert!(reader.turn_page(PageTurn::Forward));
        reader.settle();
        assert_eq!(reader.page, 2);

        assert!(!reader.turn_page(PageTurn::Forward));
        assert_eq!(reader.page, 2);
    }

    #[test]
    fn turns_are_ignored_while_a_flip_settles() {
        let mut reader = ReaderPosition::open("1", 5);
        assert!(reader.turn_page(PageTurn::Forward));
        assert!(!reader.turn_page(PageTurn::Forward));
        assert_eq!(reader.page, 1);

        reader.settle();
        assert!(reader.turn_page(PageTurn::Forward));
        assert_eq!(reader.page, 2);
    }

    #[test]
    fn progress_counts_the_current_page_as_read() {
        let mut reader = ReaderPosition::open("1", 4);
        assert_eq!(reader.progress(), 0.25);
        reader.turn_page(PageTurn::Forward);
        assert_eq!(reader.progress(), 0.5);
    }

    #[test]
    fn font_size_clamps_to_range() {
        let mut reader = ReaderPosition::open("1", 1);
        assert_eq!(reader.font_size, FONT_DEFAULT);

        for _ in 0..20 {
            reader.font_larger();
        }
        assert_eq!(reader.font_size, FONT_MAX);

        for _ in 0..20 {
            reader.font_smaller();
        }
        assert_eq!(reader.font_size, FONT_MIN);
    }

    #[test]
    fn theme_toggles_both_ways() {
        let mut reader = ReaderPosition::open("1", 1);
        assert!(!reader.light_mode);
        reader.toggle_theme();
        assert!(reader.light_mode);
        reader.toggle_theme();
        assert!(!reader.light_mode);
    }
}
