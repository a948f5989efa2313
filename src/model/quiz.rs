//! Quiz session state machine and persisted user progress.
//!
//! A session walks a fixed question list for one book. Scoring happens once per
//! question (the first submitted answer counts, re-submissions before advancing
//! are ignored), and the cumulative score is written through the injected
//! key-value store when the session completes.

use anyhow::Result;

use crate::model::catalog::QuizQuestion;
use crate::storage::KeyValueStore;

/// Store key for the cumulative score, shared with the original deployment.
pub const PROGRESS_KEY: &str = "userQuizScore";

/// Cumulative score at which the special shelf unlocks.
pub const UNLOCK_THRESHOLD: u32 = 100;

/// One run through a book's question list.
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub book_id: String,
    pub questions: Vec<QuizQuestion>,
    pub index: usize,
    pub score: u32,
    /// Highlighted option, moved with the arrow keys.
    pub selected: Option<usize>,
    /// Set once an answer has been locked in for the current question.
    pub answered: bool,
}

impl QuizSession {
    /// `None` when the book has no questions; a session must have at least one.
    pub fn start(book_id: &str, questions: Vec<QuizQuestion>) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }
        Some(Self {
            book_id: book_id.to_string(),
            questions,
            index: 0,
            score: 0,
            selected: None,
            answered: false,
        })
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.index]
    }

    pub fn is_last_question(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn select(&mut self, option: usize) {
        if !self.answered && option < self.current_question().options.len() {
            self.selected = Some(option);
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        if self.answered {
            return;
        }
        let len = self.current_question().options.len() as i32;
        let current = self.selected.map(|s| s as i32).unwrap_or(-1);
        let next = (current + delta).clamp(0, len - 1);
        self.selected = Some(next as usize);
    }

    /// Lock in the highlighted option. The first submission per question
    /// scores; later ones before `advance` are ignored.
    pub fn submit_answer(&mut self) {
        if self.answered {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        let question = self.current_question();
        if selected == question.correct {
            self.score += question.points;
        }
        self.answered = true;
    }

    /// Move to the next question, or report completion from the last one.
    /// Does nothing until the current question has been answered.
    pub fn advance(&mut self) -> bool {
        if !self.answered {
            return false;
        }
        if self.is_last_question() {
            return true;
        }
        self.index += 1;
        self.selected = None;
        self.answered = false;
        false
    }
}

/// Where the quiz screen is: picking a book, mid-session, or on results.
#[derive(Clone, Debug, Default)]
pub enum QuizState {
    #[default]
    SelectingBook,
    InProgress(QuizSession),
    /// Holds the finished session for the results screen.
    Completed(QuizSession),
}

/// Cumulative score across all quiz runs, persisted between launches.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserProgress {
    pub cumulative: u32,
    pub unlocked: bool,
}

impl UserProgress {
    /// Read the persisted score; an absent or unparseable value is zero.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let cumulative = match store.get(PROGRESS_KEY)? {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(%raw, "discarding unparseable stored score");
                0
            }),
            None => 0,
        };
        Ok(Self {
            cumulative,
            unlocked: cumulative >= UNLOCK_THRESHOLD,
        })
    }

    /// Fold a finished session's score into the total and write it through.
    /// On a failed write the in-memory total is left unchanged so it keeps
    /// matching what the store holds.
    pub fn record_session(&mut self, store: &dyn KeyValueStore, session_score: u32) -> Result<()> {
        let updated = self.cumulative + session_score;
        store.set(PROGRESS_KEY, &updated.to_string())?;
        self.cumulative = updated;
        if self.cumulative >= UNLOCK_THRESHOLD {
            self.unlocked = true;
        }
        tracing::info!(
            session_score,
            cumulative = self.cumulative,
            unlocked = self.unlocked,
            "quiz session recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::storage::MemoryStore;

    use anyhow::bail;

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            bail!("store unavailable")
        }
    }

    fn session_for(catalog: &Catalog, book_id: &str) -> QuizSession {
        QuizSession::start(book_id, catalog.questions_for(book_id)).expect("book has questions")
    }

    #[test]
    fn zero_question_book_cannot_start() {
        let catalog = Catalog::new();
        let questions = catalog.questions_for("no-such-book");
        assert!(questions.is_empty());
        assert!(QuizSession::start("no-such-book", questions).is_none());
    }

    #[test]
    fn scoring_is_idempotent_until_advance() {
        let catalog = Catalog::new();
        let mut session = session_for(&catalog, "1");

        let correct = session.current_question().correct;
        let points = session.current_question().points;
        session.select(correct);
        session.submit_answer();
        assert_eq!(session.score, points);

        // Repeat submissions and selection changes must not re-score.
        session.submit_answer();
        session.select((correct + 1) % session.current_question().options.len());
        session.submit_answer();
        assert_eq!(session.score, points);
    }

    #[test]
    fn wrong_answer_scores_nothing() {
        let catalog = Catalog::new();
        let mut session = session_for(&catalog, "1");

        let wrong = (session.current_question().correct + 1) % session.current_question().options.len();
        session.select(wrong);
        session.submit_answer();
        assert_eq!(session.score, 0);
    }

    #[test]
    fn advance_requires_an_answer_and_completes_on_last() {
        let catalog = Catalog::new();
        let mut session = session_for(&catalog, "1");
        let total = session.questions.len();

        assert!(!session.advance());
        assert_eq!(session.index, 0);

        for i in 0..total {
            session.select(session.current_question().correct);
            session.submit_answer();
            let done = session.advance();
            assert_eq!(done, i + 1 == total);
        }
        assert_eq!(session.score, session.max_score());
    }

    #[test]
    fn unlock_flips_at_threshold_and_stays() {
        let store = MemoryStore::with_entry(PROGRESS_KEY, "80");
        let mut progress = UserProgress::load(&store).unwrap();
        assert_eq!(progress.cumulative, 80);
        assert!(!progress.unlocked);

        progress.record_session(&store, 25).unwrap();
        assert_eq!(progress.cumulative, 105);
        assert!(progress.unlocked);
        assert_eq!(store.get(PROGRESS_KEY).unwrap(), Some("105".to_string()));

        // Another run keeps the shelf unlocked.
        progress.record_session(&store, 0).unwrap();
        assert!(progress.unlocked);
    }

    #[test]
    fn failed_store_write_leaves_progress_unchanged() {
        let mut progress = UserProgress {
            cumulative: 80,
            unlocked: false,
        };
        let err = progress.record_session(&FailingStore, 25);
        assert!(err.is_err());
        assert_eq!(progress.cumulative, 80);
        assert!(!progress.unlocked);
    }

    #[test]
    fn unparseable_stored_score_reads_as_zero() {
        let store = MemoryStore::with_entry(PROGRESS_KEY, "not-a-number");
        let progress = UserProgress::load(&store).unwrap();
        assert_eq!(progress.cumulative, 0);
        assert!(!progress.unlocked);
    }
}
