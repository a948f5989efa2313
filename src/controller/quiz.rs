//! Quiz session controller methods

use crate::model::{Book, QuizSession, QuizState};
use super::AppController;

impl AppController {
    /// Start a session for the chosen book. Books without questions are
    /// refused and the screen stays on selection.
    pub async fn start_quiz(&self, book: &Book) {
        let model = self.model.lock().await;

        let questions = model.catalog.questions_for(book.id);
        match QuizSession::start(book.id, questions) {
            Some(session) => {
                tracing::info!(book_id = book.id, questions = session.questions.len(), "Quiz started");
                model.set_quiz_state(QuizState::InProgress(session)).await;
            }
            None => {
                model.set_error(format!("\"{}\" doesn't have a quiz yet.", book.title)).await;
            }
        }
    }

    pub async fn quiz_select_option(&self, option: usize) {
        let model = self.model.lock().await;
        let mut quiz = model.quiz.lock().await;
        if let QuizState::InProgress(session) = &mut *quiz {
            session.select(option);
        }
    }

    pub async fn quiz_move_selection(&self, delta: i32) {
        let model = self.model.lock().await;
        let mut quiz = model.quiz.lock().await;
        if let QuizState::InProgress(session) = &mut *quiz {
            session.move_selection(delta);
        }
    }

    /// Enter during a session: lock in the answer, or step to the next
    /// question once one is locked in. Completion writes the score through
    /// the store; on a failed write the results still show but the score
    /// stands unrecorded and a notification says so.
    pub async fn quiz_confirm(&self) {
        let model = self.model.lock().await;
        let mut quiz = model.quiz.lock().await;

        let QuizState::InProgress(session) = &mut *quiz else {
            return;
        };

        if !session.answered {
            session.submit_answer();
            tracing::debug!(
                question = session.current_question().id,
                score = session.score,
                "Answer locked in"
            );
            return;
        }

        if session.advance() {
            let finished = session.clone();
            *quiz = QuizState::Completed(finished.clone());
            drop(quiz);

            let mut progress = model.progress.lock().await;
            if let Err(e) = progress.record_session(model.store.as_ref(), finished.score) {
                tracing::error!(error = %e, "Failed to persist quiz score");
                drop(progress);
                model.set_error(
                    "Could not save your score. It will not count toward unlocks.".to_string(),
                ).await;
            }
        }
    }

    /// Leave the results screen and return to book selection.
    pub async fn quiz_reset(&self) {
        let model = self.model.lock().await;
        model.set_quiz_state(QuizState::SelectingBook).await;
    }
}
