//! # Quiz Session
//!
//! Answer state and statistics for a run of questions: select an interval
//! name, submit it, advance on a correct answer. The timer for a question
//! stops only when it is answered correctly; wrong answers leave it running,
//! so the recorded time is time-to-correct, not time-to-first-guess.
//!
//! The session never generates questions itself. Callers draw them from
//! [`crate::generator`] and feed them in, which keeps the rng at the edge
//! and the state machine deterministic.

use std::time::{Duration, Instant};

use crate::theory::Question;

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

/// Running statistics over correctly answered questions.
///
/// Pure arithmetic over [`Duration`] values; the session owns the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    correct: u32,
    total_to_correct: Duration,
}

impl Scoreboard {
    /// Record one correctly answered question and the time it took.
    pub fn record_correct(&mut self, elapsed: Duration) {
        self.correct += 1;
        self.total_to_correct += elapsed;
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Mean time-to-correct. `None` until the first correct answer.
    pub fn average_time(&self) -> Option<Duration> {
        if self.correct == 0 {
            None
        } else {
            Some(self.total_to_correct / self.correct)
        }
    }
}

/// One interactive quiz run.
#[derive(Debug)]
pub struct QuizSession {
    question: Question,
    selected: Option<&'static str>,
    state: AnswerState,
    started: Option<Instant>,
    frozen_elapsed: Duration,
    scoreboard: Scoreboard,
}

impl QuizSession {
    /// Start a session on its first question. The timer starts immediately.
    pub fn new(question: Question) -> Self {
        Self {
            question,
            selected: None,
            state: AnswerState::Unanswered,
            started: Some(Instant::now()),
            frozen_elapsed: Duration::ZERO,
            scoreboard: Scoreboard::default(),
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn state(&self) -> AnswerState {
        self.state
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Time the current question has been open. Freezes once the question
    /// is answered correctly.
    pub fn elapsed(&self) -> Duration {
        match self.started {
            Some(started) => started.elapsed(),
            None => self.frozen_elapsed,
        }
    }

    /// Pick an answer. Ignored once the question is answered correctly;
    /// otherwise the question reopens for another submit.
    pub fn select(&mut self, answer: &'static str) {
        if self.state == AnswerState::Correct {
            return;
        }
        self.selected = Some(answer);
        self.state = AnswerState::Unanswered;
    }

    /// Check the current selection. Returns `None` when nothing is selected.
    ///
    /// A correct answer stops the timer and records the elapsed time on the
    /// scoreboard. A wrong answer leaves the timer running and the question
    /// open for another try.
    pub fn submit(&mut self) -> Option<AnswerState> {
        let selected = self.selected?;

        if self.state == AnswerState::Correct {
            return Some(AnswerState::Correct);
        }

        if selected == self.question.correct_answer {
            if let Some(started) = self.started.take() {
                self.frozen_elapsed = started.elapsed();
                self.scoreboard.record_correct(self.frozen_elapsed);
            }
            self.state = AnswerState::Correct;
        } else {
            self.state = AnswerState::Incorrect;
        }
        Some(self.state)
    }

    /// Install the next question and restart the timer.
    pub fn advance(&mut self, question: Question) {
        self.question = question;
        self.selected = None;
        self.state = AnswerState::Unanswered;
        self.started = Some(Instant::now());
        self.frozen_elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_question_with;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(seed: u64) -> Question {
        generate_question_with(&mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn wrong_answer(question: &Question) -> &'static str {
        crate::tables::interval_names()
            .into_iter()
            .find(|&name| name != question.correct_answer)
            .unwrap()
    }

    #[test]
    fn test_scoreboard_average() {
        let mut board = Scoreboard::default();
        assert_eq!(board.correct_count(), 0);
        assert_eq!(board.average_time(), None);

        board.record_correct(Duration::from_secs(2));
        board.record_correct(Duration::from_secs(4));
        assert_eq!(board.correct_count(), 2);
        assert_eq!(board.average_time(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_submit_without_selection_is_a_noop() {
        let mut session = QuizSession::new(question(1));
        assert_eq!(session.submit(), None);
        assert_eq!(session.state(), AnswerState::Unanswered);
    }

    #[test]
    fn test_wrong_then_right_counts_once() {
        let q = question(2);
        let wrong = wrong_answer(&q);
        let right = q.correct_answer;
        let mut session = QuizSession::new(q);

        session.select(wrong);
        assert_eq!(session.submit(), Some(AnswerState::Incorrect));
        assert_eq!(session.scoreboard().correct_count(), 0);

        // Selecting reopens the question.
        session.select(right);
        assert_eq!(session.state(), AnswerState::Unanswered);
        assert_eq!(session.submit(), Some(AnswerState::Correct));
        assert_eq!(session.scoreboard().correct_count(), 1);
    }

    #[test]
    fn test_selection_locked_after_correct() {
        let q = question(3);
        let right = q.correct_answer;
        let wrong = wrong_answer(&q);
        let mut session = QuizSession::new(q);

        session.select(right);
        assert_eq!(session.submit(), Some(AnswerState::Correct));

        // A late selection changes nothing; resubmitting stays correct and
        // records nothing new.
        session.select(wrong);
        assert_eq!(session.selected(), Some(right));
        assert_eq!(session.submit(), Some(AnswerState::Correct));
        assert_eq!(session.scoreboard().correct_count(), 1);
    }

    #[test]
    fn test_advance_resets_question_state() {
        let first = question(4);
        let right = first.correct_answer;
        let mut session = QuizSession::new(first);

        session.select(right);
        session.submit();

        let second = question(5);
        session.advance(second.clone());
        assert_eq!(session.question(), &second);
        assert_eq!(session.selected(), None);
        assert_eq!(session.state(), AnswerState::Unanswered);
        // Scoreboard carries across questions.
        assert_eq!(session.scoreboard().correct_count(), 1);
    }
}
