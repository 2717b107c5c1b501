//! Play session types and the single-slot session recorder.

use serde::{Deserialize, Serialize};

use crate::game::GameType;

/// One play round for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Game being played
    pub game_type: GameType,
    /// Answers given
    pub attempts: u32,
    /// Answers that were correct (never above `attempts`)
    pub correct_answers: u32,
    /// Round duration in milliseconds, set when the session is finalized
    pub time_spent: i64,
    /// Mistake tags in the order they happened
    pub mistake_patterns: Vec<String>,
    /// Creation time (epoch millis)
    pub timestamp: i64,
}

impl Session {
    /// Creates a new, empty session.
    pub fn new(game_type: GameType, now_millis: i64) -> Self {
        Self {
            game_type,
            attempts: 0,
            correct_answers: 0,
            time_spent: 0,
            mistake_patterns: Vec::new(),
            timestamp: now_millis,
        }
    }

    /// Updates the session with one answer. A blank tag counts as no tag.
    pub fn record_attempt(&mut self, correct: bool, mistake_type: Option<String>) {
        self.attempts += 1;
        if correct {
            self.correct_answers += 1;
        }
        if let Some(tag) = mistake_type.filter(|t| !t.trim().is_empty()) {
            self.mistake_patterns.push(tag);
        }
    }

    /// Stamps the duration. Clock skew never produces a negative duration.
    pub fn finalize(&mut self, now_millis: i64) {
        self.time_spent = (now_millis - self.timestamp).max(0);
    }

    /// Fraction correct, with an empty session counted as fully mastered.
    pub fn accuracy(&self) -> f64 {
        self.measured_accuracy().unwrap_or(1.0)
    }

    /// Fraction correct, or `None` when nothing was attempted.
    pub fn measured_accuracy(&self) -> Option<f64> {
        if self.attempts == 0 {
            None
        } else {
            Some(self.correct_answers as f64 / self.attempts as f64)
        }
    }
}

/// Mean of `accuracy()` over the given sessions; `None` for an empty slice.
pub fn mean_accuracy<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> Option<f64> {
    let (sum, count) = sessions
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), s| (sum + s.accuracy(), count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Holds at most one in-progress session.
#[derive(Debug, Clone, Default)]
pub struct SessionRecorder {
    active: Option<Session>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a recorder around a previously active session.
    pub fn with_active(active: Option<Session>) -> Self {
        Self { active }
    }

    /// Opens a fresh session, returning the unfinalized one it replaced.
    pub fn start(&mut self, game_type: GameType, now_millis: i64) -> Option<Session> {
        self.active.replace(Session::new(game_type, now_millis))
    }

    /// Records an answer. Returns false when no session is active.
    pub fn record(&mut self, correct: bool, mistake_type: Option<String>) -> bool {
        match self.active.as_mut() {
            Some(session) => {
                session.record_attempt(correct, mistake_type);
                true
            }
            None => false,
        }
    }

    /// Finalizes and hands back the active session, leaving the slot empty.
    pub fn end(&mut self, now_millis: i64) -> Option<Session> {
        let mut session = self.active.take()?;
        session.finalize(now_millis);
        Some(session)
    }

    pub fn active(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}
