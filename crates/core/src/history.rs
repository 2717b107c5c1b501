//! Append-only history of finalized sessions.

use crate::game::GameType;
use crate::session::Session;

/// Finalized sessions in the order they ended.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionHistory {
    sessions: Vec<Session>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn push(&mut self, session: Session) {
        self.sessions.push(session);
    }

    pub fn as_slice(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions for one game, oldest first.
    pub fn for_game(&self, game: GameType) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.game_type == game)
    }

    /// The last `n` sessions for one game, oldest first.
    pub fn recent_for_game(&self, game: GameType, n: usize) -> Vec<&Session> {
        let mut recent: Vec<&Session> = self
            .sessions
            .iter()
            .rev()
            .filter(|s| s.game_type == game)
            .take(n)
            .collect();
        recent.reverse();
        recent
    }

    pub fn count_for_game(&self, game: GameType) -> usize {
        self.for_game(game).count()
    }

    /// Sessions created strictly after `cutoff_millis`.
    pub fn since(&self, cutoff_millis: i64) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.timestamp > cutoff_millis)
    }
}
