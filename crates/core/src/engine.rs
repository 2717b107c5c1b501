//! The tutor engine: one instance owns session recording, derived gaps, and
//! level progress, and writes the full state through a [`StateStore`] after
//! every transition.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use telemetry::{health, metrics};
use tracing::{debug, error, info, warn};

use crate::celebration::{select_celebration, Performance};
use crate::clock::Clock;
use crate::error::Result;
use crate::gaps::{self, KnowledgeGap};
use crate::game::GameType;
use crate::hints::select_hint;
use crate::history::SessionHistory;
use crate::levels::LevelProgress;
use crate::recommendation::{next_game, Suggestion};
use crate::report::ProgressReport;
use crate::session::{Session, SessionRecorder};
use crate::store::{StateStore, TutorState};

/// Builds the random source for hint and celebration picks.
///
/// A fixed seed makes selection reproducible.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Adaptive tutor engine.
///
/// Not synchronized: callers that share it across threads must serialize
/// access themselves.
pub struct TutorEngine {
    recorder: SessionRecorder,
    history: SessionHistory,
    gaps: Vec<KnowledgeGap>,
    levels: LevelProgress,
    store: Arc<dyn StateStore>,
    clock: Arc<dyn Clock>,
    rng: StdRng,
}

impl TutorEngine {
    /// Loads persisted state and re-derives knowledge gaps from it.
    pub fn load(store: Arc<dyn StateStore>, clock: Arc<dyn Clock>, rng: StdRng) -> Result<Self> {
        let state = store.load()?.unwrap_or_default();
        let history = SessionHistory::from_sessions(state.sessions);
        let gaps = gaps::analyze(&history);

        if gaps != state.knowledge_gaps {
            warn!(
                cached = state.knowledge_gaps.len(),
                derived = gaps.len(),
                "Persisted knowledge gaps differ from session history, using derived gaps"
            );
        }

        let active = state.current_session.is_some();
        metrics().active_sessions.set(u64::from(active));
        info!(
            sessions = history.len(),
            gaps = gaps.len(),
            active_session = active,
            "Tutor state loaded"
        );

        Ok(Self {
            recorder: SessionRecorder::with_active(state.current_session),
            history,
            gaps,
            levels: state.levels,
            store,
            clock,
            rng,
        })
    }

    // === Session lifecycle ===

    /// Opens a session for `game`. An unfinished session is dropped without
    /// being recorded.
    pub fn start_session(&mut self, game: GameType) -> Result<()> {
        let now = self.clock.now_millis();
        if let Some(discarded) = self.recorder.start(game, now) {
            warn!(
                game = %discarded.game_type,
                attempts = discarded.attempts,
                "Discarding unfinished session"
            );
            metrics().sessions_discarded.inc();
        }

        metrics().sessions_started.inc();
        metrics().active_sessions.set(1);
        info!(game = %game, "Session started");
        self.persist()
    }

    /// Records one answer. Returns false, without saving, when no session is open.
    pub fn record_attempt(&mut self, correct: bool, mistake_type: Option<String>) -> Result<bool> {
        if !self.recorder.record(correct, mistake_type) {
            debug!("Attempt ignored, no active session");
            metrics().attempts_ignored.inc();
            return Ok(false);
        }

        metrics().attempts_recorded.inc();
        if let Some(session) = self.recorder.active() {
            debug!(
                game = %session.game_type,
                attempts = session.attempts,
                correct_answers = session.correct_answers,
                "Attempt recorded"
            );
        }
        self.persist()?;
        Ok(true)
    }

    /// Finalizes the open session into history and recomputes gaps.
    pub fn end_session(&mut self) -> Result<Option<Session>> {
        let now = self.clock.now_millis();
        let Some(session) = self.recorder.end(now) else {
            debug!("End ignored, no active session");
            return Ok(None);
        };

        metrics().sessions_completed.inc();
        metrics().active_sessions.set(0);
        metrics()
            .session_duration_secs
            .observe((session.time_spent / 1000) as u64);
        info!(
            game = %session.game_type,
            attempts = session.attempts,
            correct_answers = session.correct_answers,
            time_spent_ms = session.time_spent,
            "Session completed"
        );

        self.history.push(session.clone());
        self.refresh_gaps();
        self.persist()?;
        Ok(Some(session))
    }

    /// Recomputes knowledge gaps from history and saves them.
    pub fn analyze_knowledge_gaps(&mut self) -> Result<&[KnowledgeGap]> {
        self.refresh_gaps();
        self.persist()?;
        Ok(&self.gaps)
    }

    fn refresh_gaps(&mut self) {
        self.gaps = gaps::analyze(&self.history);
        debug!(gaps = self.gaps.len(), "Knowledge gaps recomputed");
    }

    // === Personalization ===

    /// Hint for `game`. `context` comes from the game and is only logged.
    pub fn personalized_hint(&mut self, game: GameType, context: &serde_json::Value) -> &'static str {
        let hint = select_hint(&self.history, game, &mut self.rng);
        metrics().hints_served.inc();
        debug!(game = %game, context = %context, hint, "Hint selected");
        hint
    }

    /// Celebration for a finished round, or `None` when the round was empty.
    pub fn celebration_message(
        &mut self,
        game: GameType,
        performance: Performance,
    ) -> Option<&'static str> {
        let message = select_celebration(performance, &mut self.rng)?;
        metrics().celebrations_served.inc();
        debug!(
            game = %game,
            correct = performance.correct,
            total = performance.total,
            "Celebration selected"
        );
        Some(message)
    }

    pub fn next_game_suggestion(&self) -> GameType {
        let game = next_game(&self.gaps, &self.history);
        metrics().suggestions_served.inc();
        game
    }

    /// Next game with display details and the reason it was picked.
    pub fn suggestion(&self) -> Suggestion {
        Suggestion::new(self.next_game_suggestion(), &self.gaps)
    }

    pub fn progress_report(&self) -> ProgressReport {
        metrics().reports_generated.inc();
        ProgressReport::generate(&self.history, self.clock.now_millis())
    }

    /// Caregiver summary: the report plus the current focus areas.
    pub fn progress_summary(&self) -> Vec<String> {
        self.progress_report().summary_lines(&self.gaps)
    }

    // === Level progress ===

    pub fn set_current_game(&mut self, game: GameType) -> Result<()> {
        self.levels.set_current_game(game);
        self.persist()
    }

    /// Stores `level` for `game` if it is higher than the current one.
    pub fn update_level(&mut self, game: GameType, level: u32) -> Result<u32> {
        let stored = self.levels.update(game, level);
        debug!(game = %game, level = stored, "Level updated");
        self.persist()?;
        Ok(stored)
    }

    pub fn reset_levels(&mut self) -> Result<()> {
        self.levels.reset();
        info!("Level progress reset");
        self.persist()
    }

    // === Queries ===

    pub fn knowledge_gaps(&self) -> &[KnowledgeGap] {
        &self.gaps
    }

    pub fn sessions(&self) -> &[Session] {
        self.history.as_slice()
    }

    pub fn active_session(&self) -> Option<&Session> {
        self.recorder.active()
    }

    pub fn levels(&self) -> &LevelProgress {
        &self.levels
    }

    /// The record written to the store.
    pub fn snapshot(&self) -> TutorState {
        TutorState {
            sessions: self.history.as_slice().to_vec(),
            knowledge_gaps: self.gaps.clone(),
            current_session: self.recorder.active().cloned(),
            levels: self.levels.clone(),
        }
    }

    fn persist(&self) -> Result<()> {
        match self.store.save(&self.snapshot()) {
            Ok(()) => {
                metrics().store_saves.inc();
                health().storage.set_healthy();
                Ok(())
            }
            Err(e) => {
                metrics().store_save_errors.inc();
                health().storage.set_unhealthy(e.to_string());
                error!(error = %e, "Failed to save tutor state");
                Err(e)
            }
        }
    }
}
