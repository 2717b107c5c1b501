//! Hint selection tuned to recent performance.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game::GameType;
use crate::history::SessionHistory;
use crate::limits::{HINT_IMPROVING_THRESHOLD, HINT_STRUGGLING_THRESHOLD, HINT_WINDOW_SESSIONS};
use crate::session::mean_accuracy;

/// Graduated hint level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTier {
    /// Recent accuracy below 50%: most basic hint.
    Struggling,
    /// Recent accuracy in [50%, 80%): second hint.
    Improving,
    /// Doing well: any hint.
    Confident,
}

impl HintTier {
    pub fn from_accuracy(mean: f64) -> Self {
        if mean < HINT_STRUGGLING_THRESHOLD {
            Self::Struggling
        } else if mean < HINT_IMPROVING_THRESHOLD {
            Self::Improving
        } else {
            Self::Confident
        }
    }

    /// Generic encouragement when the game has no hint for this tier.
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::Struggling => "Take your time and try again!",
            Self::Improving => "You're doing great! Keep going!",
            Self::Confident => "You've got this!",
        }
    }
}

/// Tier for a game based on its last few sessions. No history means no struggle.
pub fn hint_tier(history: &SessionHistory, game: GameType) -> HintTier {
    let recent = history.recent_for_game(game, HINT_WINDOW_SESSIONS);
    HintTier::from_accuracy(mean_accuracy(recent).unwrap_or(1.0))
}

/// Picks a hint from `hints` for the given tier.
pub fn pick_hint<R: Rng + ?Sized>(
    hints: &[&'static str],
    tier: HintTier,
    rng: &mut R,
) -> &'static str {
    let picked = match tier {
        HintTier::Struggling => hints.first(),
        HintTier::Improving => hints.get(1),
        HintTier::Confident => hints.choose(rng),
    };
    picked.copied().unwrap_or_else(|| tier.fallback())
}

/// Selects a personalized hint for `game`.
pub fn select_hint<R: Rng + ?Sized>(
    history: &SessionHistory,
    game: GameType,
    rng: &mut R,
) -> &'static str {
    pick_hint(game.hints(), hint_tier(history, game), rng)
}
