//! Knowledge gap analysis over recent session history.

use serde::{Deserialize, Serialize};

use crate::game::GameType;
use crate::history::SessionHistory;
use crate::limits::{GAP_HIGH_THRESHOLD, GAP_MEDIUM_THRESHOLD, GAP_MIN_SESSIONS, GAP_WINDOW_SESSIONS};
use crate::session::mean_accuracy;

/// How much practice a skill needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Reserved; the analyzer does not emit it.
    Low,
    Medium,
    High,
}

/// A weak skill derived from session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeGap {
    pub skill: GameType,
    pub difficulty: Difficulty,
    pub game_type: GameType,
    pub description: String,
}

impl KnowledgeGap {
    fn new(game: GameType, difficulty: Difficulty) -> Self {
        let description = match difficulty {
            Difficulty::High => format!("Needs more practice with {}", game),
            Difficulty::Medium | Difficulty::Low => format!("Improving at {}", game),
        };
        Self {
            skill: game,
            difficulty,
            game_type: game,
            description,
        }
    }
}

/// Classifies a mean accuracy. `None` means no gap.
pub fn classify(mean: f64) -> Option<Difficulty> {
    if mean < GAP_HIGH_THRESHOLD {
        Some(Difficulty::High)
    } else if mean < GAP_MEDIUM_THRESHOLD {
        Some(Difficulty::Medium)
    } else {
        None
    }
}

/// Recomputes the full gap list, one entry at most per game, in enumeration order.
pub fn analyze(history: &SessionHistory) -> Vec<KnowledgeGap> {
    GameType::ALL
        .iter()
        .filter_map(|&game| {
            let recent = history.recent_for_game(game, GAP_WINDOW_SESSIONS);
            if recent.len() < GAP_MIN_SESSIONS {
                return None;
            }
            let mean = mean_accuracy(recent)?;
            classify(mean).map(|difficulty| KnowledgeGap::new(game, difficulty))
        })
        .collect()
}
