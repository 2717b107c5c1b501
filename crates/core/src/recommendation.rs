//! Next-game recommendation.

use serde::{Deserialize, Serialize};

use crate::gaps::{Difficulty, KnowledgeGap};
use crate::game::GameType;
use crate::history::SessionHistory;

/// Picks the next game: the first high gap, otherwise the least played game.
pub fn next_game(gaps: &[KnowledgeGap], history: &SessionHistory) -> GameType {
    if let Some(gap) = gaps.iter().find(|g| g.difficulty == Difficulty::High) {
        return gap.game_type;
    }

    // min_by_key keeps the first minimum, which is enumeration order
    GameType::ALL
        .iter()
        .copied()
        .min_by_key(|&game| history.count_for_game(game))
        .unwrap_or(GameType::ALL[0])
}

/// A recommendation ready to show to the child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub game_type: GameType,
    pub display_name: String,
    pub emoji: String,
    pub reason: String,
}

impl Suggestion {
    pub fn new(game: GameType, gaps: &[KnowledgeGap]) -> Self {
        let reason = match gaps.iter().find(|g| g.game_type == game).map(|g| g.difficulty) {
            Some(Difficulty::High) => "You could use some practice with this!",
            Some(Difficulty::Medium) | Some(Difficulty::Low) => "This will help you improve!",
            None => "This looks fun to try!",
        };
        Self {
            game_type: game,
            display_name: game.display_name().to_string(),
            emoji: game.emoji().to_string(),
            reason: reason.to_string(),
        }
    }
}
