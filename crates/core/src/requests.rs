//! Request bodies accepted from the mini-games.
//!
//! Field limits mirror `limits.rs`; the derive macro needs literals.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::celebration::Performance;
use crate::game::GameType;

/// Open a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub game_type: GameType,
}

/// One answer in the open session.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttemptRequest {
    pub correct: bool,
    /// Mistake tag (max 64 chars). Blank tags are recorded as no tag.
    #[validate(length(max = 64))]
    pub mistake_type: Option<String>,
}

/// Ask for a hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub game_type: GameType,
    /// Game-specific context, opaque to the tutor
    #[serde(default)]
    pub context: serde_json::Value,
}

/// Ask for a celebration after a round.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CelebrationRequest {
    pub game_type: GameType,
    #[validate(range(max = 10000))]
    pub correct: u32,
    #[validate(range(max = 10000))]
    pub total: u32,
}

impl CelebrationRequest {
    pub fn performance(&self) -> Performance {
        Performance::new(self.correct, self.total)
    }
}

/// Select the current game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameRequest {
    pub game_type: GameType,
}

/// Report a level reached.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpdateRequest {
    pub game_type: GameType,
    #[validate(range(min = 1, max = 100))]
    pub level: u32,
}
