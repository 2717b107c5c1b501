//! Highest level reached per game and the currently selected game.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::GameType;

/// Level every game starts at.
pub const STARTING_LEVEL: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    #[serde(default)]
    pub current_game: Option<GameType>,
    #[serde(default = "starting_levels")]
    pub levels: BTreeMap<GameType, u32>,
}

fn starting_levels() -> BTreeMap<GameType, u32> {
    GameType::ALL
        .iter()
        .map(|&game| (game, STARTING_LEVEL))
        .collect()
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            current_game: None,
            levels: starting_levels(),
        }
    }
}

impl LevelProgress {
    pub fn set_current_game(&mut self, game: GameType) {
        self.current_game = Some(game);
    }

    /// Records a level reached. Levels never go down; returns the stored level.
    pub fn update(&mut self, game: GameType, level: u32) -> u32 {
        let entry = self.levels.entry(game).or_insert(STARTING_LEVEL);
        *entry = (*entry).max(level);
        *entry
    }

    pub fn level(&self, game: GameType) -> u32 {
        self.levels.get(&game).copied().unwrap_or(STARTING_LEVEL)
    }

    /// Puts every game back to the starting level. The current game is kept.
    pub fn reset(&mut self) {
        self.levels = starting_levels();
    }
}
