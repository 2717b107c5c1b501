//! Game catalog: the closed set of mini-games and their hint content.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A mini-game the tutor tracks.
///
/// Declaration order is the fixed enumeration order used for every
/// tie-break in the analyzers, so `Ord` follows it as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Shapes,
    Counting,
    Colors,
    Patterns,
    Memory,
    Matching,
}

impl GameType {
    /// Every game, in enumeration order.
    pub const ALL: [GameType; 6] = [
        Self::Shapes,
        Self::Counting,
        Self::Colors,
        Self::Patterns,
        Self::Memory,
        Self::Matching,
    ];

    /// Wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shapes => "shapes",
            Self::Counting => "counting",
            Self::Colors => "colors",
            Self::Patterns => "patterns",
            Self::Memory => "memory",
            Self::Matching => "matching",
        }
    }

    /// Name shown to the child.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Shapes => "Shape Sorting",
            Self::Counting => "Count & Fun",
            Self::Colors => "Color Match",
            Self::Patterns => "Pattern Fun",
            Self::Memory => "Memory Game",
            Self::Matching => "Match Pairs",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Shapes => "🔵",
            Self::Counting => "🐱",
            Self::Colors => "🌈",
            Self::Patterns => "🔄",
            Self::Memory => "🧠",
            Self::Matching => "🤝",
        }
    }

    /// Hints for this game, most basic first.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::Shapes => &[
                "Look at the shape carefully - is it round like a ball?",
                "Count the sides! A triangle has 3, a square has 4!",
                "Try touching the shape first, then find its home!",
                "Look for the same shape in the bottom row!",
            ],
            Self::Counting => &[
                "Point to each animal as you count: 1, 2, 3...",
                "Start from the left and count slowly!",
                "Use your fingers to help count!",
                "Count out loud - it helps you remember!",
            ],
            Self::Colors => &[
                "Look at the color name at the top!",
                "Red is like an apple, blue is like the sky!",
                "Take your time to look at each color!",
                "Say the color name out loud!",
            ],
            Self::Patterns => &[
                "Look at what comes first, then what comes next!",
                "Patterns repeat - find what's missing!",
                "Try saying the pattern out loud!",
                "Look for the shape that comes next in order!",
            ],
            Self::Memory => &[
                "Try to remember where you saw each picture!",
                "Make up a story about what you see!",
                "Focus on one area at a time!",
                "Take a deep breath and think carefully!",
            ],
            Self::Matching => &[
                "Think about what goes together!",
                "A cat and dog are both animals!",
                "Look for things that are similar!",
                "What do these items have in common?",
            ],
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
