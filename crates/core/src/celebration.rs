//! Congratulation messages keyed to round performance.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::limits::CELEBRATION_GOOD_THRESHOLD;

const PERFECT: &[&str] = &[
    "🌟 WOW! You're a superstar! Every answer was perfect!",
    "🎉 AMAZING! You got them all right! You're so smart!",
    "✨ INCREDIBLE! Perfect score! You're a learning champion!",
];

const GOOD: &[&str] = &[
    "🎈 Great job! You're getting really good at this!",
    "👏 Well done! You're learning so fast!",
    "🌈 Fantastic! Keep up the awesome work!",
];

const IMPROVING: &[&str] = &[
    "🌱 You're getting better! Keep trying!",
    "💪 Good effort! Practice makes perfect!",
    "🎯 Nice try! You're learning something new!",
];

const FALLBACK: &str = "🎉 Great playing!";

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    pub correct: u32,
    pub total: u32,
}

impl Performance {
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }

    /// Round accuracy, or `None` for an empty round. `correct` is capped at `total`.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct.min(self.total) as f64 / self.total as f64)
        }
    }
}

/// Celebration pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelebrationTier {
    Perfect,
    Good,
    Improving,
}

impl CelebrationTier {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy >= 1.0 {
            Self::Perfect
        } else if accuracy >= CELEBRATION_GOOD_THRESHOLD {
            Self::Good
        } else {
            Self::Improving
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            Self::Perfect => PERFECT,
            Self::Good => GOOD,
            Self::Improving => IMPROVING,
        }
    }
}

/// Picks a celebration for the round, or `None` when nothing was played.
pub fn select_celebration<R: Rng + ?Sized>(
    performance: Performance,
    rng: &mut R,
) -> Option<&'static str> {
    let tier = CelebrationTier::from_accuracy(performance.accuracy()?);
    Some(tier.messages().choose(rng).copied().unwrap_or(FALLBACK))
}
