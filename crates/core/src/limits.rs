//! Analysis windows, thresholds, and input limits for the tutor engine.
//!
//! The analyzers read these instead of inlining literals. The `#[validate]`
//! derive macro requires literal values in attributes, so the request limits
//! are duplicated in `requests.rs`. Keep both in sync when modifying.

// === Knowledge Gap Analysis ===

/// Most recent sessions per game considered by the gap analyzer.
pub const GAP_WINDOW_SESSIONS: usize = 5;

/// Minimum sessions per game before a gap can be reported.
pub const GAP_MIN_SESSIONS: usize = 2;

/// Mean accuracy below this is a high-difficulty gap.
pub const GAP_HIGH_THRESHOLD: f64 = 0.6;

/// Mean accuracy below this (and at or above the high threshold) is a medium gap.
pub const GAP_MEDIUM_THRESHOLD: f64 = 0.8;

// === Hint Selection ===

/// Most recent sessions per game considered by the hint selector.
pub const HINT_WINDOW_SESSIONS: usize = 3;

/// Mean accuracy below this gets the most basic hint.
pub const HINT_STRUGGLING_THRESHOLD: f64 = 0.5;

/// Mean accuracy below this gets the second hint; at or above, a random one.
pub const HINT_IMPROVING_THRESHOLD: f64 = 0.8;

// === Celebration ===

/// Round accuracy at or above this (but below 1) draws from the "good" pool.
pub const CELEBRATION_GOOD_THRESHOLD: f64 = 0.8;

// === Progress Report ===

/// Trailing report window (7 days).
pub const REPORT_WINDOW_HOURS: i64 = 7 * 24;

/// Per-game accuracy at or above this is a strength.
pub const STRENGTH_THRESHOLD: f64 = 0.8;

/// Per-game accuracy below this needs improvement.
pub const IMPROVEMENT_THRESHOLD: f64 = 0.6;

// === Request Limits ===

/// Mistake tag max length (chars).
pub const MAX_MISTAKE_TAG_LEN: usize = 64;

/// Highest level a game can report.
pub const MAX_LEVEL: u32 = 100;

/// Largest round size accepted for a celebration.
pub const MAX_ROUND_TOTAL: u32 = 10_000;
