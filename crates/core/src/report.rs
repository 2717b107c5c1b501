//! Weekly progress report for caregivers.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::game::GameType;
use crate::gaps::{Difficulty, KnowledgeGap};
use crate::history::SessionHistory;
use crate::limits::{IMPROVEMENT_THRESHOLD, REPORT_WINDOW_HOURS, STRENGTH_THRESHOLD};
use crate::session::Session;

/// Per-game totals inside the report window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBreakdown {
    pub sessions: usize,
    pub accuracy: f64,
    pub time_spent: i64,
}

/// Trailing-window summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub total_sessions: usize,
    /// Milliseconds
    pub total_time_spent: i64,
    pub average_accuracy: f64,
    pub game_breakdown: BTreeMap<GameType, GameBreakdown>,
    pub strengths: Vec<GameType>,
    pub improvements: Vec<GameType>,
}

/// Mean accuracy over sessions that had at least one attempt; 0 when none did.
fn reported_accuracy<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> f64 {
    let (sum, count) = sessions
        .into_iter()
        .filter_map(Session::measured_accuracy)
        .fold((0.0, 0usize), |(sum, count), acc| (sum + acc, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

impl ProgressReport {
    /// Builds the report for the window ending at `now_millis`.
    pub fn generate(history: &SessionHistory, now_millis: i64) -> Self {
        let cutoff = now_millis - Duration::hours(REPORT_WINDOW_HOURS).num_milliseconds();
        let recent: Vec<&Session> = history.since(cutoff).collect();

        let mut game_breakdown = BTreeMap::new();
        for game in GameType::ALL {
            let sessions: Vec<&Session> = recent
                .iter()
                .copied()
                .filter(|s| s.game_type == game)
                .collect();
            if sessions.is_empty() {
                continue;
            }
            game_breakdown.insert(
                game,
                GameBreakdown {
                    sessions: sessions.len(),
                    accuracy: reported_accuracy(sessions.iter().copied()),
                    time_spent: sessions.iter().map(|s| s.time_spent).sum(),
                },
            );
        }

        let strengths = game_breakdown
            .iter()
            .filter(|(_, b)| b.accuracy >= STRENGTH_THRESHOLD)
            .map(|(&game, _)| game)
            .collect();
        let improvements = game_breakdown
            .iter()
            .filter(|(_, b)| b.accuracy < IMPROVEMENT_THRESHOLD)
            .map(|(&game, _)| game)
            .collect();

        Self {
            total_sessions: recent.len(),
            total_time_spent: recent.iter().map(|s| s.time_spent).sum(),
            average_accuracy: reported_accuracy(recent.iter().copied()),
            game_breakdown,
            strengths,
            improvements,
        }
    }

    /// Plain-text summary for caregivers, ending with the current focus areas.
    pub fn summary_lines(&self, gaps: &[KnowledgeGap]) -> Vec<String> {
        let mut lines = vec![
            format!("Games played: {}", self.total_sessions),
            format!("Time spent: {}", format_minutes(self.total_time_spent)),
            format!("Accuracy: {}", format_percent(self.average_accuracy)),
        ];
        for (game, breakdown) in &self.game_breakdown {
            lines.push(format!(
                "{} {}: {} sessions, {}, {}",
                game.emoji(),
                game.display_name(),
                breakdown.sessions,
                format_percent(breakdown.accuracy),
                format_minutes(breakdown.time_spent)
            ));
        }
        if !self.strengths.is_empty() {
            lines.push(format!("Strengths: {}", join_names(&self.strengths)));
        }
        if !self.improvements.is_empty() {
            lines.push(format!("Keep practicing: {}", join_names(&self.improvements)));
        }
        if !gaps.is_empty() {
            lines.push("Focus on:".to_string());
            for gap in gaps {
                let marker = match gap.difficulty {
                    Difficulty::High => "⚠️",
                    Difficulty::Medium | Difficulty::Low => "ℹ️",
                };
                lines.push(format!("  {} {}", marker, gap.description));
            }
        }
        lines
    }
}

fn join_names(games: &[GameType]) -> String {
    games
        .iter()
        .map(|g| g.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whole minutes, rounded down: `"12 min"`.
pub fn format_minutes(millis: i64) -> String {
    format!("{} min", millis / 60_000)
}

/// Rounded percentage: `"83%"`.
pub fn format_percent(accuracy: f64) -> String {
    format!("{}%", (accuracy * 100.0).round() as i64)
}
