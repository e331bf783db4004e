//! What the leaderboard panel shows.

use super::types::LeaderboardEntry;

pub const EMPTY_MESSAGE: &str = "No scores yet. Be the first!";
pub const ERROR_MESSAGE: &str = "Error loading leaderboard";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LeaderboardView {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(Vec<LeaderboardEntry>),
    Failed,
}

impl LeaderboardView {
    /// Top score among loaded entries, if any.
    pub fn leader_score(&self) -> Option<u32> {
        match self {
            LeaderboardView::Loaded(entries) => entries.iter().map(|e| e.score).max(),
            LeaderboardView::Idle | LeaderboardView::Loading | LeaderboardView::Failed => None,
        }
    }

    /// Rows for display: a header plus one line per entry, or a single
    /// placeholder line.
    pub fn lines(&self, max_rows: usize) -> Vec<String> {
        match self {
            LeaderboardView::Idle | LeaderboardView::Loading => vec![LOADING_MESSAGE.to_string()],
            LeaderboardView::Failed => vec![ERROR_MESSAGE.to_string()],
            LeaderboardView::Loaded(entries) if entries.is_empty() => {
                vec![EMPTY_MESSAGE.to_string()]
            }
            LeaderboardView::Loaded(entries) => format_table(entries, max_rows),
        }
    }
}

/// Format entries as an aligned rank / name / score / date table.
pub fn format_table(entries: &[LeaderboardEntry], max_rows: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len().min(max_rows) + 1);
    lines.push(format!("{:>3}  {:<10}  {:>6}  {}", "#", "Name", "Score", "Date"));
    for (index, entry) in entries.iter().take(max_rows).enumerate() {
        lines.push(format!(
            "{:>3}  {:<10}  {:>6}  {}",
            index + 1,
            truncate(&entry.name, 10),
            entry.score,
            entry.display_date()
        ));
    }
    lines
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        s.chars().take(max - 1).chain(std::iter::once('…')).collect()
    } else {
        s.to_string()
    }
}
