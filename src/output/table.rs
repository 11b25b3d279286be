//! Leaderboard table formatting

use crate::game::LeaderboardEntry;

/// Spaces between table columns
const COLUMN_GAP: usize = 5;

/// Format entries (already sorted) as a RANK / NAME / SCORE table
///
/// The score column is right-aligned; the table is framed above and below by
/// a border of `*` exactly as wide as the table.
#[must_use]
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> Vec<String> {
    let rank_width = (entries.len() + 1).to_string().len().max("RANK".len());
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let score_width = entries
        .iter()
        .map(|e| e.score.to_string().len())
        .max()
        .unwrap_or(0)
        .max("SCORE".len());

    let row = |rank: &str, name: &str, score: &str| {
        format!(
            "{rank:<rw$}{name:<nw$}{score:>sw$}",
            rw = rank_width + COLUMN_GAP,
            nw = name_width + COLUMN_GAP,
            sw = score_width,
        )
    };
    let border = "*".repeat(rank_width + name_width + score_width + 2 * COLUMN_GAP);

    let mut lines = vec![row("RANK", "NAME", "SCORE"), border.clone()];
    for (i, entry) in entries.iter().enumerate() {
        lines.push(row(
            &(i + 1).to_string(),
            &entry.name,
            &entry.score.to_string(),
        ));
    }
    lines.push(String::new());
    lines.push(border);
    lines
}
