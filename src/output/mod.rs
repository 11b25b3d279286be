//! Terminal output formatting
//!
//! Presentation only: verdict colours, board rows, and the leaderboard table.
//! The game rules never depend on anything in here.

pub mod board;
pub mod style;
pub mod table;

pub use board::{emoji_summary, render_board, reveal_latest_row, write_board};
pub use style::{error_text, rules_line, styled_letter};
pub use table::format_leaderboard;
