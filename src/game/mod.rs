//! N-by-N tic-tac-toe engine: domain types, line generation, rules,
//! and the session state machine.

mod history;
mod lines;
mod rules;
mod session;
mod types;

pub use history::{History, HistoryEntry};
pub use lines::{Line, LineSet, line_set};
pub use rules::{Outcome, detect, is_full, scan_lines};
pub use session::{GameSession, MoveRecord};
pub use types::{Board, BoardSize, Cell, GameStatus, Mark};
