//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), shared by the engine and
//! every AI. Rules are separated from board storage so the search can call
//! them on its scratch board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line, winning_line};
