//! An agent for playing the board game 'four in a row' on a gravity-bound grid
//!
//! This agent searches the complete game tree below a position to find the
//! move that is best for the player to move, assuming perfect play from both sides.
//!
//! # Basic Usage
//!
//! ```
//! use four_in_a_row::{board::{Board, Player}, search::{SearchEngine, WIN}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::parse(
//!     &[
//!         " OO ",
//!         "XXX ",
//!         "OOXO",
//!         "XOOO",
//!     ],
//!     Player::PlayerOne,
//! )?;
//! let engine = SearchEngine::new(Player::PlayerOne);
//! let best = engine.best_move(&board).unwrap();
//!
//! assert_eq!(engine.utility(&board), WIN);
//! assert_eq!(best.last_move(), Some((1, 3)));
//!# Ok(())
//!# }
//! ```

pub use anyhow;

pub mod board;

pub mod search;


pub use board::{Board, Cell, MoveError, Player, Position};
pub use search::SearchEngine;

/// The number of pieces in a line needed to win
pub const SERIES_LEN: usize = 4;
