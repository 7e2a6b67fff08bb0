use anyhow::Result;
use static_assertions::*;

use four_in_a_row::{Board, Player, SERIES_LEN};

use crate::config::Layout;

const PRESET_ROWS: usize = 6;
const PRESET_COLUMNS: usize = 7;

// the preset must leave room for a line of four in every direction
const_assert!(PRESET_ROWS >= SERIES_LEN && PRESET_COLUMNS >= SERIES_LEN);

/// Mid-game position with twelve open cells, top row first
const PRESET: [&str; PRESET_ROWS] = [
    " O    X",
    "XX   OO",
    "OX  OXO",
    "XX  XOO",
    "OOXOXXX",
    "OXOXXOO",
];

const SMALL_SIZE: usize = 4;

/// Builds the starting board for a layout, Player One to move
pub fn starting_board(layout: Layout) -> Result<Board> {
    match layout {
        Layout::Preset => Board::parse(&PRESET, Player::PlayerOne),
        Layout::Small => Ok(Board::empty(SMALL_SIZE, SMALL_SIZE, Player::PlayerOne)),
    }
}
