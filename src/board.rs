use anyhow::{anyhow, Result};

use std::fmt;

use crate::SERIES_LEN;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
            Cell::Empty => None,
        }
    }

    /// The marker used by [`Board::parse`] and the `Display` impl
    pub fn marker(&self) -> char {
        match self {
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
            Cell::Empty => ' ',
        }
    }

    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'X' => Some(Cell::PlayerOne),
            'O' => Some(Cell::PlayerTwo),
            ' ' | '.' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// How a position stands, as seen by the search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Position {
    Won(Player),
    Drawn,
    Open,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },
    #[error("column {column} is outside a board of {columns} columns")]
    InvalidColumn { column: usize, columns: usize },
}

/// A single four-in-a-row position
///
/// # Notes
/// Cells are stored row-major with row 0 at the top of the grid, so the landing
/// row of a column is the highest-numbered empty row. Every column obeys gravity:
/// no empty cell sits below an occupied one.
///
/// `depth` and `sibling_index` locate a board within a search tree and are
/// only used for diagnostics.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
    mover: Player,
    depth: usize,
    sibling_index: usize,
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Creates a board from a row-major grid, top row first
    ///
    /// # Panics
    /// Panics if the grid is ragged, smaller than 4x4, or violates gravity.
    /// Use [`Board::parse`] for input that may be malformed.
    pub fn new(grid: Vec<Vec<Cell>>, mover: Player) -> Self {
        match Self::from_grid(grid, mover) {
            Ok(board) => board,
            Err(err) => panic!("malformed board: {}", err),
        }
    }

    /// Creates an empty board of the given dimensions
    pub fn empty(rows: usize, columns: usize, mover: Player) -> Self {
        Self::new(vec![vec![Cell::Empty; columns]; rows], mover)
    }

    /// Parses a board from one string per row, top row first
    ///
    /// `X` marks Player One, `O` Player Two, and a space or `.` an empty cell.
    pub fn parse<S: AsRef<str>>(rows: &[S], mover: Player) -> Result<Self> {
        let mut grid = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let mut cells = Vec::new();
            for marker in row.as_ref().chars() {
                match Cell::from_marker(marker) {
                    Some(cell) => cells.push(cell),
                    None => {
                        return Err(anyhow!(
                            "could not parse '{}' in row {} as a cell",
                            marker,
                            row_index
                        ))
                    }
                }
            }
            grid.push(cells);
        }
        Self::from_grid(grid, mover)
    }

    fn from_grid(grid: Vec<Vec<Cell>>, mover: Player) -> Result<Self> {
        let rows = grid.len();
        let columns = grid.first().map_or(0, |row| row.len());
        if rows < SERIES_LEN || columns < SERIES_LEN {
            return Err(anyhow!(
                "board is {}x{}, both dimensions must be at least {}",
                rows,
                columns,
                SERIES_LEN
            ));
        }
        if let Some(row) = grid.iter().position(|row| row.len() != columns) {
            return Err(anyhow!(
                "row {} has {} cells, expected {}",
                row,
                grid[row].len(),
                columns
            ));
        }

        let board = Self {
            cells: grid.into_iter().flatten().collect(),
            rows,
            columns,
            mover,
            depth: 0,
            sibling_index: 0,
            last_move: None,
        };

        for column in 0..columns {
            for row in 1..rows {
                if !board.cell(row - 1, column).is_empty() && board.cell(row, column).is_empty() {
                    return Err(anyhow!(
                        "column {} has a floating piece in row {}",
                        column,
                        row - 1
                    ));
                }
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The player to place the next piece
    pub fn mover(&self) -> Player {
        self.mover
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.columns + column]
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sibling_index(&self) -> usize {
        self.sibling_index
    }

    /// The (row, column) filled by the move that produced this board, if known
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Returns the row a piece dropped into `column` comes to rest in,
    /// or `None` if the column is full
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())
    }

    /// Returns every board reachable with one move of the mover, or nothing
    /// if the game is already decided
    ///
    /// Columns are tried from the highest index down, so the first successor
    /// fills the rightmost open column.
    pub fn legal_successors(&self) -> Vec<Board> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.expand()
    }

    /// Successors without the terminal check, for callers that already classified the board
    pub(crate) fn expand(&self) -> Vec<Board> {
        let piece = self.mover.cell();
        (0..self.columns)
            .rev()
            .filter_map(|column| self.landing_row(column).map(|row| (row, column)))
            .enumerate()
            .map(|(sibling_index, (row, column))| {
                let mut cells = self.cells.clone();
                cells[row * self.columns + column] = piece;
                Board {
                    cells,
                    rows: self.rows,
                    columns: self.columns,
                    mover: self.mover.opponent(),
                    depth: self.depth + 1,
                    sibling_index,
                    last_move: Some((row, column)),
                }
            })
            .collect()
    }

    /// Scans rows, then columns, then `\` diagonals, then `/` diagonals for
    /// four same-colored cells in a row
    pub fn check_win(&self) -> Option<Player> {
        let (rows, columns) = (self.rows, self.columns);

        for row in 0..rows {
            if let Some(winner) = self.winner_along((row, 0), (0, 1)) {
                return Some(winner);
            }
        }
        for column in 0..columns {
            if let Some(winner) = self.winner_along((0, column), (1, 0)) {
                return Some(winner);
            }
        }

        // `\` diagonals start on the top row or the left column
        let down_right = (0..columns)
            .map(|column| (0, column))
            .chain((1..rows).map(|row| (row, 0)));
        for start in down_right {
            if let Some(winner) = self.winner_along(start, (1, 1)) {
                return Some(winner);
            }
        }

        // `/` diagonals start on the left column or the bottom row
        let up_right = (0..rows)
            .map(|row| (row, 0))
            .chain((1..columns).map(|column| (rows - 1, column)));
        for start in up_right {
            if let Some(winner) = self.winner_along(start, (-1, 1)) {
                return Some(winner);
            }
        }

        None
    }

    /// Walks a line from `start` in steps of `step` until it leaves the grid,
    /// returning the owner of the first run of `SERIES_LEN` equal cells
    fn winner_along(&self, start: (usize, usize), step: (isize, isize)) -> Option<Player> {
        let (mut row, mut column) = (start.0 as isize, start.1 as isize);
        let mut run = 0;
        let mut previous = Cell::Empty;

        while row >= 0 && row < self.rows as isize && column >= 0 && column < self.columns as isize
        {
            let cell = self.cell(row as usize, column as usize);
            if cell.is_empty() {
                run = 0;
            } else if cell == previous {
                run += 1;
            } else {
                run = 1;
            }
            if run >= SERIES_LEN {
                return cell.owner();
            }
            previous = cell;
            row += step.0;
            column += step.1;
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// True iff nobody has won and no cell is left
    pub fn is_draw(&self) -> bool {
        self.check_win().is_none() && self.is_full()
    }

    pub fn classify(&self) -> Position {
        match self.check_win() {
            Some(winner) => Position::Won(winner),
            None if self.is_full() => Position::Drawn,
            None => Position::Open,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.classify() != Position::Open
    }

    /// Drops a piece for `player` into `column` and hands the move to the opponent
    ///
    /// The board is left untouched on error.
    pub fn apply_human_move(&mut self, column: usize, player: Player) -> Result<(), MoveError> {
        if column >= self.columns {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        let row = self
            .landing_row(column)
            .ok_or(MoveError::ColumnFull { column })?;

        self.cells[row * self.columns + column] = player.cell();
        self.mover = player.opponent();
        self.last_move = Some((row, column));
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "{},", self.cell(row, column).marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
