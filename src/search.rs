//! An exhaustive game tree search for four-in-a-row positions

use crate::board::{Board, Player, Position};

/// Utility of a position won by the maximizing player
pub const WIN: i32 = 1;
/// Utility of a drawn position
pub const DRAW: i32 = 0;
/// Utility of a position won by the opponent of the maximizing player
pub const LOSS: i32 = -1;

/// An agent that plays four-in-a-row by searching the full game tree
///
/// # Notes
/// The search expands every reachable position until it is won or drawn,
/// with no pruning, transposition table or depth limit, so it is only
/// practical on small or nearly full boards.
///
/// # Position Scoring
/// Every position is scored from the point of view of the engine's
/// `maximizer`: [`WIN`] if the maximizer wins under perfect play, [`LOSS`]
/// if the opponent does, and [`DRAW`] otherwise. On the maximizer's turn the
/// score is the best score among the successors, on the opponent's turn it is
/// the worst.
#[derive(Copy, Clone, Debug)]
pub struct SearchEngine {
    maximizer: Player,
}

impl SearchEngine {
    /// Creates a `SearchEngine` choosing moves in favour of `maximizer`
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Score of a decided position, `None` while the game is still open
    fn terminal_utility(&self, board: &Board) -> Option<i32> {
        match board.classify() {
            Position::Won(winner) if winner == self.maximizer => Some(WIN),
            Position::Won(_) => Some(LOSS),
            Position::Drawn => Some(DRAW),
            Position::Open => None,
        }
    }

    /// Scores `board` assuming the maximizer picks the next move
    pub fn value_for_maximizer(&self, board: &Board) -> i32 {
        match self.terminal_utility(board) {
            Some(utility) => utility,
            // an open board always has at least one successor
            None => board
                .expand()
                .iter()
                .map(|child| self.value_for_minimizer(child))
                .fold(LOSS, i32::max),
        }
    }

    /// Scores `board` assuming the opponent of the maximizer picks the next move
    pub fn value_for_minimizer(&self, board: &Board) -> i32 {
        match self.terminal_utility(board) {
            Some(utility) => utility,
            None => board
                .expand()
                .iter()
                .map(|child| self.value_for_maximizer(child))
                .fold(WIN, i32::min),
        }
    }

    /// Scores `board` according to whose turn it is there
    pub fn utility(&self, board: &Board) -> i32 {
        if board.mover() == self.maximizer {
            self.value_for_maximizer(board)
        } else {
            self.value_for_minimizer(board)
        }
    }

    /// Picks the candidate with the highest utility
    ///
    /// Ties go to the candidate that comes last, so with successors from
    /// [`Board::legal_successors`] the lowest column index wins a tie.
    /// Returns `None` if there are no candidates.
    pub fn select_best_move(&self, children: Vec<Board>) -> Option<Board> {
        pick_best(self.score_moves(children))
    }

    /// Pairs every candidate with its utility, keeping the candidate order
    pub fn score_moves(&self, children: Vec<Board>) -> Vec<(i32, Board)> {
        children
            .into_iter()
            .map(|child| (self.utility(&child), child))
            .collect()
    }

    /// Picks the best successor of `board`, `None` if the game is over
    pub fn best_move(&self, board: &Board) -> Option<Board> {
        self.select_best_move(board.legal_successors())
    }
}

/// Picks the highest scored candidate, the last one on ties
pub fn pick_best(scored: Vec<(i32, Board)>) -> Option<Board> {
    // `max_by_key` keeps the last of several equal maxima
    scored
        .into_iter()
        .max_by_key(|(utility, _)| *utility)
        .map(|(_, board)| board)
}
