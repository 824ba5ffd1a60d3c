use super::{Board, Player};
use crate::error::MoveError;

/// How a finished game ended. Held by the shell once it observes a win or a
/// full board; the engine itself stays a passive rules oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game in progress: the board plus whose turn it is.
///
/// The shell drives a turn as four calls: `is_valid_move`, `drop_piece`,
/// `check_winner` at the landing coordinate, then either stops (win, or
/// `is_full` draw) or `switch_active_player`. A finished game is discarded
/// and replaced with a fresh `GameState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Player,
}

impl GameState {
    /// Fresh game: empty board, player one to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            active_player: Player::One,
        }
    }

    /// The player whose move is currently being processed
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Read access to the board for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True iff `col` is in range and has at least one free slot
    pub fn is_valid_move(&self, col: usize) -> bool {
        self.board.is_valid_move(col)
    }

    /// Drop the active player's piece into `col`, returning the (row, col)
    /// coordinate it landed at. Refuses a full or out-of-range column
    /// without touching the board, so it is safe to call without checking
    /// `is_valid_move` first.
    pub fn drop_piece(&mut self, col: usize) -> Result<(usize, usize), MoveError> {
        let row = self.board.drop_piece(col, self.active_player.to_cell())?;
        Ok((row, col))
    }

    /// Hand the turn to the other player
    pub fn switch_active_player(&mut self) {
        self.active_player = self.active_player.other();
    }

    /// Did the piece just placed at (row, col) win the game for the player
    /// who placed it? Must be called before `switch_active_player`.
    pub fn check_winner(&self, row: usize, col: usize) -> bool {
        self.board.check_win(row, col)
    }

    /// True iff no legal move remains in any column
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
