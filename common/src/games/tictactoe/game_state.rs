use crate::log;
use super::board::Board;
use super::error::GameError;
use super::outcome::evaluate;
use super::types::{GameStatus, Mark};

/// A single game: X moves first, turns alternate, and every applied move
/// re-evaluates the board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that plays the next move.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Places the current mark and advances the game.
    pub fn place_mark(&mut self, position: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.place(position, self.current_mark)?;
        self.last_move = Some(position);
        log!("{} placed at cell {}", self.current_mark, position);

        self.status = GameStatus::from(evaluate(&self.board));
        if self.status == GameStatus::InProgress {
            self.switch_turn();
        } else {
            log!("Game over: {:?}", self.status);
        }

        Ok(self.status)
    }

    /// Ends an unfinished game on an external quit request.
    pub fn abandon(&mut self) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Abandoned;
        log!("Game abandoned with {} to move", self.current_mark);
        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}
