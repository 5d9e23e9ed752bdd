mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod outcome;
mod types;

pub use board::Board;
pub use bot_controller::{
    BotType, best_ranked, calculate_move, calculate_optimal_move, calculate_random_move,
    calculate_scored_optimal_move, rank_moves,
};
pub use error::{GameError, IllegalMoveError, ParseBoardError};
pub use game_state::TicTacToeGameState;
pub use minimax::{WIN_SCORE, score};
pub use outcome::{WINNING_LINES, evaluate, winning_line};
pub use types::{BOARD_SIDE, CELL_COUNT, GameStatus, Mark, Outcome};
