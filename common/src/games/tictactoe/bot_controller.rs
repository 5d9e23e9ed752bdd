use crate::games::SessionRng;
use super::board::Board;
use super::minimax::score;
use super::types::Mark;

/// Computer opponent strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BotType {
    /// Uniform draw over the legal moves.
    Random,
    /// Exhaustive minimax; never loses.
    Optimal,
}

/// Picks a move for `to_move`. `None` means there is no legal move left,
/// which is not an error; callers are expected to check the outcome first.
///
/// The caller's board is never modified.
pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    to_move: Mark,
    opponent: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Optimal => calculate_optimal_move(board, to_move, opponent),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.legal_moves())
}

/// Highest-scoring move for `to_move`; the lowest index wins ties, so the
/// result depends only on the board.
pub fn calculate_optimal_move(board: &Board, to_move: Mark, opponent: Mark) -> Option<usize> {
    calculate_scored_optimal_move(board, to_move, opponent).map(|(position, _)| position)
}

/// Same choice as [`calculate_optimal_move`], together with its minimax score.
pub fn calculate_scored_optimal_move(
    board: &Board,
    to_move: Mark,
    opponent: Mark,
) -> Option<(usize, i32)> {
    best_ranked(&rank_moves(board, to_move, opponent))
}

/// First entry with the highest score; later ties do not replace it.
pub fn best_ranked(ranked: &[(usize, i32)]) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;
    for &(position, move_score) in ranked {
        if best.is_none_or(|(_, best_score)| move_score > best_score) {
            best = Some((position, move_score));
        }
    }
    best
}

/// Minimax score of every legal move for `to_move`, in ascending cell order.
pub fn rank_moves(board: &Board, to_move: Mark, opponent: Mark) -> Vec<(usize, i32)> {
    let mut board = *board;
    let available_moves = board.legal_moves();

    let mut ranked = Vec::with_capacity(available_moves.len());
    for position in available_moves {
        let Ok(mut trial) = board.trial(position, to_move) else {
            continue;
        };
        // The move under evaluation is already on the board, so the search
        // starts with the opponent's reply.
        let move_score = score(&mut trial, 0, false, to_move, opponent);
        ranked.push((position, move_score));
    }
    ranked
}
