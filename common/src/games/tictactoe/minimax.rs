use super::board::Board;
use super::outcome::evaluate;
use super::types::{Mark, Outcome};

/// Score of an immediate win for the maximizing side.
pub const WIN_SCORE: i32 = 10;

/// Exhaustive minimax from `max_mark`'s point of view.
///
/// Wins score `WIN_SCORE - depth` and losses `depth - WIN_SCORE`, so among
/// equal results the fastest win and the slowest loss are preferred. Draws
/// score 0. When `maximizing` is true `max_mark` is to move, otherwise
/// `min_mark`.
///
/// The board is mutated while searching and is identical to its input when
/// this returns.
pub fn score(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    max_mark: Mark,
    min_mark: Mark,
) -> i32 {
    match evaluate(board) {
        Outcome::Win(mark) if mark == max_mark => return WIN_SCORE - depth,
        Outcome::Win(mark) if mark == min_mark => return depth - WIN_SCORE,
        Outcome::Win(_) | Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let to_move = if maximizing { max_mark } else { min_mark };
    let scores = board.legal_moves().into_iter().filter_map(|position| {
        let mut trial = board.trial(position, to_move).ok()?;
        Some(score(&mut trial, depth + 1, !maximizing, max_mark, min_mark))
    });

    let best = if maximizing { scores.max() } else { scores.min() };
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Every position reachable from the empty board with X moving first.
    fn reachable_states() -> Vec<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![(Board::new(), Mark::X)];
        let mut states = Vec::new();
        while let Some((b, to_move)) = stack.pop() {
            if !seen.insert(b) {
                continue;
            }
            states.push(b);
            if evaluate(&b).is_terminal() {
                continue;
            }
            let next_mark = to_move.opponent().unwrap();
            for position in b.legal_moves() {
                let mut next = b;
                next.place(position, to_move).unwrap();
                stack.push((next, next_mark));
            }
        }
        states
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_terminal_win_for_max() {
        let mut b = board("XXXOO....");
        assert_eq!(score(&mut b, 0, false, Mark::X, Mark::O), 10);
        assert_eq!(score(&mut b, 3, true, Mark::X, Mark::O), 7);
    }

    #[test]
    fn test_terminal_win_for_min() {
        let mut b = board("XXXOO....");
        assert_eq!(score(&mut b, 0, true, Mark::O, Mark::X), -10);
        assert_eq!(score(&mut b, 4, true, Mark::O, Mark::X), -6);
    }

    #[test]
    fn test_terminal_draw() {
        let mut b = board("XOXXOOOXX");
        assert_eq!(score(&mut b, 5, true, Mark::X, Mark::O), 0);
    }

    #[test]
    fn test_forced_win_one_ply_away() {
        // X to move completes the top row at depth 0, scored after the placement at depth 1.
        let mut b = board("XX.OO....");
        assert_eq!(score(&mut b, 0, true, Mark::X, Mark::O), 9);
    }

    #[test]
    fn test_minimizing_side_takes_its_win() {
        // O to move, O wins at once by completing the middle row.
        let mut b = board("XX.OO.X..");
        assert_eq!(score(&mut b, 0, false, Mark::X, Mark::O), -9);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new();
        assert_eq!(score(&mut b, 0, true, Mark::X, Mark::O), 0);
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_board_restored_after_scoring() {
        let positions = ["X........", "X...O....", "XO..X....", "XX.OO..X.", "XOX.O.OX."];
        for s in positions {
            let mut b = board(s);
            let before = b;
            for position in before.legal_moves() {
                for (max_mark, min_mark) in [(Mark::X, Mark::O), (Mark::O, Mark::X)] {
                    {
                        let mut trial = b.trial(position, max_mark).unwrap();
                        score(&mut trial, 0, false, max_mark, min_mark);
                    }
                    assert_eq!(b, before, "board {} move {}", s, position);
                }
            }
        }
    }

    #[test]
    fn test_reachable_state_count() {
        assert_eq!(reachable_states().len(), 5478);
    }

    #[test]
    fn test_legal_moves_exhaustive_over_reachable_states() {
        for b in reachable_states() {
            let expected: Vec<usize> = (0..9).filter(|&p| b.is_empty_cell(p)).collect();
            let moves = b.legal_moves();
            assert_eq!(moves, expected, "board {}", b);
            assert!(moves.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_restoration_over_late_reachable_states() {
        for b in reachable_states().into_iter().filter(|b| b.legal_moves().len() <= 4) {
            let mut searched = b;
            score(&mut searched, 0, true, Mark::X, Mark::O);
            score(&mut searched, 0, false, Mark::O, Mark::X);
            assert_eq!(searched, b);
        }
    }
}
