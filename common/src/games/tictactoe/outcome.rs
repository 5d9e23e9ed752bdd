use super::board::Board;
use super::types::{Mark, Outcome};

/// Rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The first completed line and the mark that owns it.
pub fn winning_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        (!mark.is_empty() && cells[b] == mark && cells[c] == mark).then_some((mark, line))
    })
}

/// Lines are checked before fullness: a full board with a completed line
/// is a win, not a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = winning_line(board) {
        return Outcome::Win(mark);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_top_row_wins_regardless_of_rest() {
        assert_eq!(evaluate(&board("XXXO.O...")), Outcome::Win(Mark::X));
        assert_eq!(evaluate(&board("XXX......")), Outcome::Win(Mark::X));
        assert_eq!(evaluate(&board("XXXOO.O..")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_win_beats_fullness() {
        let full = board("XXXOOXOXO");
        assert!(full.is_full());
        assert_eq!(evaluate(&full), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for position in line {
                b.place(position, Mark::O).unwrap();
            }
            assert_eq!(evaluate(&b), Outcome::Win(Mark::O), "line {:?}", line);
            assert_eq!(winning_line(&b), Some((Mark::O, line)));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board("XX.OO....");
        assert_eq!(evaluate(&b), Outcome::InProgress);
        assert_eq!(winning_line(&b), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(evaluate(&board("XOX......")), Outcome::InProgress);
    }
}
