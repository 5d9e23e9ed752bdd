use common::games::tictactoe::{BOARD_SIDE, Board, Mark, best_ranked};

const ROW_SEPARATOR: &str = "---+---+---";

pub fn render_board(board: &Board) -> String {
    render_rows(board.cells().iter().map(|&mark| match mark {
        Mark::Empty => ' ',
        other => other.to_char(),
    }))
}

/// Cell numbers as the player types them.
pub fn render_legend() -> String {
    render_rows((1..=9u32).filter_map(|n| char::from_digit(n, 10)))
}

/// Winning cells as the player numbers them, e.g. `1-5-9`.
pub fn render_line(line: &[usize; 3]) -> String {
    line.iter()
        .map(|position| (position + 1).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

/// One `cell=score` pair per free cell plus the cell the optimal bot would pick.
pub fn render_hint(ranked: &[(usize, i32)]) -> String {
    let scores = ranked
        .iter()
        .map(|(position, score)| format!("{}={}", position + 1, score))
        .collect::<Vec<_>>()
        .join(", ");
    match best_ranked(ranked) {
        Some((best, _)) => format!("Scores by cell: {} (best: {})", scores, best + 1),
        None => "No free cells.".to_string(),
    }
}

fn render_rows(cells: impl Iterator<Item = char>) -> String {
    let cells: Vec<char> = cells.collect();
    let separator = format!("\n{}\n", ROW_SEPARATOR);
    cells
        .chunks(BOARD_SIDE)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let expected = "   |   |  \n---+---+---\n   |   |  \n---+---+---\n   |   |  ";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "XO.....OX".parse().unwrap();
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X | O |  ");
        assert_eq!(lines[4], "   | O | X");
    }

    #[test]
    fn test_render_line_is_one_based() {
        assert_eq!(render_line(&[0, 4, 8]), "1-5-9");
    }

    #[test]
    fn test_render_hint() {
        assert_eq!(
            render_hint(&[(2, 10), (5, -9), (6, 10)]),
            "Scores by cell: 3=10, 6=-9, 7=10 (best: 3)"
        );
        assert_eq!(render_hint(&[]), "No free cells.");
    }

    #[test]
    fn test_render_legend() {
        let legend = render_legend();
        assert!(legend.starts_with(" 1 | 2 | 3\n---+---+---\n 4 | 5 | 6"));
        assert!(legend.ends_with(" 7 | 8 | 9"));
    }
}
