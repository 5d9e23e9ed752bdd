use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use super::error::{IllegalMoveError, ParseBoardError};
use super::types::{CELL_COUNT, Mark};

/// The 3x3 grid, stored row-major: cell `i` sits at row `i / 3`, column `i % 3`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        self.cells.get(position).copied()
    }

    pub fn is_empty_cell(&self, position: usize) -> bool {
        self.get(position) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Every empty cell in ascending order. Move ordering in the search
    /// depends on this order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), IllegalMoveError> {
        if mark.is_empty() {
            return Err(IllegalMoveError::NotAMark);
        }
        match self.get(position) {
            None => Err(IllegalMoveError::OutOfRange { position }),
            Some(Mark::Empty) => {
                self.cells[position] = mark;
                Ok(())
            }
            Some(occupant) => Err(IllegalMoveError::Occupied {
                position,
                mark: occupant,
            }),
        }
    }

    pub(crate) fn clear(&mut self, position: usize) {
        self.cells[position] = Mark::Empty;
    }

    /// Places `mark` for the lifetime of the returned guard. The cell is
    /// emptied again when the guard drops.
    pub(crate) fn trial(
        &mut self,
        position: usize,
        mark: Mark,
    ) -> Result<TrialMove<'_>, IllegalMoveError> {
        self.place(position, mark)?;
        Ok(TrialMove {
            board: self,
            position,
        })
    }
}

pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    position: usize,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}

/// Compact form: nine characters, `X`, `O` or `.`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

/// Accepts the compact form; `|` and line breaks are ignored so
/// `"XO.|...|..X"` parses too.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '\n' | '\r'))
            .collect();
        if chars.len() != CELL_COUNT {
            return Err(ParseBoardError::InvalidLength {
                expected: CELL_COUNT,
                got: chars.len(),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, &character) in chars.iter().enumerate() {
            cells[position] = Mark::from_char(character)
                .ok_or(ParseBoardError::InvalidCell { character, position })?;
        }
        Ok(Self { cells })
    }
}
