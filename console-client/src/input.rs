use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    /// Zero-based cell index.
    Move(usize),
    /// Show the minimax score of every free cell.
    Hint,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input, type a number from 1 to 9, 'h' for a hint or 'q' to quit")]
    NotANumber,

    #[error("please enter a number between 1 and 9")]
    OutOfRange,
}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];
const HINT_WORDS: [&str; 2] = ["h", "hint"];

/// Parses one line typed by a player. Cells are numbered 1 to 9 on screen.
pub fn parse_human_input(line: &str) -> Result<HumanInput, InputError> {
    let trimmed = line.trim();
    if QUIT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
        return Ok(HumanInput::Quit);
    }
    if HINT_WORDS.iter().any(|w| trimmed.eq_ignore_ascii_case(w)) {
        return Ok(HumanInput::Hint);
    }

    let number: i64 = trimmed.parse().map_err(|_| InputError::NotANumber)?;
    if !(1..=9).contains(&number) {
        return Err(InputError::OutOfRange);
    }
    Ok(HumanInput::Move((number - 1) as usize))
}
