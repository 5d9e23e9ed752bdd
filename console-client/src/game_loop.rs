use std::io::{self, BufRead, Write};

use common::games::SessionRng;
use common::games::tictactoe::{
    Board, BotType, GameStatus, Mark, TicTacToeGameState, calculate_random_move,
    calculate_scored_optimal_move, rank_moves, winning_line,
};
use common::log;

use crate::config::ThinkingConfig;
use crate::input::{HumanInput, parse_human_input};
use crate::mode::GameMode;
use crate::render::{render_board, render_hint, render_legend, render_line};

/// Mark played by the bot in the vs-computer modes. The human takes `X` and
/// moves first.
const BOT_MARK: Mark = Mark::O;

/// Drives one console session over any line reader and writer.
pub struct ConsoleGame<R: BufRead, W: Write> {
    input: R,
    output: W,
    rng: SessionRng,
    thinking: ThinkingConfig,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    pub fn new(input: R, output: W, rng: SessionRng, thinking: ThinkingConfig) -> Self {
        Self {
            input,
            output,
            rng,
            thinking,
        }
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "         TIC-TAC-TOE")?;
        writeln!(self.output)?;
        writeln!(self.output, "Cell numbers:")?;
        writeln!(self.output, "{}", render_legend())?;
        writeln!(self.output)
    }

    /// Asks until a valid choice is entered. `None` when input runs out.
    pub fn choose_mode(&mut self) -> io::Result<Option<GameMode>> {
        loop {
            writeln!(self.output, "Choose a game mode:")?;
            for (number, mode) in [GameMode::Pvp, GameMode::Random, GameMode::Optimal]
                .iter()
                .enumerate()
            {
                writeln!(self.output, "{} - {}", number + 1, mode)?;
            }
            write!(self.output, "Your choice (1, 2 or 3): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match GameMode::from_menu_choice(&line) {
                Some(mode) => return Ok(Some(mode)),
                None => writeln!(self.output, "Invalid choice. Type 1, 2 or 3.")?,
            }
        }
    }

    /// Plays until the game is won, drawn or abandoned.
    pub fn play(&mut self, mode: GameMode) -> io::Result<GameStatus> {
        log!("Starting {} with seed {}", mode, self.rng.seed());
        writeln!(self.output, "\n=== GAME START: {} ===\n", mode)?;

        let mut state = TicTacToeGameState::new();

        loop {
            writeln!(self.output, "{}\n", render_board(state.board()))?;

            if state.status().is_over() {
                break;
            }

            let bot = mode
                .bot_type()
                .filter(|_| state.current_mark() == BOT_MARK);

            match bot {
                Some(bot_type) => self.play_bot_turn(&mut state, bot_type)?,
                None => {
                    if !self.play_human_turn(&mut state)? {
                        if let Err(err) = state.abandon() {
                            log!("Could not abandon the game: {}", err);
                        }
                        writeln!(self.output, "Game abandoned.")?;
                        return Ok(state.status());
                    }
                }
            }
        }

        self.report_result(state.status(), state.board())?;
        Ok(state.status())
    }

    /// Returns `false` when the player quits or input runs out.
    fn play_human_turn(&mut self, state: &mut TicTacToeGameState) -> io::Result<bool> {
        let mark = state.current_mark();
        loop {
            write!(self.output, "Player {} - enter a cell (1-9): ", mark)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };

            let position = match parse_human_input(&line) {
                Ok(HumanInput::Quit) => return Ok(false),
                Ok(HumanInput::Hint) => {
                    if let Some(opponent) = mark.opponent() {
                        let ranked = rank_moves(state.board(), mark, opponent);
                        writeln!(self.output, "{}", render_hint(&ranked))?;
                    }
                    continue;
                }
                Ok(HumanInput::Move(position)) => position,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };

            if !state.board().is_empty_cell(position) {
                writeln!(self.output, "Cell already taken, choose another one.")?;
                continue;
            }

            match state.place_mark(position) {
                Ok(_) => return Ok(true),
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }

    fn play_bot_turn(&mut self, state: &mut TicTacToeGameState, bot_type: BotType) -> io::Result<()> {
        self.think()?;

        let mark = state.current_mark();
        let Some(opponent) = mark.opponent() else {
            return Ok(());
        };
        let choice = match bot_type {
            BotType::Random => calculate_random_move(state.board(), &mut self.rng)
                .map(|position| (position, None)),
            BotType::Optimal => calculate_scored_optimal_move(state.board(), mark, opponent)
                .map(|(position, score)| (position, Some(score))),
        };
        let Some((position, score)) = choice else {
            return Ok(());
        };

        match score {
            Some(score) => log!("{:?} bot picked cell {} (score {})", bot_type, position, score),
            None => log!("{:?} bot picked cell {}", bot_type, position),
        }

        if let Err(err) = state.place_mark(position) {
            log!("{:?} bot produced an illegal move: {}", bot_type, err);
            return Err(io::Error::other(err));
        }
        writeln!(self.output, "Go! The bot plays cell {}\n", position + 1)
    }

    fn think(&mut self) -> io::Result<()> {
        if self.thinking.beeps == 0 {
            return Ok(());
        }
        writeln!(self.output, "The bot is thinking...")?;
        for _ in 0..self.thinking.beeps {
            writeln!(self.output, "beep")?;
            self.output.flush()?;
            if !self.thinking.beep_interval().is_zero() {
                std::thread::sleep(self.thinking.beep_interval());
            }
        }
        Ok(())
    }

    fn report_result(&mut self, status: GameStatus, board: &Board) -> io::Result<()> {
        log!("Game finished: {:?}", status);
        if let Some(winner) = status.winner() {
            return match winning_line(board) {
                Some((_, line)) => writeln!(
                    self.output,
                    "Player {} wins! (cells {})",
                    winner,
                    render_line(&line)
                ),
                None => writeln!(self.output, "Player {} wins!", winner),
            };
        }
        match status {
            GameStatus::Draw => writeln!(self.output, "It's a draw."),
            GameStatus::Abandoned => writeln!(self.output, "Game abandoned."),
            _ => Ok(()),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
