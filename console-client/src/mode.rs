use std::fmt;

use clap::ValueEnum;
use common::games::tictactoe::BotType;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans at the same terminal.
    Pvp,
    /// Human against the uniform-random bot.
    Random,
    /// Human against the minimax bot.
    Optimal,
}

impl GameMode {
    /// Opponent driving `O`, or `None` when both sides are human.
    pub fn bot_type(&self) -> Option<BotType> {
        match self {
            GameMode::Pvp => None,
            GameMode::Random => Some(BotType::Random),
            GameMode::Optimal => Some(BotType::Optimal),
        }
    }

    pub fn from_menu_choice(choice: &str) -> Option<GameMode> {
        match choice.trim() {
            "1" => Some(GameMode::Pvp),
            "2" => Some(GameMode::Random),
            "3" => Some(GameMode::Optimal),
            _ => None,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameMode::Pvp => "Player vs Player",
            GameMode::Random => "Player vs Random Bot",
            GameMode::Optimal => "Player vs Optimal Bot",
        };
        write!(f, "{}", label)
    }
}
