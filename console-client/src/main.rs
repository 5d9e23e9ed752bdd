mod config;
mod game_loop;
mod input;
mod mode;
mod render;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::{log, logger};

use config::{CONFIG_FILE, ConsoleConfig, ThinkingConfig, get_config_manager};
use game_loop::ConsoleGame;
use mode::GameMode;

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe against a friend or a bot")]
struct Args {
    /// Skip the mode menu.
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Seed for the random bot; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Skip the bot's thinking pause.
    #[arg(long)]
    no_delay: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write diagnostic log lines to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = match get_config_manager(&args.config).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Config load failed for {}: {}", args.config.display(), e);
            eprintln!("Ignoring config {}: {}", args.config.display(), e);
            ConsoleConfig::default()
        }
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Using seed {}", rng.seed());

    let thinking = if args.no_delay {
        ThinkingConfig::disabled()
    } else {
        config.thinking.clone()
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = ConsoleGame::new(stdin.lock(), stdout.lock(), rng, thinking);

    game.print_banner()?;

    let mode = match args.mode.or(config.default_mode) {
        Some(mode) => mode,
        None => match game.choose_mode()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    game.play(mode)?;
    println!("Thanks for playing!");

    Ok(())
}
