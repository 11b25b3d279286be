//! Wordle Game Show - CLI
//!
//! Five rounds of Wordle with cumulative scoring and a persistent leaderboard.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use wordle_gameshow::{
    commands::{
        Console, ConsoleOptions, GameContext, print_leaderboard, run_menu, run_practice, run_show,
    },
    config::{DEFAULT_REVEAL_DELAY, GameSettings},
    error::GameError,
    game::{leaderboard::DEFAULT_LEADERBOARD_FILE, round_by_number},
    logging::{LogConfig, init_logging},
};

#[derive(Parser)]
#[command(
    name = "wordle_gameshow",
    about = "The world's first Wordle game show: five rounds, one leaderboard",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of word list files (default: lists built into the binary)
    #[arg(long, global = true)]
    words_dir: Option<PathBuf>,

    /// Leaderboard file
    #[arg(long, global = true, default_value = DEFAULT_LEADERBOARD_FILE)]
    leaderboard: PathBuf,

    /// Seed for answer selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Milliseconds between revealed letters (0 disables the animation)
    #[arg(long, global = true, default_value_t = DEFAULT_REVEAL_DELAY.as_millis() as u64)]
    reveal_delay_ms: u64,

    /// Do not clear the screen between prompts
    #[arg(long, global = true)]
    no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Main menu (default)
    Menu,

    /// Play the full game show straight away
    Play,

    /// Practice a single round
    Practice {
        /// Round number, 1 to 5
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        round: u8,
    },

    /// Print the leaderboard and exit
    Leaderboard,
}

impl Cli {
    fn settings(&self) -> GameSettings {
        GameSettings {
            words_dir: self.words_dir.clone(),
            leaderboard_path: self.leaderboard.clone(),
            seed: self.seed,
            reveal_delay: Duration::from_millis(self.reveal_delay_ms),
            clear_screen: !self.no_clear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("failed to initialise logging")?;

    let settings = cli.settings();
    let mut ctx = GameContext::from_settings(&settings);
    let options = ConsoleOptions {
        clear_screen: settings.clear_screen,
        reveal_delay: settings.reveal_delay,
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), options);

    let command = cli.command.unwrap_or(Commands::Menu);
    let outcome = run_command(command, &mut console, &mut ctx);
    console.out().flush()?;

    match outcome {
        Err(GameError::InputClosed) => {
            tracing::debug!("input closed, ending session");
            Ok(())
        }
        other => other.context("game show stopped"),
    }
}

fn run_command<R: BufRead, W: Write>(
    command: Commands,
    console: &mut Console<R, W>,
    ctx: &mut GameContext,
) -> wordle_gameshow::error::Result<()> {
    match command {
        Commands::Menu => run_menu(console, ctx),
        Commands::Play => run_show(console, ctx).map(|_| ()),
        Commands::Practice { round } => {
            let number = usize::from(round);
            match round_by_number(number) {
                Some(config) => run_practice(console, ctx, number, config).map(|_| ()),
                None => Ok(()),
            }
        }
        Commands::Leaderboard => print_leaderboard(console, ctx.leaderboard.as_ref()),
    }
}
