//! Go-Life: Go with Game-of-Life mutations.
//!
//! ## Usage
//!
//! - `go-life` - Show a demo
//! - `go-life play` - Start the text console
//! - `go-life demo` - Run the demo

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use go_life::board::BoardSize;
use go_life::config::{GameConfig, GameMode};
use go_life::console::Console;
use go_life::constants::{DEFAULT_DICE_FACES, DEFAULT_MAX_TURNS};
use go_life::game::{new_game, place_stone, run_automaton_manually};

/// Go-Life: Go stone placement with Game-of-Life mutations
#[derive(Parser)]
#[command(name = "go-life")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    setup: SetupArgs,

    /// Log engine events at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct SetupArgs {
    /// Board size: 9, 13 or 19
    #[arg(long, default_value = "9", global = true)]
    size: BoardSize,

    /// Number of turns before the game ends
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS, global = true)]
    max_turns: u32,

    /// Faces on the die rolled after each turn in dice mode
    #[arg(long, default_value_t = DEFAULT_DICE_FACES, global = true)]
    dice_faces: u32,

    /// How automaton steps are triggered: dice or manual
    #[arg(long, default_value = "dice", global = true)]
    mode: GameMode,

    /// Seed for the die, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl SetupArgs {
    fn to_config(&self) -> GameConfig {
        let mut config = GameConfig::new(self.size, self.max_turns, self.dice_faces, self.mode);
        config.seed = self.seed;
        config.clamped()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text console on stdin/stdout
    Play,
    /// Play a short scripted game and print the board
    Demo,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.setup.to_config();

    match cli.command {
        Some(Commands::Play) => {
            let mut console = Console::new(config)?;
            console.run(std::io::stdin().lock(), std::io::stdout())?;
        }
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Go-Life: Go with Game-of-Life mutations\n");

    // Demo 1: capture
    println!("=== Capture Demo ===");
    let config = GameConfig::new(BoardSize::Nine, 20, 6, GameMode::Manual);
    let mut game = new_game(&config)?;
    for pt in [(4, 4), (4, 5), (3, 5), (0, 0), (5, 5), (0, 8), (4, 6)] {
        let player = game.current_player();
        let outcome = place_stone(&mut game, pt)?;
        println!("{player} at {pt:?}: captured {}", outcome.captured);
    }
    println!("{}", game.board());
    println!(
        "Black: {}  White: {}\n",
        game.black_score(),
        game.white_score()
    );

    // Demo 2: automaton step
    println!("=== Automaton Demo ===");
    let step = run_automaton_manually(&mut game)?;
    println!("Removed {} stones, {} born", step.removed(), step.born());
    println!("{}", game.board());
    println!("Black: {}  White: {}", game.black_score(), game.white_score());
    Ok(())
}
