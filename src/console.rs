//! Line-oriented text console for playing a game.
//!
//! Each input line is one command, optionally prefixed with a numeric id.
//! Replies start with `=` on success or `?` on failure, followed by the id
//! (if any) and the reply text, and end with a blank line.
//!
//! ## Commands
//!
//! - `help` / `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `setup <size|turns|faces|mode|seed> <value>` - Change setup options (before a game starts)
//! - `start [size]` - Start a game, optionally choosing the board size
//! - `play <vertex>` or `play <row> <col>` - Place a stone for the current player
//! - `pass` - End the turn without placing a stone
//! - `life` - Run an automaton step (manual mode only)
//! - `showboard` - Print the board
//! - `status` - Turn, player, dice and mode
//! - `score` - Current scores, and the winner once the game is over
//! - `restart` - Return to setup once the game is over
//! - `quit` - Exit
//!
//! ## Example
//!
//! ```ignore
//! use go_life::console::Console;
//! let mut console = Console::new(Default::default())?;
//! console.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{BoardSize, parse_vertex, vertex_name};
use crate::config::{GameConfig, GameMode};
use crate::error::ConfigError;
use crate::game::{
    self, GameState, Phase, pass_turn, place_stone, reset, run_automaton_manually, start,
};

/// The list of known console commands.
const KNOWN_COMMANDS: &[&str] = &[
    "help",
    "known_command",
    "life",
    "list_commands",
    "pass",
    "play",
    "quit",
    "restart",
    "score",
    "setup",
    "showboard",
    "start",
    "status",
];

/// Console state: the setup options being edited plus the game they apply to.
pub struct Console {
    setup: GameConfig,
    game: GameState,
}

impl Console {
    pub fn new(setup: GameConfig) -> Result<Self, ConfigError> {
        let game = game::setup(&setup)?;
        Ok(Self { setup, game })
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "help" | "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "setup" => self.setup_option(args),

            "start" => {
                if let Err(reason) = self.expect_phase(Phase::ChoosingSetup) {
                    return (false, reason);
                }
                if let Some(size) = args.first() {
                    match size.parse::<BoardSize>() {
                        Ok(size) => self.setup.board_size = size,
                        Err(e) => return (false, e.to_string()),
                    }
                }
                match start(&mut self.game, self.setup.board_size) {
                    Ok(()) => (
                        true,
                        format!(
                            "{} board, {} turns, {} mode",
                            self.setup.board_size, self.setup.max_turns, self.setup.mode
                        ),
                    ),
                    Err(reason) => (false, reason.to_string()),
                }
            }

            "play" => {
                if let Err(reason) = self.expect_phase(Phase::InProgress) {
                    return (false, reason);
                }
                let game = &mut self.game;
                let n = game.board().size();
                let pt = match args {
                    [vertex] => parse_vertex(vertex, n),
                    [row, col] => row.parse().ok().zip(col.parse().ok()),
                    _ => return (false, "expected a vertex or row and column".to_string()),
                };
                let Some(pt) = pt else {
                    return (false, "invalid coordinate".to_string());
                };

                let player = game.current_player();
                match place_stone(game, pt) {
                    Ok(outcome) => {
                        let mut msg = format!("{player} {}", vertex_name(pt, n));
                        if outcome.captured > 0 {
                            msg.push_str(&format!(" captures {}", outcome.captured));
                        }
                        if let Some(roll) = outcome.dice_roll {
                            msg.push_str(&format!(", rolled {roll}"));
                        }
                        if outcome.automaton.is_some() {
                            msg.push_str(", automaton step executed");
                        }
                        if outcome.finished {
                            msg.push_str(", game over");
                        }
                        (true, msg)
                    }
                    Err(reason) => (false, format!("illegal move: {reason}")),
                }
            }

            "pass" => match pass_turn(&mut self.game) {
                Ok(outcome) => {
                    let mut msg = String::from("pass");
                    if let Some(roll) = outcome.dice_roll {
                        msg.push_str(&format!(", rolled {roll}"));
                    }
                    if outcome.automaton.is_some() {
                        msg.push_str(", automaton step executed");
                    }
                    if outcome.finished {
                        msg.push_str(", game over");
                    }
                    (true, msg)
                }
                Err(reason) => (false, reason.to_string()),
            },

            "life" => match run_automaton_manually(&mut self.game) {
                Ok(step) => (
                    true,
                    format!("removed {} born {}", step.removed(), step.born()),
                ),
                Err(reason) => (false, reason.to_string()),
            },

            "showboard" => match self.phase() {
                Phase::ChoosingSetup => (false, "no game in progress".to_string()),
                _ => (true, format!("\n{}", self.game.board())),
            },

            "status" => match self.phase() {
                Phase::ChoosingSetup => (true, format!("setup {}", describe_setup(&self.setup))),
                _ => {
                    let game = &self.game;
                    let dice = game
                        .last_dice_roll()
                        .map_or_else(|| "-".to_string(), |r| r.to_string());
                    let mut msg = format!(
                        "turn {}/{} player {} dice {} mode {}",
                        game.turn().min(game.max_turns()),
                        game.max_turns(),
                        game.current_player(),
                        dice,
                        game.mode()
                    );
                    if game.automaton_notice() {
                        msg.push_str(" (automaton step executed)");
                    }
                    (true, msg)
                }
            },

            "score" => match self.phase() {
                Phase::ChoosingSetup => (false, "no game in progress".to_string()),
                _ => {
                    let game = &self.game;
                    let mut msg = format!(
                        "black {} white {}",
                        game.black_score(),
                        game.white_score()
                    );
                    if let Some(winner) = game.winner() {
                        msg.push_str(&format!(" winner {winner}"));
                    }
                    (true, msg)
                }
            },

            "restart" => {
                if let Err(reason) = self.expect_phase(Phase::Finished) {
                    return (false, reason);
                }
                self.game = reset(&self.game);
                (true, String::new())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Refuse a command that needs the game in `wanted`.
    fn expect_phase(&self, wanted: Phase) -> Result<(), String> {
        let current = self.phase();
        if current == wanted {
            return Ok(());
        }
        Err(match current {
            Phase::ChoosingSetup => "no game in progress",
            Phase::InProgress => "game in progress",
            Phase::Finished => "game is over, restart first",
        }
        .to_string())
    }

    fn setup_option(&mut self, args: &[&str]) -> (bool, String) {
        if let Err(reason) = self.expect_phase(Phase::ChoosingSetup) {
            return (false, reason);
        }
        let [key, value] = args else {
            return (false, "expected an option and a value".to_string());
        };
        let result = match key.to_lowercase().as_str() {
            "size" => value
                .parse::<BoardSize>()
                .map(|size| self.setup.board_size = size)
                .map_err(|e| e.to_string()),
            "turns" => value
                .parse::<u32>()
                .map(|n| self.setup.max_turns = n)
                .map_err(|_| "invalid number".to_string()),
            "faces" => value
                .parse::<u32>()
                .map(|n| self.setup.dice_faces = n)
                .map_err(|_| "invalid number".to_string()),
            "mode" => value
                .parse::<GameMode>()
                .map(|mode| self.setup.mode = mode)
                .map_err(|e| e.to_string()),
            "seed" => value
                .parse::<u64>()
                .map(|seed| self.setup.seed = Some(seed))
                .map_err(|_| "invalid number".to_string()),
            other => Err(format!("unknown option: {other}")),
        };
        if let Err(e) = result {
            return (false, e);
        }
        self.setup = self.setup.clone().clamped();
        match game::setup(&self.setup) {
            Ok(game) => {
                self.game = game;
                (true, describe_setup(&self.setup))
            }
            Err(e) => (false, e.to_string()),
        }
    }
}

fn describe_setup(setup: &GameConfig) -> String {
    format!(
        "size {} turns {} faces {} mode {}",
        setup.board_size, setup.max_turns, setup.dice_faces, setup.mode
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console() -> Console {
        Console::new(GameConfig::default()).unwrap()
    }

    fn manual_console() -> Console {
        let mut console = console();
        assert!(console.execute("setup", &["mode", "manual"]).0);
        console
    }

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = Console::parse_id("123 status");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "status");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = Console::parse_id("status");
        assert_eq!(id, None);
        assert_eq!(cmd, "status");
    }

    #[test]
    fn test_known_command() {
        let mut console = console();

        let (success, response) = console.execute("known_command", &["life"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = console.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_setup_and_start() {
        let mut console = console();
        assert_eq!(console.phase(), Phase::ChoosingSetup);

        let (success, response) = console.execute("setup", &["faces", "50"]);
        assert!(success);
        assert!(response.contains("faces 20"), "faces should be clamped: {response}");

        assert!(!console.execute("setup", &["size", "10"]).0);
        assert!(!console.execute("setup", &["colour", "red"]).0);

        let (success, response) = console.execute("start", &["13"]);
        assert!(success, "{response}");
        assert_eq!(console.phase(), Phase::InProgress);
        assert_eq!(console.game().board().size(), 13);

        assert!(!console.execute("setup", &["turns", "5"]).0);
        assert!(!console.execute("start", &[]).0);
    }

    #[test]
    fn test_play_requires_game() {
        let mut console = console();
        assert_eq!(
            console.execute("play", &["D4"]),
            (false, "no game in progress".to_string())
        );
        assert!(!console.execute("pass", &[]).0);
        assert!(!console.execute("score", &[]).0);
        assert!(!console.execute("restart", &[]).0);
    }

    #[test]
    fn test_play_vertex_and_numeric() {
        let mut console = manual_console();
        console.execute("start", &["9"]);

        let (success, response) = console.execute("play", &["D4"]);
        assert!(success, "{response}");
        assert_eq!(response, "black D4");

        let (success, response) = console.execute("play", &["0", "0"]);
        assert!(success);
        assert_eq!(response, "white A9");

        let (success, response) = console.execute("play", &["D4"]);
        assert!(!success);
        assert_eq!(response, "illegal move: point is not empty");

        assert!(!console.execute("play", &["Z99"]).0);
    }

    #[test]
    fn test_life_only_in_manual_mode() {
        let mut console = console();
        console.execute("start", &[]);
        assert!(!console.execute("life", &[]).0);

        let mut console = manual_console();
        console.execute("start", &[]);
        console.execute("play", &["E5"]);
        let (success, response) = console.execute("life", &[]);
        assert!(success);
        assert_eq!(response, "removed 1 born 0");
        let (_, score) = console.execute("score", &[]);
        assert_eq!(score, "black -1 white 0");
    }

    #[test]
    fn test_game_over_and_restart() {
        let mut console = manual_console();
        console.execute("setup", &["turns", "2"]);
        console.execute("start", &[]);
        console.execute("play", &["A1"]);
        let (_, response) = console.execute("play", &["J9"]);
        assert!(response.ends_with("game over"), "{response}");
        assert_eq!(console.phase(), Phase::Finished);

        let (_, score) = console.execute("score", &[]);
        assert_eq!(score, "black 1 white 1 winner Tie");

        assert!(!console.execute("start", &[]).0);
        assert!(!console.execute("setup", &["turns", "3"]).0);

        assert!(console.execute("restart", &[]).0);
        assert_eq!(console.phase(), Phase::ChoosingSetup);
        let (_, status) = console.execute("status", &[]);
        assert_eq!(status, "setup size 9x9 turns 2 faces 6 mode manual");
        assert_eq!(console.game().board().stones(), 0);
        assert!(console.execute("start", &[]).0);
    }

    #[test]
    fn test_restart_refused_while_playing() {
        let mut console = manual_console();
        console.execute("start", &[]);
        console.execute("play", &["E5"]);

        let (success, response) = console.execute("restart", &[]);
        assert!(!success);
        assert_eq!(response, "game in progress");
        assert_eq!(console.phase(), Phase::InProgress);
        assert_eq!(console.game().board().stones(), 1);
    }

    #[test]
    fn test_run_loop() {
        let input = b"setup mode manual\n1 start\n# comment\n2 play D4\n3 bogus\nquit\nplay E5\n";
        let mut output = Vec::new();
        let mut console = console();
        console.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("=2 black D4\n"));
        assert!(text.contains("?3 unknown command: bogus\n"));
        assert!(!text.contains("E5"), "Input after quit is ignored");
        assert_eq!(console.game().turn(), 2);
    }
}
