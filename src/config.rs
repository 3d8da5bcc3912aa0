//! Game setup options.
//!
//! A [`GameConfig`] is what the setup screen collects before a game starts.
//! [`GameConfig::validate`] is strict; [`GameConfig::clamped`] repairs raw
//! user input the way the setup form does.

use std::fmt;
use std::str::FromStr;

use crate::board::BoardSize;
use crate::constants::{
    DEFAULT_DICE_FACES, DEFAULT_MAX_TURNS, MAX_DICE_FACES, MIN_DICE_FACES, MIN_MAX_TURNS,
};
use crate::error::ConfigError;

/// How automaton steps are triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// A die is rolled after every turn; rolling a 1 runs a step.
    #[default]
    Dice,
    /// Steps run only when a player asks for one.
    Manual,
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dice" => Ok(GameMode::Dice),
            "manual" => Ok(GameMode::Manual),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Dice => write!(f, "dice"),
            GameMode::Manual => write!(f, "manual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: BoardSize,
    /// Number of turns before the game ends.
    pub max_turns: u32,
    /// Faces on the die rolled in dice mode.
    pub dice_faces: u32,
    pub mode: GameMode,
    /// Seed for the die; `None` draws from system entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Nine,
            max_turns: DEFAULT_MAX_TURNS,
            dice_faces: DEFAULT_DICE_FACES,
            mode: GameMode::Dice,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: BoardSize, max_turns: u32, dice_faces: u32, mode: GameMode) -> Self {
        Self {
            board_size,
            max_turns,
            dice_faces,
            mode,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject turn or dice settings outside the accepted ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns < MIN_MAX_TURNS {
            return Err(ConfigError::MaxTurns(self.max_turns));
        }
        if !(MIN_DICE_FACES..=MAX_DICE_FACES).contains(&self.dice_faces) {
            return Err(ConfigError::DiceFaces(self.dice_faces));
        }
        Ok(())
    }

    /// Repair raw input: a zero turn count or face count falls back to the
    /// default, and face counts are clamped into range.
    pub fn clamped(mut self) -> Self {
        if self.max_turns == 0 {
            self.max_turns = DEFAULT_MAX_TURNS;
        }
        self.dice_faces = match self.dice_faces {
            0 => DEFAULT_DICE_FACES,
            n => n.clamp(MIN_DICE_FACES, MAX_DICE_FACES),
        };
        self
    }
}
