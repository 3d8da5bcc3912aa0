//! Go-Life: Go stone placement mixed with Conway's Game of Life.
//!
//! Two players alternate placing stones under the usual Go capture and
//! suicide rules. Every so often (on a die roll of 1, or on request in manual
//! mode) the whole board mutates by one Game-of-Life step in which newborn
//! stones take the majority color of their parents. After a fixed number of
//! turns, the stones left on the board are added to each player's running
//! score.
//!
//! ## Modules
//!
//! - [`constants`] - Board sizes, defaults and automaton rules
//! - [`board`] - Board, colors, points and vertex names
//! - [`group`] - Group and liberty analysis
//! - [`capture`] - Captures and the suicide rule
//! - [`automaton`] - Game-of-Life step with colored births
//! - [`scoring`] - Final stone count and winner
//! - [`dice`] - Die rolled after each turn in dice mode
//! - [`config`] - Setup options
//! - [`game`] - Turn controller and game state
//! - [`console`] - Text console front-end
//!
//! ## Example
//!
//! ```
//! use go_life::board::BoardSize;
//! use go_life::config::{GameConfig, GameMode};
//! use go_life::game::{new_game, place_stone};
//!
//! let config = GameConfig::new(BoardSize::Nine, 40, 6, GameMode::Manual);
//! let mut game = new_game(&config).unwrap();
//!
//! assert!(place_stone(&mut game, (4, 4)).is_ok());
//! assert!(place_stone(&mut game, (4, 4)).is_err()); // occupied
//! println!("{}", game.board());
//! ```

pub mod automaton;
pub mod board;
pub mod capture;
pub mod config;
pub mod console;
pub mod constants;
pub mod dice;
pub mod error;
pub mod game;
pub mod group;
pub mod scoring;
