//! Error types for game setup and rule refusals.

/// Errors raised while validating a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported board size {0}, expected 9, 13 or 19")]
    BoardSize(usize),

    #[error("unrecognized board size '{0}'")]
    UnknownBoardSize(String),

    #[error("max turns must be at least 1 (got {0})")]
    MaxTurns(u32),

    #[error("dice faces must be between 2 and 20 (got {0})")]
    DiceFaces(u32),

    #[error("unknown game mode '{0}', expected 'dice' or 'manual'")]
    UnknownMode(String),
}

/// Reasons the engine refuses an action. A refused action leaves the game
/// state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("no game in progress")]
    NotStarted,

    #[error("game has already started")]
    AlreadyStarted,

    #[error("game is over")]
    GameOver,

    #[error("point is off the board")]
    OutOfBounds,

    #[error("point is not empty")]
    Occupied,

    #[error("suicide")]
    Suicide,

    #[error("automaton can only be run by hand in manual mode")]
    NotManualMode,
}
