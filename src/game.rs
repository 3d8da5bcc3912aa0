//! Turn controller: the game state machine.
//!
//! A game moves through [`Phase::ChoosingSetup`], [`Phase::InProgress`] and
//! [`Phase::Finished`]. [`setup`] (or [`reset`] of an earlier game) gives a
//! state that is still choosing its setup; [`start`] picks the board size and
//! begins play, and [`new_game`] does both at once. A running game is only
//! changed through [`place_stone`], [`pass_turn`] and
//! [`run_automaton_manually`]. Each call either commits a whole turn or
//! returns a [`Rejection`] and leaves the state exactly as it was.
//!
//! Scores are running totals: captures add to the mover, automaton removals
//! subtract from the stone's owner, and when the last turn ends every stone
//! still on the board is added to its owner's score.

use tracing::{debug, info, trace};

use crate::automaton::{self, Step};
use crate::board::{Board, BoardSize, Color, Point};
use crate::capture::{Placement, resolve_placement};
use crate::config::{GameConfig, GameMode};
use crate::constants::AUTOMATON_TRIGGER;
use crate::dice::Dice;
use crate::error::{ConfigError, Rejection};
use crate::scoring::{self, Winner};

/// Where a game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Setup options are being chosen; no stone can be played yet.
    ChoosingSetup,
    InProgress,
    Finished,
}

/// What an accepted turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Opponent stones captured by the placement (0 for a pass).
    pub captured: usize,
    /// Die result, in dice mode.
    pub dice_roll: Option<u32>,
    /// The automaton step triggered by the die, if any.
    pub automaton: Option<Step>,
    /// Whether this turn ended the game.
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: u32,
    max_turns: u32,
    current_player: Color,
    black_score: i32,
    white_score: i32,
    phase: Phase,
    last_dice_roll: Option<u32>,
    dice_faces: u32,
    mode: GameMode,
    automaton_notice: bool,
    dice: Dice,
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current turn number, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn black_score(&self) -> i32 {
        self.black_score
    }

    pub fn white_score(&self) -> i32 {
        self.white_score
    }

    pub fn score(&self, color: Color) -> i32 {
        match color {
            Color::Black => self.black_score,
            Color::White => self.white_score,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn last_dice_roll(&self) -> Option<u32> {
        self.last_dice_roll
    }

    pub fn dice_faces(&self) -> u32 {
        self.dice_faces
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Set when an automaton step has just run; the next turn clears it.
    pub fn automaton_notice(&self) -> bool {
        self.automaton_notice
    }

    /// Drop the automaton notice early, e.g. when a display timer expires.
    pub fn clear_automaton_notice(&mut self) {
        self.automaton_notice = false;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner on final scores, once the game is over.
    pub fn winner(&self) -> Option<Winner> {
        self.is_game_over()
            .then(|| scoring::winner(self.black_score, self.white_score))
    }

    fn add_score(&mut self, color: Color, delta: i32) {
        match color {
            Color::Black => self.black_score += delta,
            Color::White => self.white_score += delta,
        }
    }
}

/// A game waiting in [`Phase::ChoosingSetup`] with the given options.
///
/// The board has the configured size until [`start`] picks the real one.
pub fn setup(config: &GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;
    let dice = match config.seed {
        Some(seed) => Dice::with_seed(seed),
        None => Dice::new(),
    };
    Ok(GameState {
        board: Board::new(config.board_size),
        turn: 1,
        max_turns: config.max_turns,
        current_player: Color::Black,
        black_score: 0,
        white_score: 0,
        phase: Phase::ChoosingSetup,
        last_dice_roll: None,
        dice_faces: config.dice_faces,
        mode: config.mode,
        automaton_notice: false,
        dice,
    })
}

/// Choose the board size and begin play on an empty board with Black to move.
///
/// # Errors
/// [`Rejection::AlreadyStarted`] unless the game is still choosing its setup.
pub fn start(state: &mut GameState, size: BoardSize) -> Result<(), Rejection> {
    if state.phase != Phase::ChoosingSetup {
        return Err(Rejection::AlreadyStarted);
    }
    begin(state, size);
    Ok(())
}

/// Set up and start a game in one go, on the configured board size.
pub fn new_game(config: &GameConfig) -> Result<GameState, ConfigError> {
    let mut state = setup(config)?;
    begin(&mut state, config.board_size);
    Ok(state)
}

fn begin(state: &mut GameState, size: BoardSize) {
    state.board = Board::new(size);
    state.phase = Phase::InProgress;
    info!(
        size = %size,
        max_turns = state.max_turns,
        dice_faces = state.dice_faces,
        mode = %state.mode,
        "new game"
    );
}

/// Throw the game away and go back to [`Phase::ChoosingSetup`].
///
/// Board, turn, scores and dice result start over. The turn limit, dice
/// faces, mode and board size of the old game carry over as the new setup,
/// and the die keeps rolling from where it was.
pub fn reset(state: &GameState) -> GameState {
    debug!(phase = ?state.phase, "game reset");
    GameState {
        board: Board::new(state.board.board_size()),
        turn: 1,
        max_turns: state.max_turns,
        current_player: Color::Black,
        black_score: 0,
        white_score: 0,
        phase: Phase::ChoosingSetup,
        last_dice_roll: None,
        dice_faces: state.dice_faces,
        mode: state.mode,
        automaton_notice: false,
        dice: state.dice.clone(),
    }
}

/// Place a stone for the current player at `pt` and play out the turn.
///
/// # Errors
/// - [`Rejection::NotStarted`] - the game is still choosing its setup
/// - [`Rejection::GameOver`] - the game has finished
/// - [`Rejection::OutOfBounds`] - `pt` is off the board
/// - [`Rejection::Occupied`] - `pt` already holds a stone
/// - [`Rejection::Suicide`] - the stone would have no liberties and captures nothing
pub fn place_stone(state: &mut GameState, pt: Point) -> Result<TurnOutcome, Rejection> {
    let placement = check_placement(state, pt)?;
    let roll = roll_dice(state);
    Ok(commit_placement(state, placement, roll))
}

/// End the current player's turn without placing a stone.
///
/// Apart from the placement this is a full turn: in dice mode the die is
/// rolled and a roll of 1 runs an automaton step, and passing the last turn
/// finishes the game with the final tally.
pub fn pass_turn(state: &mut GameState) -> Result<TurnOutcome, Rejection> {
    ensure_in_progress(state)?;
    let roll = roll_dice(state);
    state.automaton_notice = false;
    let mut outcome = TurnOutcome {
        captured: 0,
        dice_roll: None,
        automaton: None,
        finished: false,
    };
    end_turn(state, roll, &mut outcome);
    Ok(outcome)
}

/// Run one automaton step right away. Only allowed in manual mode while the
/// game is running; the turn, player and dice are untouched.
pub fn run_automaton_manually(state: &mut GameState) -> Result<Step, Rejection> {
    ensure_in_progress(state)?;
    if state.mode != GameMode::Manual {
        return Err(Rejection::NotManualMode);
    }
    let step = automaton::step(&state.board);
    apply_step(state, &step);
    Ok(step)
}

fn ensure_in_progress(state: &GameState) -> Result<(), Rejection> {
    match state.phase {
        Phase::ChoosingSetup => Err(Rejection::NotStarted),
        Phase::InProgress => Ok(()),
        Phase::Finished => Err(Rejection::GameOver),
    }
}

fn check_placement(state: &GameState, pt: Point) -> Result<Placement, Rejection> {
    ensure_in_progress(state)?;
    resolve_placement(&state.board, pt, state.current_player).inspect_err(|reason| {
        trace!(?pt, player = %state.current_player, %reason, "placement rejected");
    })
}

fn roll_dice(state: &mut GameState) -> Option<u32> {
    match state.mode {
        GameMode::Dice => state.dice.roll(state.dice_faces),
        GameMode::Manual => None,
    }
}

fn commit_placement(state: &mut GameState, placement: Placement, roll: Option<u32>) -> TurnOutcome {
    state.automaton_notice = false;
    state.board = placement.board;
    let mover = state.current_player;
    state.add_score(mover, placement.captured as i32);

    let mut outcome = TurnOutcome {
        captured: placement.captured,
        dice_roll: None,
        automaton: None,
        finished: false,
    };
    end_turn(state, roll, &mut outcome);
    outcome
}

/// Dice, turn counter, and game-over handling shared by every kind of turn.
fn end_turn(state: &mut GameState, roll: Option<u32>, outcome: &mut TurnOutcome) {
    match state.mode {
        GameMode::Dice => {
            state.last_dice_roll = roll;
            outcome.dice_roll = roll;
            if let Some(r) = roll {
                debug!(roll = r, faces = state.dice_faces, "dice rolled");
            }
            if roll == Some(AUTOMATON_TRIGGER) {
                let step = automaton::step(&state.board);
                apply_step(state, &step);
                outcome.automaton = Some(step);
            }
        }
        GameMode::Manual => state.last_dice_roll = None,
    }

    state.turn += 1;
    if state.turn > state.max_turns {
        finish(state);
        outcome.finished = true;
    } else {
        state.current_player = state.current_player.opponent();
    }
}

fn apply_step(state: &mut GameState, step: &Step) {
    state.board = step.board.clone();
    state.add_score(Color::Black, step.score_delta(Color::Black));
    state.add_score(Color::White, step.score_delta(Color::White));
    state.automaton_notice = true;
}

fn finish(state: &mut GameState) {
    let count = scoring::tally(&state.board);
    state.black_score += count.black as i32;
    state.white_score += count.white as i32;
    state.phase = Phase::Finished;
    info!(
        black = state.black_score,
        white = state.white_score,
        winner = %scoring::winner(state.black_score, state.white_score),
        "game over"
    );
}
