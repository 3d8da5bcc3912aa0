//! Constants for board sizes, game defaults, and neighbor offsets.
//!
//! The engine works on any of the three standard Go board sizes, chosen at
//! runtime when a game is created. Turn and dice limits mirror what the
//! setup screen accepts.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board sizes a game may be created with.
pub const BOARD_SIZES: [usize; 3] = [9, 13, 19];

// =============================================================================
// Game Defaults and Limits
// =============================================================================

/// Default number of turns before the game ends.
pub const DEFAULT_MAX_TURNS: u32 = 40;

/// Minimum number of turns a game may be configured with.
pub const MIN_MAX_TURNS: u32 = 1;

/// Default number of dice faces.
pub const DEFAULT_DICE_FACES: u32 = 6;

/// Fewest dice faces accepted at setup.
pub const MIN_DICE_FACES: u32 = 2;

/// Most dice faces accepted at setup.
pub const MAX_DICE_FACES: u32 = 20;

/// Dice face that triggers an automaton step in dice mode.
pub const AUTOMATON_TRIGGER: u32 = 1;

// =============================================================================
// Automaton Rules
// =============================================================================

/// Fewest occupied neighbors a stone needs to survive a step.
pub const SURVIVE_MIN: usize = 2;

/// Most occupied neighbors a stone may have and still survive a step.
pub const SURVIVE_MAX: usize = 3;

/// Exact occupied-neighbor count that makes an empty point give birth.
pub const BIRTH_COUNT: usize = 3;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Row/column offsets to the 4 orthogonal neighbors.
/// Order: North, East, South, West
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Row/column offsets to all 8 surrounding points (Moore neighborhood).
/// Order: NW, N, NE, W, E, SW, S, SE
pub const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
