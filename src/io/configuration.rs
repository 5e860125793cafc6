//! Format limits and rendering palette constants

// Guards allocation before any backing storage is reserved
/// Maximum allowed maze dimension in cells
pub const MAX_MAZE_DIMENSION: usize = 254;

// Dimensions used by --blank when none are given
/// Default width for blank mazes
pub const DEFAULT_MAZE_WIDTH: usize = 50;
/// Default height for blank mazes
pub const DEFAULT_MAZE_HEIGHT: usize = 15;

// xterm-256 foreground indices for colored rendering
/// Color index for coin blocks
pub const COLOR_COIN: u8 = 34;
/// Color index for danger blocks
pub const COLOR_DANGER: u8 = 196;
/// Color index for drill blocks
pub const COLOR_DRILL: u8 = 129;
/// Color index for structural blocks (floors, walls, the exit)
pub const COLOR_STRUCTURE: u8 = 245;
/// Color index for the player and its trail
pub const COLOR_PLAYER: u8 = 166;

/// Extension recognized when scanning a directory for maze files
pub const MAZE_EXTENSION: &str = "txt";
