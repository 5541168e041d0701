//! Grid constants and runtime configuration defaults

// Tile geometry defaults
/// Default pixel width of one tile cell
pub const DEFAULT_TILE_WIDTH: i32 = 32;
/// Default pixel height of one tile cell
pub const DEFAULT_TILE_HEIGHT: i32 = 32;

/// Tile code reported for coordinates outside the grid
pub const OUT_OF_BOUNDS_TILE: i32 = -1;

/// Tile code written by `TileGrid::clear`
pub const DEFAULT_EMPTY_TILE: i32 = 0;

// Keeps every usize -> i32 conversion of a grid dimension lossless
/// Maximum allowed grid dimension on either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

// MAX_GRID_DIMENSION * MAX_TILE_SIZE stays below i32::MAX
/// Maximum allowed pixel size of a tile on either axis
pub const MAX_TILE_SIZE: i32 = 200_000;

/// Largest tile code the default PNG palette covers
pub const MAX_PALETTE_CODE: i32 = 65_535;

/// Minimum projection onto an axis for a heading to snap to that axis
pub const HEADING_THRESHOLD: f32 = 0.706;

/// Default grid name used in diagnostics
pub const DEFAULT_GRID_NAME: &str = "TileGrid";

// Map text format
/// Separator used when rendering and saving tile rows
pub const DEFAULT_SEPARATOR: char = ',';
/// Lines starting with this character are ignored by the map parser
pub const MAP_COMMENT_PREFIX: char = '#';

// Logging
/// Log filter used by the CLI when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used by the CLI with `--verbose`
pub const VERBOSE_LOG_FILTER: &str = "debug";
/// Log filter used by the CLI with `--quiet`
pub const QUIET_LOG_FILTER: &str = "error";

// PNG snapshot colors
/// Color of blocking tile types in the default palette
pub const BLOCKING_COLOR: [u8; 4] = [200, 40, 40, 255];
/// Color of passable, non-empty tile types in the default palette
pub const PASSABLE_COLOR: [u8; 4] = [128, 128, 128, 255];
/// Color of the empty tile and out-of-bounds cells
pub const TRANSPARENT_COLOR: [u8; 4] = [0, 0, 0, 0];
