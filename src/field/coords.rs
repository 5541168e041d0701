//! Tile and pixel coordinate types shared by the grid, neighbor and collision code

use std::fmt;

/// A position in tile space (column `x`, row `y`)
///
/// Coordinates are signed so that conversions and neighbor offsets can
/// produce positions outside the grid without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl TileCoord {
    /// Create a tile coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a `[dx, dy]` step, saturating at the `i32` range
    pub const fn offset(self, step: [i32; 2]) -> Self {
        Self {
            x: self.x.saturating_add(step[0]),
            y: self.y.saturating_add(step[1]),
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A position in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    /// Horizontal pixel position
    pub x: f32,
    /// Vertical pixel position
    pub y: f32,
}

impl PixelPoint {
    /// Create a pixel point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Tile layout used to map pixels onto cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Topology {
    /// Axis-aligned rectangular tiles
    #[default]
    Orthogonal,
    /// Diamond tiles, each row shifted by half a tile width
    Isometric,
    /// Flat-top hexagons with column-parity offsets
    Hexagonal,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Orthogonal => "orthogonal",
            Self::Isometric => "isometric",
            Self::Hexagonal => "hexagonal",
        };
        f.write_str(name)
    }
}

/// Pixel rectangle covered by a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl ViewRect {
    /// Check whether a pixel lies in the rectangle (right and bottom edges excluded)
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px - self.x < self.width && py - self.y < self.height
    }
}

/// Snapshot of one in-bounds grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    /// Tile-type code stored in the cell
    pub kind: i32,
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
    /// Cell width in pixels
    pub width: i32,
    /// Cell height in pixels
    pub height: i32,
}

impl TileCell {
    /// Pixel position of the cell's top-left corner
    pub const fn pixel_origin(&self) -> (i32, i32) {
        (
            self.x.saturating_mul(self.width),
            self.y.saturating_mul(self.height),
        )
    }
}
