//! Tile grid core
//!
//! This module contains the grid and everything that queries it:
//! - Coordinate and cell value types
//! - The tile grid with pixel conversions for three layouts
//! - Neighbor enumeration for rectangular and hexagonal grids
//! - Logical directions and direction classification
//! - Swept collision between moving rectangles and the grid

/// Swept rectangle collision against blocking tiles
pub mod collision;
/// Tile and pixel coordinate types
pub mod coords;
/// Logical directions, angle tables and classifiers
pub mod direction;
/// Tile grid storage, access and coordinate conversion
pub mod grid;
/// Neighbor offset tables and enumeration
pub mod neighbors;

pub use collision::Body;
pub use coords::{PixelPoint, TileCell, TileCoord, Topology, ViewRect};
pub use direction::{Arity, Direction};
pub use grid::TileGrid;
