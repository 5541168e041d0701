//! Tile-map grid with coordinate conversion, neighbor queries and swept collision
//!
//! A `TileGrid` stores one integer tile code per cell together with the
//! pixel size of a cell and the set of tile codes that block movement.
//! It maps pixels onto cells for orthogonal, isometric and hexagonal
//! layouts and answers "what does this moving rectangle hit" queries.

#![forbid(unsafe_code)]

/// Tile grid, coordinates, neighbors, directions and collision
pub mod field;
/// Input/output operations and error handling
pub mod io;

pub use field::{Arity, Body, Direction, PixelPoint, TileCoord, TileGrid, Topology};
pub use io::error::{FieldError, Result};
