//! Tile-type grid with pixel geometry and blocking rules
//!
//! Stores one integer tile code per cell in an `Array2` indexed `[row, col]`
//! (that is `[y, x]`). Width and height are always read from the backing
//! array, so the dimensions can never disagree with the stored cells.
//! Queries outside the grid return `OUT_OF_BOUNDS_TILE` instead of failing.
//! Pixel lookups treat non-finite pixels as outside the grid, and integer
//! pixel arithmetic saturates at the `i32` range.

use std::fmt;

use ndarray::Array2;

use crate::field::coords::{PixelPoint, TileCell, TileCoord, Topology, ViewRect};
use crate::field::neighbors::hex_offset;
use crate::io::configuration::{
    DEFAULT_EMPTY_TILE, DEFAULT_GRID_NAME, DEFAULT_SEPARATOR, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, MAX_GRID_DIMENSION, MAX_TILE_SIZE, OUT_OF_BOUNDS_TILE,
};
use crate::io::error::{FieldError, Result, invalid_map_data};

/// Rectangular tile map with tile pixel size, blocking types and a pixel offset
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Array2<i32>,
    tile_width: i32,
    tile_height: i32,
    blocking_types: Vec<i32>,
    offset: [i32; 2],
    name: String,
}

fn validate_tile_size(tile_width: i32, tile_height: i32) -> Result<()> {
    let valid = 1..=MAX_TILE_SIZE;
    if valid.contains(&tile_width) && valid.contains(&tile_height) {
        Ok(())
    } else {
        Err(FieldError::InvalidTileSize {
            width: tile_width,
            height: tile_height,
        })
    }
}

fn validate_tiles(tiles: &Array2<i32>) -> Result<()> {
    let (rows, cols) = tiles.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_map_data(&format!(
            "grid must have at least one cell (got {cols}x{rows})"
        )));
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_map_data(&format!(
            "grid {cols}x{rows} exceeds the maximum dimension {MAX_GRID_DIMENSION}"
        )));
    }
    Ok(())
}

/// Flatten row-major tile rows into an array, rejecting ragged input
///
/// # Errors
///
/// Returns `InvalidMapData` if there are no rows, the first row is empty,
/// or any row's length differs from the first row's
pub fn rows_to_array<R: AsRef<[i32]>>(rows: &[R]) -> Result<Array2<i32>> {
    let width = rows.first().map_or(0, |row| row.as_ref().len());
    if width == 0 {
        return Err(invalid_map_data(&"map has no tile rows"));
    }
    let mut cells = Vec::with_capacity(width * rows.len());
    for (index, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != width {
            return Err(invalid_map_data(&format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }
        cells.extend_from_slice(row);
    }
    Array2::from_shape_vec((rows.len(), width), cells)
        .map_err(|e| invalid_map_data(&format!("cannot shape tile rows: {e}")))
}

impl TileGrid {
    /// Build a grid from row-major tile rows
    ///
    /// Width comes from the first row and height from the number of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty or ragged, the grid is larger
    /// than `MAX_GRID_DIMENSION`, or either tile size is outside
    /// `1..=MAX_TILE_SIZE`
    pub fn from_rows<R: AsRef<[i32]>>(
        rows: &[R],
        tile_width: i32,
        tile_height: i32,
    ) -> Result<Self> {
        Self::from_array(rows_to_array(rows)?, tile_width, tile_height)
    }

    /// Build a grid from an array shaped `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no cells, is larger than
    /// `MAX_GRID_DIMENSION`, or either tile size is outside
    /// `1..=MAX_TILE_SIZE`
    pub fn from_array(tiles: Array2<i32>, tile_width: i32, tile_height: i32) -> Result<Self> {
        validate_tile_size(tile_width, tile_height)?;
        validate_tiles(&tiles)?;
        let grid = Self {
            tiles,
            tile_width,
            tile_height,
            blocking_types: Vec::new(),
            offset: [0, 0],
            name: DEFAULT_GRID_NAME.to_string(),
        };
        log::debug!(
            "Created {} {}x{} ({}x{} px tiles)",
            grid.name,
            grid.width(),
            grid.height(),
            tile_width,
            tile_height
        );
        Ok(grid)
    }

    /// Build a `width x height` grid with every cell set to `value`
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`, or either tile size is outside
    /// `1..=MAX_TILE_SIZE`
    pub fn filled(
        width: usize,
        height: usize,
        tile_width: i32,
        tile_height: i32,
        value: i32,
    ) -> Result<Self> {
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(invalid_map_data(&format!(
                "grid {width}x{height} exceeds the maximum dimension {MAX_GRID_DIMENSION}"
            )));
        }
        Self::from_array(
            Array2::from_elem((height, width), value),
            tile_width,
            tile_height,
        )
    }

    /// Build a `width x height` grid of unset cells with the default tile size
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        Self::filled(
            width,
            height,
            DEFAULT_TILE_WIDTH,
            DEFAULT_TILE_HEIGHT,
            OUT_OF_BOUNDS_TILE,
        )
    }

    /// Independent copy of this grid
    ///
    /// Cells, tile size, blocking types, offset and name are all duplicated.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    /// Replace this grid's cells and tile size with copies of `other`'s
    pub fn copy_from(&mut self, other: &Self) {
        self.tiles.clone_from(&other.tiles);
        self.tile_width = other.tile_width;
        self.tile_height = other.tile_height;
    }

    /// Replace the backing tile array
    ///
    /// The grid is left untouched when the replacement is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the array has no cells or exceeds `MAX_GRID_DIMENSION`
    pub fn set(&mut self, tiles: Array2<i32>) -> Result<()> {
        validate_tiles(&tiles)?;
        self.tiles = tiles;
        log::debug!(
            "Replaced {} storage, now {}x{}",
            self.name,
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// Replace the backing tiles from row-major rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are empty, ragged or too large
    pub fn set_rows<R: AsRef<[i32]>>(&mut self, rows: &[R]) -> Result<()> {
        self.set(rows_to_array(rows)?)
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: i32) {
        self.tiles.fill(value);
    }

    /// Overwrite every cell with the empty tile code
    pub fn clear(&mut self) {
        self.fill(DEFAULT_EMPTY_TILE);
    }

    /// Width in tiles
    pub fn width(&self) -> i32 {
        self.tiles.ncols() as i32
    }

    /// Height in tiles
    pub fn height(&self) -> i32 {
        self.tiles.nrows() as i32
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Read-only view of the backing array, shaped `(height, width)`
    pub const fn tiles(&self) -> &Array2<i32> {
        &self.tiles
    }

    /// Owned row-major copy of the cells
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.tiles.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Tile width in pixels
    pub const fn tile_width(&self) -> i32 {
        self.tile_width
    }

    /// Tile height in pixels
    pub const fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Change the tile pixel size without touching the cells
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if either value is outside `1..=MAX_TILE_SIZE`
    pub fn set_tile_size(&mut self, tile_width: i32, tile_height: i32) -> Result<()> {
        validate_tile_size(tile_width, tile_height)?;
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        log::debug!("{} tile size set to {tile_width}x{tile_height}", self.name);
        Ok(())
    }

    /// Change the tile pixel width
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if `tile_width` is outside `1..=MAX_TILE_SIZE`
    pub fn set_tile_width(&mut self, tile_width: i32) -> Result<()> {
        self.set_tile_size(tile_width, self.tile_height)
    }

    /// Change the tile pixel height
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileSize` if `tile_height` is outside `1..=MAX_TILE_SIZE`
    pub fn set_tile_height(&mut self, tile_height: i32) -> Result<()> {
        self.set_tile_size(self.tile_width, tile_height)
    }

    /// Grid width in pixels
    pub fn draw_width(&self) -> i32 {
        self.tiles_to_width_pixels(self.width())
    }

    /// Grid height in pixels
    pub fn draw_height(&self) -> i32 {
        self.tiles_to_height_pixels(self.height())
    }

    /// Pixel rectangle covered by the grid, anchored at the origin
    pub fn view_rect(&self) -> ViewRect {
        ViewRect {
            x: 0,
            y: 0,
            width: self.draw_width(),
            height: self.draw_height(),
        }
    }

    /// Whether a pixel lies inside the grid's pixel rectangle
    ///
    /// Non-finite pixels are never inside.
    pub fn inside(&self, px: f32, py: f32) -> bool {
        (0.0..self.draw_width() as f32).contains(&px)
            && (0.0..self.draw_height() as f32).contains(&py)
    }

    /// Usable width of a hexagonal layout, in tiles
    pub fn hex_width(&self) -> i32 {
        (self.width() as f32 / 3.0 * 2.0).floor() as i32
    }

    /// Usable height of a hexagonal layout, in tiles
    pub fn hex_height(&self) -> i32 {
        (self.height() as f32 / 3.0_f32.sqrt()).floor() as i32 - 1
    }

    /// Diagnostic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the diagnostic name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Pixel offset of the grid inside its parent view
    pub const fn offset(&self) -> [i32; 2] {
        self.offset
    }

    /// Set the pixel offset of the grid inside its parent view
    pub const fn set_offset(&mut self, offset: [i32; 2]) {
        self.offset = offset;
    }

    /// Parent-space x pixel translated into grid-local space
    pub const fn offset_x_pixel(&self, x: i32) -> i32 {
        x.saturating_sub(self.offset[0])
    }

    /// Parent-space y pixel translated into grid-local space
    pub const fn offset_y_pixel(&self, y: i32) -> i32 {
        y.saturating_sub(self.offset[1])
    }

    /// Parent-space pixel translated into grid-local space
    pub fn to_local_pixel(&self, point: PixelPoint) -> PixelPoint {
        PixelPoint::new(
            point.x - self.offset[0] as f32,
            point.y - self.offset[1] as f32,
        )
    }

    /// Whether `(x, y)` addresses a cell
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Whether a column index lies outside the grid
    pub fn not_width(&self, x: i32) -> bool {
        x < 0 || x >= self.width()
    }

    /// Whether a row index lies outside the grid
    pub fn not_height(&self, y: i32) -> bool {
        y < 0 || y >= self.height()
    }

    fn index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        self.contains(x, y).then(|| [y as usize, x as usize])
    }

    /// Tile code at `(x, y)`, or `OUT_OF_BOUNDS_TILE` outside the grid
    pub fn tile_type(&self, x: i32, y: i32) -> i32 {
        self.index(x, y)
            .and_then(|index| self.tiles.get(index).copied())
            .unwrap_or(OUT_OF_BOUNDS_TILE)
    }

    /// Write a tile code; out-of-bounds writes are ignored
    pub fn set_tile_type(&mut self, x: i32, y: i32, kind: i32) {
        if let Some(cell) = self
            .index(x, y)
            .and_then(|index| self.tiles.get_mut(index))
        {
            *cell = kind;
        }
    }

    /// Whether the cell at `(x, y)` holds `kind`
    pub fn is_tile_type(&self, x: i32, y: i32, kind: i32) -> bool {
        self.tile_type(x, y) == kind
    }

    /// Tile codes treated as impassable, in insertion order
    pub fn blocking_types(&self) -> &[i32] {
        &self.blocking_types
    }

    /// Replace the list of impassable tile codes
    pub fn set_blocking_types(&mut self, kinds: impl Into<Vec<i32>>) {
        self.blocking_types = kinds.into();
    }

    /// Mark one more tile code as impassable
    pub fn add_blocking_type(&mut self, kind: i32) {
        if !self.blocking_types.contains(&kind) {
            self.blocking_types.push(kind);
        }
    }

    /// Whether the cell holds a blocking tile
    ///
    /// Out-of-bounds cells are not blocking here; sweeps treat them as walls.
    pub fn is_blocking(&self, x: i32, y: i32) -> bool {
        let kind = self.tile_type(x, y);
        kind != OUT_OF_BOUNDS_TILE && self.blocking_types.contains(&kind)
    }

    /// Snapshot of the cell at `(x, y)`, `None` outside the grid
    pub fn tile(&self, x: i32, y: i32) -> Option<TileCell> {
        self.contains(x, y).then(|| TileCell {
            kind: self.tile_type(x, y),
            x,
            y,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    // Non-finite pixels address no cell
    fn pixel_cell(&self, px: f32, py: f32) -> Option<TileCoord> {
        (px.is_finite() && py.is_finite()).then(|| self.orthogonal_to_tile(px, py))
    }

    /// Snapshot of the cell under a pixel
    pub fn pixel_tile(&self, px: f32, py: f32) -> Option<TileCell> {
        self.pixel_cell(px, py)
            .and_then(|coord| self.tile(coord.x, coord.y))
    }

    /// Tile code of the cell under a pixel
    pub fn pixel_tile_type(&self, px: f32, py: f32) -> i32 {
        self.pixel_cell(px, py)
            .map_or(OUT_OF_BOUNDS_TILE, |coord| self.tile_type(coord.x, coord.y))
    }

    /// Whether the cell under a pixel holds a blocking tile
    pub fn is_pixel_blocking(&self, px: f32, py: f32) -> bool {
        self.pixel_cell(px, py)
            .is_some_and(|coord| self.is_blocking(coord.x, coord.y))
    }

    /// The pixel itself when its cell is passable, `None` when it is blocking
    pub fn pixel_limit_pos(&self, px: f32, py: f32) -> Option<PixelPoint> {
        (!self.is_pixel_blocking(px, py)).then_some(PixelPoint::new(px, py))
    }

    /// Column containing a pixel x position
    pub fn pixels_to_tiles_width(&self, px: f32) -> i32 {
        (px / self.tile_width as f32).floor() as i32
    }

    /// Row containing a pixel y position
    pub fn pixels_to_tiles_height(&self, py: f32) -> i32 {
        (py / self.tile_height as f32).floor() as i32
    }

    /// Left pixel edge of a column, saturating at the `i32` range
    pub const fn tiles_to_width_pixels(&self, tiles: i32) -> i32 {
        tiles.saturating_mul(self.tile_width)
    }

    /// Top pixel edge of a row, saturating at the `i32` range
    pub const fn tiles_to_height_pixels(&self, tiles: i32) -> i32 {
        tiles.saturating_mul(self.tile_height)
    }

    /// Pixel offset of a fractional column count, truncated
    pub fn tiles_to_width_pixels_f(&self, tiles: f32) -> i32 {
        (tiles * self.tile_width as f32) as i32
    }

    /// Pixel offset of a fractional row count, truncated
    pub fn tiles_to_height_pixels_f(&self, tiles: f32) -> i32 {
        (tiles * self.tile_height as f32) as i32
    }

    /// Cell containing a pixel in an orthogonal layout
    pub fn orthogonal_to_tile(&self, px: f32, py: f32) -> TileCoord {
        TileCoord::new(self.pixels_to_tiles_width(px), self.pixels_to_tiles_height(py))
    }

    /// Top-left pixel of a cell in an orthogonal layout
    pub const fn tile_to_pixel(&self, tx: i32, ty: i32) -> (i32, i32) {
        (self.tiles_to_width_pixels(tx), self.tiles_to_height_pixels(ty))
    }

    /// Cell containing a pixel in an isometric layout
    ///
    /// Forward-only: there is no exact inverse.
    pub fn isometric_to_tile(&self, px: f32, py: f32) -> TileCoord {
        let tile_width = self.tile_width as f32;
        let tile_height = self.tile_height as f32;
        let hx = (px / (tile_width * 0.5)).floor() as i32;
        let hy = ((py - hx as f32 * (tile_height / 2.0)) / tile_height).floor() as i32;
        TileCoord::new(hx.saturating_add(hy), hy)
    }

    /// Cell containing a pixel in a flat-top hexagonal layout
    ///
    /// Forward-only: there is no exact inverse.
    pub fn hexagon_to_tile(&self, px: f32, py: f32) -> TileCoord {
        let scale = 3.0_f32.sqrt() / 3.0;
        let hx = (2.0 * px / (3.0 * self.tile_width as f32)).floor() as i32;
        // Parity term keeps the sign of hx
        let parity = (hx % 2) as f32;
        let hy = ((scale * py / self.tile_height as f32 + parity) * scale) as i32;
        TileCoord::new(hx, hy)
    }

    /// Cell containing a pixel under the given layout
    pub fn pixel_to_tile(&self, topology: Topology, px: f32, py: f32) -> TileCoord {
        match topology {
            Topology::Orthogonal => self.orthogonal_to_tile(px, py),
            Topology::Isometric => self.isometric_to_tile(px, py),
            Topology::Hexagonal => self.hexagon_to_tile(px, py),
        }
    }

    fn isometric_cell(&self, px: f32, py: f32) -> Option<TileCoord> {
        let half_width = self.draw_width() as f32 * 0.5;
        let in_area = (0.0..half_width).contains(&px)
            && (0.0..self.draw_height() as f32).contains(&py);
        in_area.then(|| self.isometric_to_tile(px, py))
    }

    /// Tile code under a pixel of an isometric layout
    ///
    /// Pixels outside the isometric drawing area give `OUT_OF_BOUNDS_TILE`.
    pub fn isometric_tile_type(&self, px: f32, py: f32) -> i32 {
        self.isometric_cell(px, py)
            .map_or(OUT_OF_BOUNDS_TILE, |coord| self.tile_type(coord.x, coord.y))
    }

    /// Write the tile code under a pixel of an isometric layout
    pub fn set_isometric_tile_type(&mut self, px: f32, py: f32, kind: i32) {
        if let Some(coord) = self.isometric_cell(px, py) {
            self.set_tile_type(coord.x, coord.y, kind);
        }
    }

    fn hex_neighbor_cell(&self, px: f32, py: f32, direction: usize) -> Option<TileCoord> {
        if !(px.is_finite() && py.is_finite()) {
            return None;
        }
        let origin = self.hexagon_to_tile(px, py);
        let neighbor = origin.offset(hex_offset(origin.x, direction)?);
        let in_hex_bounds = neighbor.x >= 0
            && neighbor.x < self.hex_width()
            && neighbor.y >= 0
            && neighbor.y < self.hex_height();
        in_hex_bounds.then_some(neighbor)
    }

    /// Tile code of the hex neighbor of the cell under a pixel
    ///
    /// Returns `OUT_OF_BOUNDS_TILE` for invalid directions and for neighbors
    /// outside the hexagonal bounds.
    pub fn neighbor_type(&self, px: f32, py: f32, direction: usize) -> i32 {
        self.hex_neighbor_cell(px, py, direction)
            .map_or(OUT_OF_BOUNDS_TILE, |coord| self.tile_type(coord.x, coord.y))
    }

    /// Write the tile code of the hex neighbor of the cell under a pixel
    pub fn set_neighbor_type(&mut self, px: f32, py: f32, direction: usize, kind: i32) {
        if let Some(coord) = self.hex_neighbor_cell(px, py, direction) {
            self.set_tile_type(coord.x, coord.y, kind);
        }
    }

    /// Render the cells one row per line, values joined by `separator`
    pub fn to_string_with(&self, separator: char) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }
        let separator = separator.to_string();
        let mut buffer = String::with_capacity(self.size() * 2 + self.tiles.nrows() + 4);
        buffer.push('[');
        buffer.push('\n');
        for row in self.tiles.rows() {
            let line = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(separator.as_str());
            buffer.push_str(&line);
            buffer.push('\n');
        }
        buffer.push(']');
        buffer
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(DEFAULT_SEPARATOR))
    }
}
