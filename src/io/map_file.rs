//! Plain-text tile map format
//!
//! One grid row per line, tile codes separated by commas and/or whitespace.
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use ndarray::Array2;

use crate::field::grid::{TileGrid, rows_to_array};
use crate::io::configuration::{DEFAULT_SEPARATOR, MAP_COMMENT_PREFIX};
use crate::io::error::{FieldError, Result, WithContext};

fn parse_row(line: &str, line_number: usize) -> Result<Vec<i32>> {
    line.split(|c: char| c == DEFAULT_SEPARATOR || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|source| FieldError::MapParse {
                line: line_number,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Parse map text into an array shaped `(rows, columns)`
///
/// # Errors
///
/// Returns `MapParse` for a token that is not an integer and
/// `InvalidMapData` when the text has no rows or the rows are ragged
pub fn parse_map(text: &str) -> Result<Array2<i32>> {
    let mut rows = Vec::new();
    let mut skipped = 0_usize;
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(MAP_COMMENT_PREFIX) {
            skipped += 1;
            continue;
        }
        rows.push(parse_row(trimmed, index + 1)?);
    }
    if skipped > 0 && !rows.is_empty() {
        log::debug!("Skipped {skipped} blank or comment lines in map text");
    }
    rows_to_array(&rows)
}

/// Read and parse a map file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or any `parse_map` error
pub fn load_map(path: &Path) -> Result<Array2<i32>> {
    let text = fs::read_to_string(path).with_path(path, "read map")?;
    let tiles = parse_map(&text)?;
    log::debug!(
        "Loaded {}x{} map from '{}'",
        tiles.ncols(),
        tiles.nrows(),
        path.display()
    );
    Ok(tiles)
}

/// Write a grid's cells in the map text format
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory or the file cannot be written
pub fn save_map(grid: &TileGrid, path: &Path) -> Result<()> {
    let separator = DEFAULT_SEPARATOR.to_string();
    let mut text = String::with_capacity(grid.size() * 3);
    for row in grid.tiles().rows() {
        let line = row
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        text.push_str(&line);
        text.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }
    fs::write(path, text).with_path(path, "write map")
}

impl TileGrid {
    /// Load a grid from a map file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the tile
    /// size is out of range
    pub fn from_map_file(path: &Path, tile_width: i32, tile_height: i32) -> Result<Self> {
        let mut grid = Self::from_array(load_map(path)?, tile_width, tile_height)?;
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            grid.set_name(stem);
        }
        Ok(grid)
    }
}
