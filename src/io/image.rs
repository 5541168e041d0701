//! PNG snapshot of a grid's tile codes, one pixel per cell

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::field::grid::TileGrid;
use crate::io::configuration::{
    BLOCKING_COLOR, DEFAULT_EMPTY_TILE, MAX_PALETTE_CODE, OUT_OF_BOUNDS_TILE, PASSABLE_COLOR,
    TRANSPARENT_COLOR,
};
use crate::io::error::{FieldError, Result, WithContext};

/// Palette covering every tile code present in `grid`
///
/// Blocking types are red, the empty tile is transparent and every other
/// code is grey. Index `k` holds the color of tile code `k`.
///
/// # Errors
///
/// Returns `InvalidTileIndex` if the grid holds a code above `MAX_PALETTE_CODE`
pub fn default_palette(grid: &TileGrid) -> Result<Vec<[u8; 4]>> {
    let max_code = grid.tiles().iter().copied().max().unwrap_or(OUT_OF_BOUNDS_TILE);
    if max_code > MAX_PALETTE_CODE {
        return Err(FieldError::InvalidTileIndex {
            index: max_code,
            max_tiles: MAX_PALETTE_CODE as usize + 1,
        });
    }
    let palette = (0..=max_code)
        .map(|code| {
            if grid.blocking_types().contains(&code) {
                BLOCKING_COLOR
            } else if code == DEFAULT_EMPTY_TILE {
                TRANSPARENT_COLOR
            } else {
                PASSABLE_COLOR
            }
        })
        .collect();
    Ok(palette)
}

fn cell_color(kind: i32, palette: &[[u8; 4]]) -> Result<Rgba<u8>> {
    if kind == OUT_OF_BOUNDS_TILE {
        return Ok(Rgba(TRANSPARENT_COLOR));
    }
    usize::try_from(kind)
        .ok()
        .and_then(|index| palette.get(index))
        .map(|&rgba| Rgba(rgba))
        .ok_or(FieldError::InvalidTileIndex {
            index: kind,
            max_tiles: palette.len(),
        })
}

/// Export the grid as a PNG with one pixel per cell
///
/// Tile code `k >= 0` is drawn with `palette[k]`. `OUT_OF_BOUNDS_TILE`
/// cells are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - A tile code other than `OUT_OF_BOUNDS_TILE` has no palette entry
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, palette: &[[u8; 4]], output_path: &Path) -> Result<()> {
    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &kind) in grid.tiles().indexed_iter() {
        img.put_pixel(col as u32, row as u32, cell_color(kind, palette)?);
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path).with_path(output_path, "export image")?;
    log::debug!(
        "Exported {}x{} snapshot of {} to '{}'",
        width,
        height,
        grid.name(),
        output_path.display()
    );
    Ok(())
}
