//! Swept rectangle-versus-grid collision
//!
//! A moving body is tested against every cell covered by the union of its
//! start and end rectangles, so fast bodies cannot tunnel through thin walls.
//! Leaving the grid counts as hitting a wall.

use crate::field::coords::TileCoord;
use crate::field::grid::TileGrid;

/// Axis-aligned rectangle moving across the grid, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Body {
    /// Create a body
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same body at a new position
    #[must_use]
    pub const fn moved_to(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }
}

impl TileGrid {
    /// Inclusive tile span swept by `body` moving to `(target_x, target_y)`
    ///
    /// The target is rounded up to whole pixels before the span is taken.
    pub fn collision_span(
        &self,
        body: &Body,
        target_x: f32,
        target_y: f32,
    ) -> (TileCoord, TileCoord) {
        let target_x = target_x.ceil();
        let target_y = target_y.ceil();

        let from_x = body.x.min(target_x);
        let from_y = body.y.min(target_y);
        let to_x = body.x.max(target_x);
        let to_y = body.y.max(target_y);

        let from = TileCoord::new(
            self.pixels_to_tiles_width(from_x),
            self.pixels_to_tiles_height(from_y),
        );
        let to = TileCoord::new(
            self.pixels_to_tiles_width(to_x + body.width - 1.0),
            self.pixels_to_tiles_height(to_y + body.height - 1.0),
        );
        (from, to)
    }

    /// First cell hit by `body` moving to `(target_x, target_y)`
    ///
    /// Cells are scanned column by column (x outer, y inner). A cell outside
    /// the grid or holding a blocking type is a hit. Returns `None` when the
    /// whole span is clear.
    pub fn swept_collision(&self, body: &Body, target_x: f32, target_y: f32) -> Option<TileCoord> {
        let (from, to) = self.collision_span(body, target_x, target_y);
        let hit = (from.x..=to.x)
            .flat_map(|x| (from.y..=to.y).map(move |y| TileCoord::new(x, y)))
            .find(|cell| !self.contains(cell.x, cell.y) || self.is_blocking(cell.x, cell.y));
        if let Some(cell) = hit {
            log::trace!(
                "{} sweep to ({target_x}, {target_y}) hit {cell}",
                self.name()
            );
        }
        hit
    }

    /// Whether `body` moving to `(target_x, target_y)` hits anything
    pub fn has_collision(&self, body: &Body, target_x: f32, target_y: f32) -> bool {
        self.swept_collision(body, target_x, target_y).is_some()
    }
}
