//! Tests for swept body collision against blocking and out-of-bounds cells

#[cfg(test)]
mod tests {
    use tilefield::field::collision::Body;
    use tilefield::field::coords::TileCoord;
    use tilefield::field::grid::TileGrid;

    fn open_grid() -> TileGrid {
        let mut grid = TileGrid::filled(5, 5, 32, 32, 0).expect("Failed to build grid");
        grid.set_blocking_types(vec![1]);
        grid
    }

    // Tests a body sweeping onto a blocking cell reports that cell
    // Verified by skipping the blocking check in the scan
    #[test]
    fn test_sweep_hits_blocking_cell() {
        let mut grid = open_grid();
        grid.set_tile_type(2, 2, 1);
        let body = Body::new(32.0, 32.0, 32.0, 32.0);

        assert_eq!(
            grid.swept_collision(&body, 64.0, 64.0),
            Some(TileCoord::new(2, 2))
        );
        assert!(grid.has_collision(&body, 64.0, 64.0));
    }

    // Tests a sweep across passable cells is clear
    // Verified by treating every non-zero cell as blocking
    #[test]
    fn test_sweep_through_open_cells_is_clear() {
        let mut grid = open_grid();
        grid.set_tile_type(4, 4, 2);
        let body = Body::new(0.0, 0.0, 32.0, 32.0);

        assert_eq!(grid.swept_collision(&body, 128.0, 128.0), None);
        assert!(!grid.has_collision(&body, 96.0, 0.0));
    }

    // Tests leaving the grid counts as a hit on the outside cell
    // Verified by accepting out-of-bounds cells as passable
    #[test]
    fn test_sweep_out_of_bounds_is_hit() {
        let grid = open_grid();
        let body = Body::new(96.0, 0.0, 32.0, 32.0);
        assert_eq!(
            grid.swept_collision(&body, 129.0, 0.0),
            Some(TileCoord::new(5, 0))
        );

        let body = Body::new(0.0, 32.0, 32.0, 32.0);
        assert_eq!(
            grid.swept_collision(&body, -1.0, 32.0),
            Some(TileCoord::new(-1, 1))
        );
    }

    // Tests a fast body cannot pass through a one-cell wall
    // Verified by testing only the destination rectangle
    #[test]
    fn test_sweep_does_not_tunnel() {
        let mut grid = open_grid();
        grid.set_tile_type(2, 0, 1);
        let body = Body::new(0.0, 0.0, 32.0, 32.0);

        assert_eq!(
            grid.swept_collision(&body, 128.0, 0.0),
            Some(TileCoord::new(2, 0))
        );
        assert_eq!(
            grid.swept_collision(&body.moved_to(128.0, 0.0), 0.0, 0.0),
            Some(TileCoord::new(2, 0))
        );
    }

    // Tests cells are scanned column by column
    // Verified by swapping the scan loops
    #[test]
    fn test_sweep_scans_x_outer() {
        let mut grid = open_grid();
        grid.set_tile_type(2, 1, 1);
        grid.set_tile_type(1, 2, 1);
        let body = Body::new(32.0, 32.0, 32.0, 32.0);

        assert_eq!(
            grid.swept_collision(&body, 64.0, 64.0),
            Some(TileCoord::new(1, 2))
        );
    }

    // Tests the span covers start and end rectangles with the target rounded up
    // Verified by flooring the target instead of rounding up
    #[test]
    fn test_collision_span_rounds_target_up() {
        let grid = open_grid();
        let body = Body::new(0.0, 0.0, 32.0, 32.0);

        assert_eq!(
            grid.collision_span(&body, 0.0, 0.0),
            (TileCoord::new(0, 0), TileCoord::new(0, 0))
        );
        assert_eq!(
            grid.collision_span(&body, 0.5, 0.0),
            (TileCoord::new(0, 0), TileCoord::new(1, 0))
        );
        assert_eq!(
            grid.collision_span(&body.moved_to(64.0, 64.0), 40.2, 10.0),
            (TileCoord::new(1, 0), TileCoord::new(2, 2))
        );
    }

    // Tests a sub-pixel move onto a blocking neighbor is detected
    // Verified by dropping the ceiling on the target position
    #[test]
    fn test_fractional_move_reaches_neighbor() {
        let mut grid = open_grid();
        grid.set_tile_type(1, 0, 1);
        let body = Body::new(0.0, 0.0, 32.0, 32.0);

        assert!(!grid.has_collision(&body, 0.0, 0.0));
        assert_eq!(
            grid.swept_collision(&body, 0.5, 0.0),
            Some(TileCoord::new(1, 0))
        );
    }

    // Tests extreme targets and sizes stop at the grid edge without overflow
    // Verified by computing the span with integer pixel arithmetic
    #[test]
    fn test_sweep_extreme_inputs() {
        let grid = open_grid();
        let body = Body::new(0.0, 0.0, 32.0, 32.0);

        assert_eq!(
            grid.swept_collision(&body, f32::MAX, f32::MAX),
            Some(TileCoord::new(0, 5))
        );
        assert_eq!(
            grid.swept_collision(&body, f32::NEG_INFINITY, 0.0),
            Some(TileCoord::new(i32::MIN, 0))
        );
        assert_eq!(grid.swept_collision(&body, f32::NAN, f32::NAN), None);
        assert_eq!(
            grid.swept_collision(&Body::new(0.0, 0.0, f32::MAX, 32.0), 0.0, 0.0),
            Some(TileCoord::new(5, 0))
        );
        assert!(grid.has_collision(&body.moved_to(f32::MIN, f32::MIN), 0.0, 0.0));
    }
}
