//! Tests for coordinate value types

#[cfg(test)]
mod tests {
    use tilefield::field::coords::{TileCell, TileCoord, Topology, ViewRect};

    // Tests offsets translate both axes
    // Verified by ignoring the y component
    #[test]
    fn test_tile_coord_offset() {
        let coord = TileCoord::new(2, 3);
        assert_eq!(coord.offset([1, -4]), TileCoord::new(3, -1));
        assert_eq!(TileCoord::from((7, 8)), TileCoord::new(7, 8));
        assert_eq!(coord.to_string(), "(2, 3)");
    }

    // Tests the rectangle excludes its right and bottom edges
    // Verified by using inclusive edge comparisons
    #[test]
    fn test_view_rect_contains() {
        let rect = ViewRect {
            x: 10,
            y: 20,
            width: 30,
            height: 40,
        };
        assert!(rect.contains(10, 20));
        assert!(rect.contains(39, 59));
        assert!(!rect.contains(40, 30));
        assert!(!rect.contains(20, 60));
        assert!(!rect.contains(9, 30));
    }

    // Tests a cell snapshot reports its pixel corner
    // Verified by swapping width and height in the origin
    #[test]
    fn test_tile_cell_pixel_origin() {
        let cell = TileCell {
            kind: 3,
            x: 2,
            y: 5,
            width: 32,
            height: 16,
        };
        assert_eq!(cell.pixel_origin(), (64, 80));
    }

    // Tests topology defaults and names
    // Verified by defaulting to isometric
    #[test]
    fn test_topology_default_and_display() {
        assert_eq!(Topology::default(), Topology::Orthogonal);
        assert_eq!(Topology::Isometric.to_string(), "isometric");
        assert_eq!(Topology::Hexagonal.to_string(), "hexagonal");
    }

    // Tests coordinate arithmetic saturates at the i32 range
    // Verified by using plain addition in offset
    #[test]
    fn test_coordinate_extremes_saturate() {
        let corner = TileCoord::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset([1, -1]), corner);
        assert_eq!(corner.offset([-1, 1]), TileCoord::new(i32::MAX - 1, i32::MIN + 1));

        let cell = TileCell {
            kind: 0,
            x: i32::MAX,
            y: i32::MIN,
            width: 32,
            height: 32,
        };
        assert_eq!(cell.pixel_origin(), (i32::MAX, i32::MIN));
    }
}
