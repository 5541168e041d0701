//! Tests for rectangular and hexagonal neighbor enumeration

#[cfg(test)]
mod tests {
    use tilefield::field::coords::TileCoord;
    use tilefield::field::neighbors::{
        HEX_DIRECTIONS, HEX_NEIGHBORS, hex_neighbor, hex_neighbors, hex_offset, neighbors,
        neighbors_into, neighbors4, neighbors8,
    };

    // Tests edge neighbors come in N, E, S, W order
    // Verified by listing west before east
    #[test]
    fn test_neighbors4_order() {
        let coord = TileCoord::new(3, 3);
        assert_eq!(
            neighbors4(coord),
            [
                TileCoord::new(3, 2),
                TileCoord::new(4, 3),
                TileCoord::new(3, 4),
                TileCoord::new(2, 3),
            ]
        );
    }

    // Tests every one of the eight neighbors is a distinct slot
    // Verified by writing every neighbor into the first slot
    #[test]
    fn test_neighbors8_fills_every_slot() {
        let coord = TileCoord::new(0, 0);
        let all = neighbors8(coord);
        assert_eq!(all[4], TileCoord::new(-1, -1));
        assert_eq!(all[5], TileCoord::new(1, -1));
        assert_eq!(all[6], TileCoord::new(1, 1));
        assert_eq!(all[7], TileCoord::new(-1, 1));

        for (i, a) in all.iter().enumerate() {
            assert_ne!(*a, coord);
            for b in all.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // Tests each query returns a fresh owned result
    // Verified by reusing a shared buffer between calls
    #[test]
    fn test_neighbors_results_are_independent() {
        let mut first = neighbors(TileCoord::new(1, 1), false);
        let second = neighbors(TileCoord::new(5, 5), true);
        first.clear();

        assert_eq!(second.len(), 8);
        assert_eq!(second[0], TileCoord::new(5, 4));
        assert_eq!(neighbors(TileCoord::new(1, 1), false).len(), 4);
    }

    // Tests the buffer variant clears previous contents
    // Verified by appending without clearing
    #[test]
    fn test_neighbors_into_clears_buffer() {
        let mut buffer = vec![TileCoord::new(99, 99); 3];
        neighbors_into(TileCoord::new(2, 2), false, &mut buffer);
        assert_eq!(buffer, neighbors4(TileCoord::new(2, 2)).to_vec());

        neighbors_into(TileCoord::new(2, 2), true, &mut buffer);
        assert_eq!(buffer, neighbors8(TileCoord::new(2, 2)).to_vec());
    }

    // Tests the hex offset table literally
    // Verified by swapping the parity rows
    #[test]
    fn test_hex_neighbor_table() {
        assert_eq!(HEX_NEIGHBORS[0][0], [1, 1]);
        assert_eq!(
            HEX_NEIGHBORS[0],
            [[1, 1], [1, 0], [0, -1], [-1, 0], [-1, 1], [0, 1]]
        );
        assert_eq!(
            HEX_NEIGHBORS[1],
            [[1, 0], [1, -1], [0, -1], [-1, -1], [-1, 0], [0, 1]]
        );
        assert_eq!(HEX_DIRECTIONS, 6);
    }

    // Tests hex neighbors pick the table row by column parity
    // Verified by using row parity instead of column parity
    #[test]
    fn test_hex_neighbor_parity() {
        assert_eq!(
            hex_neighbor(TileCoord::new(0, 0), 0),
            Some(TileCoord::new(1, 1))
        );
        assert_eq!(
            hex_neighbor(TileCoord::new(1, 0), 0),
            Some(TileCoord::new(2, 0))
        );
        assert_eq!(
            hex_neighbor(TileCoord::new(-1, 4), 1),
            Some(TileCoord::new(0, 3))
        );
        assert_eq!(hex_offset(2, 3), Some([-1, 0]));
        assert_eq!(hex_offset(3, 3), Some([-1, -1]));
    }

    // Tests directions past the sixth are rejected
    // Verified by wrapping the direction index
    #[test]
    fn test_hex_neighbor_invalid_direction() {
        assert_eq!(hex_neighbor(TileCoord::new(0, 0), HEX_DIRECTIONS), None);
        assert_eq!(hex_offset(1, 42), None);
    }

    // Tests all six hex neighbors agree with the single lookups
    // Verified by always using the even table
    #[test]
    fn test_hex_neighbors_matches_lookup() {
        for coord in [TileCoord::new(4, 4), TileCoord::new(5, 2)] {
            let all = hex_neighbors(coord);
            for (direction, neighbor) in all.iter().enumerate() {
                assert_eq!(hex_neighbor(coord, direction), Some(*neighbor));
            }
        }
    }

    // Tests neighbors of coordinates at the i32 limits saturate
    // Verified by using plain addition for neighbor steps
    #[test]
    fn test_neighbors_at_integer_limits() {
        let east_edge = TileCoord::new(i32::MAX, 0);
        assert_eq!(neighbors4(east_edge)[1], east_edge);
        let west_corner = TileCoord::new(i32::MIN, i32::MIN);
        assert_eq!(neighbors8(west_corner)[4], west_corner);

        assert_eq!(hex_neighbor(east_edge, 0), Some(east_edge));
        assert_eq!(
            hex_neighbors(TileCoord::new(i32::MIN, i32::MAX))[0],
            TileCoord::new(i32::MIN + 1, i32::MAX)
        );
        assert_eq!(neighbors(TileCoord::new(i32::MAX, i32::MAX), true).len(), 8);
    }
}
