//! Neighbor enumeration for rectangular and hexagonal grids
//!
//! Every query returns a value owned by the caller. The `_into` variant
//! writes into a caller-supplied buffer for allocation-free hot loops.

use crate::field::coords::TileCoord;

/// Orthogonal neighbor steps, clockwise from north: N, E, S, W
pub const ORTHOGONAL_STEPS: [[i32; 2]; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];

/// Diagonal neighbor steps: NW, NE, SE, SW
pub const DIAGONAL_STEPS: [[i32; 2]; 4] = [[-1, -1], [1, -1], [1, 1], [-1, 1]];

/// Hex neighbor offsets indexed by column parity (`x & 1`), then direction
pub const HEX_NEIGHBORS: [[[i32; 2]; 6]; 2] = [
    [[1, 1], [1, 0], [0, -1], [-1, 0], [-1, 1], [0, 1]],
    [[1, 0], [1, -1], [0, -1], [-1, -1], [-1, 0], [0, 1]],
];

/// Number of hex directions
pub const HEX_DIRECTIONS: usize = 6;

/// The four edge-adjacent neighbors in N, E, S, W order
pub const fn neighbors4(coord: TileCoord) -> [TileCoord; 4] {
    [
        coord.offset(ORTHOGONAL_STEPS[0]),
        coord.offset(ORTHOGONAL_STEPS[1]),
        coord.offset(ORTHOGONAL_STEPS[2]),
        coord.offset(ORTHOGONAL_STEPS[3]),
    ]
}

/// The eight surrounding neighbors: N, E, S, W, then NW, NE, SE, SW
pub const fn neighbors8(coord: TileCoord) -> [TileCoord; 8] {
    let [n, e, s, w] = neighbors4(coord);
    [
        n,
        e,
        s,
        w,
        coord.offset(DIAGONAL_STEPS[0]),
        coord.offset(DIAGONAL_STEPS[1]),
        coord.offset(DIAGONAL_STEPS[2]),
        coord.offset(DIAGONAL_STEPS[3]),
    ]
}

/// Neighbors of `coord` as a new vector, with diagonals when `diagonal` is set
pub fn neighbors(coord: TileCoord, diagonal: bool) -> Vec<TileCoord> {
    let mut out = Vec::with_capacity(if diagonal { 8 } else { 4 });
    neighbors_into(coord, diagonal, &mut out);
    out
}

/// Clear `out` and fill it with the neighbors of `coord`
pub fn neighbors_into(coord: TileCoord, diagonal: bool, out: &mut Vec<TileCoord>) {
    out.clear();
    if diagonal {
        out.extend_from_slice(&neighbors8(coord));
    } else {
        out.extend_from_slice(&neighbors4(coord));
    }
}

/// Hex offset for a column parity and direction, `None` past the sixth direction
pub fn hex_offset(column: i32, direction: usize) -> Option<[i32; 2]> {
    let parity = (column & 1) as usize;
    HEX_NEIGHBORS
        .get(parity)
        .and_then(|row| row.get(direction))
        .copied()
}

/// Hex neighbor of `coord` in `direction` (0..6), picked by the column's parity
pub fn hex_neighbor(coord: TileCoord, direction: usize) -> Option<TileCoord> {
    hex_offset(coord.x, direction).map(|step| coord.offset(step))
}

/// All six hex neighbors of `coord`
pub fn hex_neighbors(coord: TileCoord) -> [TileCoord; HEX_DIRECTIONS] {
    let table = if coord.x & 1 == 0 {
        HEX_NEIGHBORS[0]
    } else {
        HEX_NEIGHBORS[1]
    };
    table.map(|step| coord.offset(step))
}
