//! Ray measurement from a peripheral point to the grid border.
use crate::grid::BinaryGrid;

pub const DIRECTION_COUNT: usize = 8;

/// `(row_delta, col_delta)` for N, NE, E, SE, S, SW, W, NW (clockwise from north).
pub const DIRECTION_DELTAS: [(isize, isize); DIRECTION_COUNT] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// In-bounds step counts per direction, ordered as [`DIRECTION_DELTAS`].
pub type RayLengths = [u32; DIRECTION_COUNT];

/// Count the cells between the point at `index` and the border in every
/// direction. Cell contents are ignored.
pub fn ray_lengths(grid: &BinaryGrid, index: usize) -> RayLengths {
    let (row, col) = grid.row_col(index);
    let mut lengths = [0u32; DIRECTION_COUNT];
    for (len, &(dr, dc)) in lengths.iter_mut().zip(DIRECTION_DELTAS.iter()) {
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while grid.in_bounds(r, c) {
            *len += 1;
            r += dr;
            c += dc;
        }
    }
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn direction_table_is_eight_distinct_unit_steps() {
        let distinct: HashSet<_> = DIRECTION_DELTAS.iter().collect();
        assert_eq!(distinct.len(), DIRECTION_COUNT);
        for &(dr, dc) in &DIRECTION_DELTAS {
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
        }
        // opposite directions are four entries apart
        for i in 0..4 {
            let (a, b) = (DIRECTION_DELTAS[i], DIRECTION_DELTAS[i + 4]);
            assert_eq!((a.0 + b.0, a.1 + b.1), (0, 0));
        }
    }

    #[test]
    fn corner_point_only_reaches_inward() {
        let grid = BinaryGrid::filled(5, false);
        assert_eq!(ray_lengths(&grid, 0), [0, 0, 4, 4, 4, 0, 0, 0]);
        assert_eq!(ray_lengths(&grid, 24), [4, 0, 0, 0, 0, 0, 4, 4]);
    }

    #[test]
    fn lengths_match_border_distances() {
        let n = 9;
        let grid = BinaryGrid::filled(n, true);
        let (row, col) = (2usize, 6usize);
        let last = (n - 1) as u32;
        let (r, c) = (row as u32, col as u32);
        let expected = [
            r,
            r.min(last - c),
            last - c,
            (last - r).min(last - c),
            last - r,
            (last - r).min(c),
            c,
            r.min(c),
        ];
        assert_eq!(ray_lengths(&grid, grid.index(row, col)), expected);
    }
}
