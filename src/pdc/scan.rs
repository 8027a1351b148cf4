//! Boundary scanners locating the leading edge of the `k`-th ink run.
//!
//! Every scanner returns one entry per scan line, `None` when the line holds
//! fewer than `layer + 1` ink runs. Entries are linear grid indices.
use crate::grid::BinaryGrid;
use serde::{Deserialize, Serialize};

/// Scan axis: horizontal scans produce one result per row, vertical per column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Walking direction along a cardinal scan line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Traversal {
    /// Left→right or top→bottom.
    Forward,
    /// Right→left or bottom→top.
    Backward,
}

/// Corner a family of diagonal scan lines is anchored at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// `(row_delta, col_delta)` pointing from the corner into the grid.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Corner::TopLeft => (1, 1),
            Corner::TopRight => (1, -1),
            Corner::BottomLeft => (-1, 1),
            Corner::BottomRight => (-1, -1),
        }
    }

    /// Seeds for the diagonal lines of this family.
    ///
    /// The horizontal edge through the corner contributes its `⌈S/2⌉` cells
    /// nearest the corner (columns in ascending order), followed by the same
    /// number of cells of the vertical edge (rows ascending). The corner cell
    /// seeds one line from each edge.
    pub fn seeds(self, size: usize) -> Vec<(usize, usize)> {
        if size == 0 {
            return Vec::new();
        }
        let half = size.div_ceil(2);
        let last = size - 1;
        let (edge_row, side_col) = match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (0, last),
            Corner::BottomLeft => (last, 0),
            Corner::BottomRight => (last, last),
        };
        let cols = if side_col == 0 { 0..half } else { size - half..size };
        let rows = if edge_row == 0 { 0..half } else { size - half..size };

        let mut seeds = Vec::with_capacity(2 * half);
        seeds.extend(cols.map(|col| (edge_row, col)));
        seeds.extend(rows.map(|row| (row, side_col)));
        seeds
    }
}

/// Follow `line` and return the index where the `layer`-th ink run begins.
fn leading_edge(
    grid: &BinaryGrid,
    line: impl IntoIterator<Item = usize>,
    layer: usize,
) -> Option<usize> {
    let mut in_body = false;
    let mut passed_layers = 0usize;
    for index in line {
        let ink = grid.get_index(index);
        if ink && !in_body {
            in_body = true;
            if passed_layers == layer {
                return Some(index);
            }
        } else if !ink && in_body {
            in_body = false;
            passed_layers += 1;
        }
    }
    None
}

/// Cardinal scan: one peripheral point per row (horizontal) or column (vertical).
pub fn scan(grid: &BinaryGrid, layer: usize, axis: Axis, traversal: Traversal) -> Vec<Option<usize>> {
    let n = grid.size();
    (0..n)
        .map(|line| {
            let cells = (0..n).map(move |k| {
                let along = match traversal {
                    Traversal::Forward => k,
                    Traversal::Backward => n - 1 - k,
                };
                match axis {
                    Axis::Horizontal => line * n + along,
                    Axis::Vertical => along * n + line,
                }
            });
            leading_edge(grid, cells, layer)
        })
        .collect()
}

/// Diagonal scan for one corner family, seeded by [`Corner::seeds`].
pub fn diagonal_scan(grid: &BinaryGrid, layer: usize, corner: Corner) -> Vec<Option<usize>> {
    let (dr, dc) = corner.delta();
    corner
        .seeds(grid.size())
        .into_iter()
        .map(|(row, col)| {
            let cells = DiagonalCells {
                grid,
                row: row as isize,
                col: col as isize,
                dr,
                dc,
            };
            leading_edge(grid, cells, layer)
        })
        .collect()
}

struct DiagonalCells<'a> {
    grid: &'a BinaryGrid,
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
}

impl Iterator for DiagonalCells<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if !self.grid.in_bounds(self.row, self.col) {
            return None;
        }
        let index = self.grid.index(self.row as usize, self.col as usize);
        self.row += self.dr;
        self.col += self.dc;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    fn count_runs(line: &[bool]) -> usize {
        let mut runs = 0;
        let mut prev = false;
        for &c in line {
            if c && !prev {
                runs += 1;
            }
            prev = c;
        }
        runs
    }

    #[test]
    fn full_grid_edges_are_line_ends() {
        let n = 8;
        let grid = BinaryGrid::filled(n, true);
        let fwd = scan(&grid, 0, Axis::Horizontal, Traversal::Forward);
        let bwd = scan(&grid, 0, Axis::Horizontal, Traversal::Backward);
        let down = scan(&grid, 0, Axis::Vertical, Traversal::Forward);
        let up = scan(&grid, 0, Axis::Vertical, Traversal::Backward);
        for line in 0..n {
            assert_eq!(fwd[line], Some(grid.index(line, 0)));
            assert_eq!(bwd[line], Some(grid.index(line, n - 1)));
            assert_eq!(down[line], Some(grid.index(0, line)));
            assert_eq!(up[line], Some(grid.index(n - 1, line)));
        }
        for layer in 1..3 {
            assert!(scan(&grid, layer, Axis::Horizontal, Traversal::Forward)
                .iter()
                .all(Option::is_none));
            assert!(scan(&grid, layer, Axis::Vertical, Traversal::Backward)
                .iter()
                .all(Option::is_none));
        }
    }

    #[test]
    fn empty_grid_has_no_points() {
        let grid = BinaryGrid::filled(6, false);
        for layer in 0..3 {
            assert!(scan(&grid, layer, Axis::Horizontal, Traversal::Forward)
                .iter()
                .all(Option::is_none));
            for corner in Corner::ALL {
                let points = diagonal_scan(&grid, layer, corner);
                assert_eq!(points.len(), 6);
                assert!(points.iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn layers_skip_earlier_runs() {
        let grid = BinaryGrid::from_ascii(&[
            "##..#.##",
            "........",
            ".#######",
            "#.#.#.#.",
            "........",
            "........",
            "........",
            "........",
        ]);
        let l0 = scan(&grid, 0, Axis::Horizontal, Traversal::Forward);
        let l1 = scan(&grid, 1, Axis::Horizontal, Traversal::Forward);
        let l2 = scan(&grid, 2, Axis::Horizontal, Traversal::Forward);
        assert_eq!(l0[0], Some(0));
        assert_eq!(l1[0], Some(4));
        assert_eq!(l2[0], Some(6));
        assert_eq!(l0[1], None);
        assert_eq!(l0[2], Some(grid.index(2, 1)));
        assert_eq!(l1[2], None);
        assert_eq!(l2[3], Some(grid.index(3, 4)));

        let back = scan(&grid, 1, Axis::Horizontal, Traversal::Backward);
        assert_eq!(back[0], Some(4));
        assert_eq!(back[3], Some(grid.index(3, 4)));
    }

    #[test]
    fn absent_iff_fewer_runs_than_layer() {
        let grid = BinaryGrid::from_fn(11, |r, c| (r * 7 + c * 3) % 5 < 2 || (r + c) % 4 == 0);
        for layer in 0..4 {
            let points = scan(&grid, layer, Axis::Horizontal, Traversal::Forward);
            for (row, point) in points.iter().enumerate() {
                let runs = count_runs(grid.row(row));
                assert_eq!(point.is_none(), runs < layer + 1, "row {row} layer {layer}");
            }
        }
    }

    #[test]
    fn corner_seeds_hug_their_corner() {
        let seeds = Corner::TopRight.seeds(6);
        assert_eq!(
            seeds,
            vec![(0, 3), (0, 4), (0, 5), (0, 5), (1, 5), (2, 5)]
        );
        let seeds = Corner::BottomLeft.seeds(5);
        assert_eq!(
            seeds,
            vec![(4, 0), (4, 1), (4, 2), (2, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn diagonal_scan_follows_the_corner_direction() {
        let grid = BinaryGrid::from_ascii(&[
            "....",
            ".#..",
            "....",
            "....",
        ]);
        let tl = diagonal_scan(&grid, 0, Corner::TopLeft);
        // seeds: (0,0) (0,1) (0,0) (1,0)
        assert_eq!(tl, vec![Some(5), None, Some(5), None]);

        let br = diagonal_scan(&grid, 0, Corner::BottomRight);
        // seeds: (3,2) (3,3) (2,3) (3,3)
        assert_eq!(br, vec![None, Some(5), None, Some(5)]);

        assert!(diagonal_scan(&grid, 1, Corner::TopLeft)
            .iter()
            .all(Option::is_none));
    }

    #[test]
    fn full_grid_diagonals_start_at_their_seed() {
        let grid = BinaryGrid::filled(7, true);
        for corner in Corner::ALL {
            let seeds = corner.seeds(7);
            let points = diagonal_scan(&grid, 0, corner);
            for ((r, c), p) in seeds.into_iter().zip(points) {
                assert_eq!(p, Some(grid.index(r, c)));
            }
        }
    }
}
