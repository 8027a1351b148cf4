//! Square binary pixel grid consumed by the PDC scanners.
//!
//! Cells are stored row-major; `true` marks foreground (ink). Linear indices
//! are `row * size + col` and are what peripheral points record.
use crate::image::{GrayImageU8, ImageView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryGrid {
    size: usize,
    cells: Vec<bool>,
}

impl BinaryGrid {
    /// Wrap `cells` as a `size × size` grid.
    ///
    /// Panics if `cells.len() != size * size`.
    pub fn from_cells(size: usize, cells: Vec<bool>) -> Self {
        assert_eq!(cells.len(), size * size, "grid cell count mismatch");
        Self { size, cells }
    }

    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    pub fn filled(size: usize, value: bool) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Parse an ASCII picture where `#` is ink and anything else is paper.
    ///
    /// Panics if the rows do not form a square.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let chars: Vec<char> = row.chars().collect();
            assert_eq!(chars.len(), size, "ascii grid must be square");
            cells.extend(chars.iter().map(|&c| c == '#'));
        }
        Self { size, cells }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn get_index(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Whether signed coordinates address a cell of this grid.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        let n = self.size as isize;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn count_foreground(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Render as black ink on white paper for inspection.
    pub fn to_gray(&self) -> GrayImageU8 {
        let data = self.cells.iter().map(|&c| if c { 0 } else { 255 }).collect();
        GrayImageU8::new(self.size, self.size, data)
    }
}

impl ImageView for BinaryGrid {
    type Pixel = bool;

    #[inline]
    fn width(&self) -> usize {
        self.size
    }
    #[inline]
    fn height(&self) -> usize {
        self.size
    }
    #[inline]
    fn stride(&self) -> usize {
        self.size
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.size;
        &self.cells[start..start + self.size]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[bool]> {
        Some(&self.cells)
    }
}
