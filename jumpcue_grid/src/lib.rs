// Copyright 2026 the Jumpcue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jumpcue Grid: uniform row-major partitioning of a rectangular surface.
//!
//! A [`Grid`] divides a bounding [`Size`] into `num_rows * num_columns`
//! equally sized cells that tile the surface exactly. Cells are indexed
//! row-major (`i = y * num_columns + x`) and enumerated with the row offset
//! as the outer loop, so the cell list, the index mapping, and the inverse
//! mapping all agree.
//!
//! The grid is one source of addressing candidates: each cell rectangle is
//! handed to the address tree, and the resulting key sequence is stored back
//! on the grid as that cell's label for the presentation layer to draw.
//!
//! Coordinates are deliberately direction-agnostic: whether `y` grows upward
//! or downward is decided by whoever produces and consumes the rectangles,
//! not by the grid.
//!
//! # Example
//!
//! ```rust
//! use jumpcue_grid::Grid;
//! use kurbo::Size;
//!
//! // Ask for ~60x60 cells over a 200x90 surface: 3 columns by 1 row fit.
//! let grid = Grid::with_target_cell_size(Size::new(200.0, 90.0), Size::new(60.0, 60.0));
//! assert_eq!(grid.num_columns(), 3);
//! assert_eq!(grid.num_rows(), 1);
//!
//! // The actual cell size stretches to tile the surface exactly.
//! assert_eq!(grid.cell_width(), 200.0 / 3.0);
//! assert_eq!(grid.cell_height(), 90.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

/// A uniform, row-major partition of a rectangular surface.
///
/// Carries one label string per cell. Labels default to the decimal cell
/// index and are replaced with the assigned key sequences once an address
/// tree has been built over the cells.
#[derive(Clone, Debug)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    size: Size,
    cell_size: Size,
    cells: Vec<Rect>,
    labels: Vec<String>,
}

impl Grid {
    /// Create a grid with explicit row and column counts.
    ///
    /// The cell size is `size.width / num_columns` by
    /// `size.height / num_rows`: cells tile `size` exactly.
    pub fn new(num_rows: usize, num_columns: usize, size: Size) -> Self {
        debug_assert!(num_rows > 0, "grid must have at least one row");
        debug_assert!(num_columns > 0, "grid must have at least one column");

        let cell_width = size.width / num_columns as f64;
        let cell_height = size.height / num_rows as f64;
        let cell_size = Size::new(cell_width, cell_height);

        let mut cells = Vec::with_capacity(num_rows * num_columns);
        for y in 0..num_rows {
            for x in 0..num_columns {
                let origin = Point::new(x as f64 * cell_width, y as f64 * cell_height);
                cells.push(Rect::from_origin_size(origin, cell_size));
            }
        }

        let labels = (0..cells.len()).map(|i| i.to_string()).collect();

        Self {
            num_rows,
            num_columns,
            size,
            cell_size,
            cells,
            labels,
        }
    }

    /// Create a grid by fitting as many cells of (at least) `target_cell_size`
    /// as the surface holds: `max(1, floor(size / target))` per axis.
    ///
    /// The resulting cell size may differ slightly from the target, since the
    /// cells stretch to tile `size` exactly. A target larger than the surface
    /// in both dimensions degenerates to a single 1x1 cell covering the whole
    /// surface; callers that can't use such a grid must check for it.
    pub fn with_target_cell_size(size: Size, target_cell_size: Size) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Dimensions are positive and far below 2^52; the cast truncates toward zero, which is floor here."
        )]
        fn fit(extent: f64, target: f64) -> usize {
            debug_assert!(target > 0.0, "target cell dimensions must be positive");
            ((extent / target) as usize).max(1)
        }

        let num_columns = fit(size.width, target_cell_size.width);
        let num_rows = fit(size.height, target_cell_size.height);
        Self::new(num_rows, num_columns, size)
    }

    /// Number of rows.
    pub const fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    pub const fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Total number of cells (`num_rows * num_columns`).
    pub fn num_cells(&self) -> usize {
        self.num_rows * self.num_columns
    }

    /// The partitioned surface size.
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Width of each cell.
    pub const fn cell_width(&self) -> f64 {
        self.cell_size.width
    }

    /// Height of each cell.
    pub const fn cell_height(&self) -> f64 {
        self.cell_size.height
    }

    /// Size of each cell.
    pub const fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// All cell rectangles in row-major order.
    pub fn cells(&self) -> &[Rect] {
        &self.cells
    }

    /// The rectangle of the cell at `index`.
    pub fn cell(&self, index: usize) -> Rect {
        self.cells[index]
    }

    /// Converts grid coordinates into a cell index.
    ///
    /// Consider a grid with 6 columns and 4 rows; `(x: 0, y: 0)` is one
    /// corner and `(x: 5, y: 3)` the diagonally opposite one. The cells map
    /// to indices like so:
    ///
    /// ```text
    /// 18 19 20 21 22 23
    /// 12 13 14 15 16 17
    ///  6  7  8  9 10 11
    ///  0  1  2  3  4  5
    /// ```
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.num_columns + x
    }

    /// The inverse of [`Grid::index`]: recover `(x, y)` from a cell index.
    pub const fn coordinates(&self, index: usize) -> (usize, usize) {
        let x = index % self.num_columns;
        let y = (index - x) / self.num_columns;
        (x, y)
    }

    /// The label of the cell at `index`.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All cell labels, in row-major order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replace the per-cell labels, one per cell.
    ///
    /// # Panics
    ///
    /// Panics when the label count does not match the cell count; a mismatch
    /// means the address tree was built over a different candidate list than
    /// this grid's cells.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        assert_eq!(
            labels.len(),
            self.num_cells(),
            "grid invariant violated: expected one label per cell"
        );
        self.labels = labels;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn indexing() {
        let grid = Grid::new(3, 4, Size::ZERO);

        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(1, 0), 1);
        assert_eq!(grid.index(2, 0), 2);
        assert_eq!(grid.index(3, 0), 3);
        assert_eq!(grid.index(0, 1), 4);
        assert_eq!(grid.index(1, 1), 5);
        assert_eq!(grid.index(2, 1), 6);
        assert_eq!(grid.index(3, 1), 7);
        assert_eq!(grid.index(0, 2), 8);
        assert_eq!(grid.index(1, 2), 9);
        assert_eq!(grid.index(2, 2), 10);
        assert_eq!(grid.index(3, 2), 11);
    }

    #[test]
    fn inverse_indexing() {
        let grid = Grid::new(3, 4, Size::ZERO);

        for index in 0..grid.num_cells() {
            let (x, y) = grid.coordinates(index);
            assert_eq!(grid.index(x, y), index);
        }

        assert_eq!(grid.coordinates(6), (2, 1));
        assert_eq!(grid.coordinates(0), (0, 0));
        assert_eq!(grid.coordinates(11), (3, 2));
    }

    #[test]
    fn initialization() {
        let size = Size::new(200.0, 400.0);
        let grid = Grid::new(3, 4, size);

        assert_eq!(grid.num_cells(), 12);
        assert_eq!(grid.cell_width(), size.width / 4.0);
        assert_eq!(grid.cell_height(), size.height / 3.0);
        assert_eq!(grid.cell_size(), Size::new(size.width / 4.0, size.height / 3.0));
    }

    #[test]
    fn initialization_via_target_cell_sizing() {
        let size = Size::new(200.0, 440.0);

        // This target size evenly divides the surface, in both dimensions.
        let target = Size::new(20.0, 40.0);
        let grid = Grid::with_target_cell_size(size, target);

        assert_eq!(grid.num_columns(), 10);
        assert_eq!(grid.num_rows(), 11);
        assert_eq!(grid.cell_size(), target);

        // This target size doesn't evenly divide the surface, in either
        // dimension.
        let target = Size::new(30.0, 30.0);
        let grid = Grid::with_target_cell_size(size, target);

        assert_eq!(grid.num_columns(), 6);
        assert_eq!(grid.num_rows(), 14);
        assert_eq!(grid.cell_size(), Size::new(size.width / 6.0, size.height / 14.0));
    }

    #[test]
    fn oversized_target_degenerates_to_single_cell() {
        let size = Size::new(100.0, 100.0);
        let grid = Grid::with_target_cell_size(size, Size::new(500.0, 500.0));

        assert_eq!(grid.num_rows(), 1);
        assert_eq!(grid.num_columns(), 1);
        assert_eq!(grid.cells(), [Rect::new(0.0, 0.0, 100.0, 100.0)]);
    }

    #[test]
    fn cells_enumerate_row_major() {
        let grid = Grid::new(3, 2, Size::new(200.0, 90.0));

        assert_eq!(
            grid.cells(),
            [
                Rect::new(0.0, 0.0, 100.0, 30.0),
                Rect::new(100.0, 0.0, 200.0, 30.0),
                Rect::new(0.0, 30.0, 100.0, 60.0),
                Rect::new(100.0, 30.0, 200.0, 60.0),
                Rect::new(0.0, 60.0, 100.0, 90.0),
                Rect::new(100.0, 60.0, 200.0, 90.0),
            ]
        );
    }

    #[test]
    fn labels_default_to_cell_indices() {
        let grid = Grid::new(2, 2, Size::new(10.0, 10.0));
        assert_eq!(grid.labels(), ["0", "1", "2", "3"]);
        assert_eq!(grid.label(2), "2");
    }

    #[test]
    fn set_labels_replaces_all_labels() {
        let mut grid = Grid::new(2, 2, Size::new(10.0, 10.0));
        grid.set_labels(vec!["aa".into(), "al".into(), "la".into(), "ll".into()]);
        assert_eq!(grid.label(0), "aa");
        assert_eq!(grid.label(3), "ll");
    }

    #[test]
    #[should_panic(expected = "one label per cell")]
    fn set_labels_rejects_count_mismatch() {
        let mut grid = Grid::new(2, 2, Size::new(10.0, 10.0));
        grid.set_labels(vec!["aa".into()]);
    }
}
