//! Page Grid
//!
//! A fixed-size 2D grid of cells. Dimensions are set at construction and
//! never change; every slot always holds a cell.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A row of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Check if every cell of the row is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_blank)
    }
}

/// The page grid - a 2D array of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
    cols: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols)).collect(),
            cols,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Get a reference to a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Replace the cell at a position. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, col: usize, row: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Iterate over the rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// Scroll rows `top..=bottom` up by one line.
    /// The top row of the region is discarded and returned; a blank row
    /// enters at the bottom.
    pub fn scroll_up(&mut self, top: usize, bottom: usize) -> Option<Row> {
        if top > bottom || bottom >= self.rows.len() {
            return None;
        }
        let discarded = self.rows.remove(top);
        self.rows.insert(bottom, Row::new(self.cols));
        Some(discarded)
    }

    /// Scroll rows `top..=bottom` down by one line.
    /// The bottom row of the region is discarded and returned; a blank row
    /// enters at the top.
    pub fn scroll_down(&mut self, top: usize, bottom: usize) -> Option<Row> {
        if top > bottom || bottom >= self.rows.len() {
            return None;
        }
        let discarded = self.rows.remove(bottom);
        self.rows.insert(top, Row::new(self.cols));
        Some(discarded)
    }
}
