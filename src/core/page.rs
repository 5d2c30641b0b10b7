//! Page memory
//!
//! The page memory is the terminal's screen buffer: a fixed grid of cells
//! plus the cursor. Row 0 is the status line and row 1 is reserved; only the
//! rows below them take part in scrolling.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, TextCell};
use super::cursor::Cursor;
use super::grid::{Grid, Row};

/// First row that takes part in scrolling
pub const SCROLL_TOP: usize = 2;

/// Column of the status line marker
pub const STATUS_MARKER_COL: usize = 38;

/// Code of the status line marker glyph ("F")
pub const STATUS_MARKER_CODE: u8 = 0x46;

/// Scrolling direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Content moves up, a blank row enters at the bottom
    Up,
    /// Content moves down, a blank row enters at the top of the region
    Down,
}

/// The page memory of the terminal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMemory {
    grid: Grid,
    cursor: Cursor,
}

impl PageMemory {
    /// Create a page filled with blank cells
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            grid: Grid::new(cols, rows),
            cursor: Cursor::default(),
        }
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        self.grid.cell(col, row)
    }

    /// Replace the cell at a position. Out-of-range positions are ignored.
    pub fn set_cell(&mut self, col: usize, row: usize, cell: Cell) {
        self.grid.set_cell(col, row, cell);
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.grid.row(row)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Scroll the rows below the status and reserved rows by one line.
    /// The row pushed out of the region is lost.
    pub fn scroll(&mut self, direction: ScrollDirection) {
        let bottom = self.grid.rows().saturating_sub(1);
        tracing::debug!(?direction, top = SCROLL_TOP, bottom, "scroll");
        match direction {
            ScrollDirection::Up => self.grid.scroll_up(SCROLL_TOP, bottom),
            ScrollDirection::Down => self.grid.scroll_down(SCROLL_TOP, bottom),
        };
    }

    /// Write the inverted "F" the terminal shows on its status line
    pub fn mark_status_line(&mut self) {
        let marker = TextCell {
            code: STATUS_MARKER_CODE,
            inverted: true,
            ..Default::default()
        };
        self.grid.set_cell(STATUS_MARKER_COL, 0, marker.into());
    }
}
