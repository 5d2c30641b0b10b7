//! Cursor state
//!
//! The page memory keeps the cursor position and visibility. The renderer
//! does not draw it yet.

use serde::{Deserialize, Serialize};

/// Cursor position and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Column position (0-indexed)
    pub x: usize,
    /// Row position (0-indexed, row 0 is the status line)
    pub y: usize,
    /// Whether the cursor is visible
    pub visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            x: 0,
            y: 1,
            visible: false,
        }
    }
}

impl Cursor {
    /// Move the cursor, clamping to the given page dimensions
    pub fn move_to(&mut self, x: usize, y: usize, cols: usize, rows: usize) {
        self.x = x.min(cols.saturating_sub(1));
        self.y = y.min(rows.saturating_sub(1));
    }
}
