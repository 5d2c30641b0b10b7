//! Page Model Module
//!
//! Platform-independent state of the terminal display. This module contains:
//! - The fixed eight-color palette
//! - Cell representation with zone attributes
//! - Cursor state
//! - The page grid and the page memory built on it
//!
//! Every operation is deterministic and infallible: the same sequence of
//! updates always produces the same page.

mod cell;
mod color;
mod cursor;
mod grid;
mod page;

pub use cell::{Cell, CellKind, Mult, Part, TextCell, BLANK};
pub use color::{Color, Palette, COLOR_PALETTE, GRAY_PALETTE};
pub use cursor::Cursor;
pub use grid::{Grid, Row};
pub use page::{
    PageMemory, ScrollDirection, SCROLL_TOP, STATUS_MARKER_CODE, STATUS_MARKER_COL,
};
