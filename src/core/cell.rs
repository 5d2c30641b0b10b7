//! Page Cell
//!
//! Represents a single character position of the page memory with its
//! display attributes. Cells are plain values: a position changes only by
//! replacing its cell as a whole.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Code of the blank character
pub const BLANK: u8 = 0x20;

/// Which quarter of a double-size glyph a cell shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub x: u8,
    pub y: u8,
}

/// Size multiplier of a glyph (1 or 2 in each direction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mult {
    pub width: u8,
    pub height: u8,
}

impl Default for Mult {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl Mult {
    pub const NORMAL: Mult = Mult {
        width: 1,
        height: 1,
    };
    pub const DOUBLE_WIDTH: Mult = Mult {
        width: 2,
        height: 1,
    };
    pub const DOUBLE_HEIGHT: Mult = Mult {
        width: 1,
        height: 2,
    };
    pub const DOUBLE_SIZE: Mult = Mult {
        width: 2,
        height: 2,
    };
}

/// What a cell contributes to the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellKind {
    /// A character from the primary (G0) set
    #[default]
    Text,
    /// A block graphic from the alternate (G1) set
    Mosaic,
    /// Changes zone attributes for the following cells of the row.
    /// `None` leaves the corresponding zone attribute untouched.
    Delimiter {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mask: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        underline: Option<bool>,
    },
}

/// A text cell: one resolved character with its colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCell {
    pub code: u8,
    pub fg: Color,
    pub bg: Color,
    pub inverted: bool,
}

impl Default for TextCell {
    fn default() -> Self {
        Self {
            code: BLANK,
            fg: Color::White,
            bg: Color::Black,
            inverted: false,
        }
    }
}

impl TextCell {
    pub fn new(code: u8) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

/// A single cell of the page memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Character code in the set selected by `kind`
    pub code: u8,
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Swap foreground and background when drawn
    pub inverted: bool,
    /// Quarter of a double-size glyph shown by this cell
    pub part: Part,
    /// Glyph size multiplier
    pub mult: Mult,
    #[serde(flatten)]
    pub kind: CellKind,
}

impl Default for Cell {
    fn default() -> Self {
        TextCell::default().into()
    }
}

impl From<TextCell> for Cell {
    fn from(text: TextCell) -> Self {
        Self {
            code: text.code,
            fg: text.fg,
            bg: text.bg,
            inverted: text.inverted,
            part: Part::default(),
            mult: Mult::NORMAL,
            kind: CellKind::Text,
        }
    }
}

impl Cell {
    /// Create a text cell with default colors
    pub fn text(code: u8) -> Self {
        TextCell::new(code).into()
    }

    /// Create a mosaic cell with default colors
    pub fn mosaic(code: u8) -> Self {
        Self {
            kind: CellKind::Mosaic,
            ..Self::text(code)
        }
    }

    /// Create a blank delimiter cell that carries no zone change
    pub fn delimiter() -> Self {
        Self {
            kind: CellKind::Delimiter {
                background: None,
                mask: None,
                underline: None,
            },
            ..Self::text(BLANK)
        }
    }

    pub fn with_colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_size(mut self, part: Part, mult: Mult) -> Self {
        self.part = part;
        self.mult = mult;
        self
    }

    /// Set the zone background carried by a delimiter. No effect on other kinds.
    pub fn with_zone_background(mut self, color: Color) -> Self {
        if let CellKind::Delimiter { background, .. } = &mut self.kind {
            *background = Some(color);
        }
        self
    }

    /// Set the zone mask carried by a delimiter. No effect on other kinds.
    pub fn with_mask(mut self, value: bool) -> Self {
        if let CellKind::Delimiter { mask, .. } = &mut self.kind {
            *mask = Some(value);
        }
        self
    }

    /// Set the zone underline carried by a delimiter. No effect on other kinds.
    pub fn with_zone_underline(mut self, value: bool) -> Self {
        if let CellKind::Delimiter { underline, .. } = &mut self.kind {
            *underline = Some(value);
        }
        self
    }

    pub fn is_mosaic(&self) -> bool {
        matches!(self.kind, CellKind::Mosaic)
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self.kind, CellKind::Delimiter { .. })
    }

    /// Check if this cell is a blank default cell
    pub fn is_blank(&self) -> bool {
        *self == Cell::default()
    }
}
