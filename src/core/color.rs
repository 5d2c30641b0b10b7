//! Terminal color representation
//!
//! The terminal knows exactly eight colors. On a color display they map to
//! the fully saturated RGB primaries; on a monochrome display each index is
//! a gray level ordered by luminance rather than by index.

use serde::{Deserialize, Serialize};

/// One of the eight terminal colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// RGB value of every color, indexed by `Color as usize`
pub const COLOR_PALETTE: [(u8, u8, u8); 8] = [
    (0x00, 0x00, 0x00), // black
    (0xff, 0x00, 0x00), // red
    (0x00, 0xff, 0x00), // green
    (0xff, 0xff, 0x00), // yellow
    (0x00, 0x00, 0xff), // blue
    (0xff, 0x00, 0xff), // magenta
    (0x00, 0xff, 0xff), // cyan
    (0xff, 0xff, 0xff), // white
];

/// Gray level of every color on a monochrome display
pub const GRAY_PALETTE: [(u8, u8, u8); 8] = [
    (0x00, 0x00, 0x00), // 0%
    (0x7f, 0x7f, 0x7f), // 50%
    (0xb2, 0xb2, 0xb2), // 70%
    (0xe5, 0xe5, 0xe5), // 90%
    (0x66, 0x66, 0x66), // 40%
    (0x99, 0x99, 0x99), // 60%
    (0xcc, 0xcc, 0xcc), // 80%
    (0xff, 0xff, 0xff), // 100%
];

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Convert a palette index (0-7) to a color
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Palette index of this color
    pub fn index(self) -> u8 {
        self as u8
    }

    /// RGB value on a color display
    pub fn rgb(self) -> (u8, u8, u8) {
        COLOR_PALETTE[self as usize]
    }

    /// RGB value on a monochrome display
    pub fn gray(self) -> (u8, u8, u8) {
        GRAY_PALETTE[self as usize]
    }
}

/// Which of the fixed palettes converts colors to pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Color,
    Grays,
}

impl Palette {
    pub fn rgb(self, color: Color) -> (u8, u8, u8) {
        match self {
            Palette::Color => color.rgb(),
            Palette::Grays => color.gray(),
        }
    }
}
