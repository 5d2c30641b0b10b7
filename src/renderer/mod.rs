//! Renderer Module
//!
//! Draws the page memory onto a bitmap surface. Glyph bitmaps come from a
//! [`GlyphProvider`]; backgrounds and zone attributes are resolved here.

mod glyph;
mod page;
mod surface;

use serde::{Deserialize, Serialize};

pub use glyph::{Charset, Glyph, GlyphProvider, SextantFont};
pub use page::Renderer;
pub use surface::{PixelBuffer, Surface};

/// Size of one cell in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CharSize {
    fn default() -> Self {
        Self {
            width: 8,
            height: 10,
        }
    }
}

/// Integer scale from logical to device pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zoom {
    pub x: u32,
    pub y: u32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self { x: 2, y: 2 }
    }
}
