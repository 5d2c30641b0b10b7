//! Glyph providers
//!
//! A [`GlyphProvider`] draws the foreground of one cell. The renderer has
//! already painted the background and resolved colors, size and underline.

use crate::core::{Color, Mult, Part};

use super::surface::Surface;
use super::CharSize;

/// Character set a glyph is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// Primary text set
    G0,
    /// Alternate mosaic set
    G1,
}

/// Everything needed to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub charset: Charset,
    pub code: u8,
    /// Left edge in logical pixels
    pub x: u32,
    /// Top edge in logical pixels
    pub y: u32,
    /// Quarter of the enlarged glyph shown in this cell
    pub part: Part,
    /// Size multiplier of the enlarged glyph
    pub mult: Mult,
    pub fg: Color,
    pub underline: bool,
}

/// Draws one decoded cell onto a surface
pub trait GlyphProvider {
    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, glyph: &Glyph);
}

/// Glyph provider that builds mosaic characters from blocks.
///
/// Mosaic codes split the cell into 2x3 blocks; bits 0-4 and bit 6 of the
/// code light them from top-left to bottom-right. Text glyph bitmaps are
/// not built in: for the text set only the underline is drawn.
#[derive(Debug, Clone, Copy)]
pub struct SextantFont {
    char_size: CharSize,
}

const SEXTANT_BITS: [u8; 6] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x40];

impl SextantFont {
    pub fn new(char_size: CharSize) -> Self {
        Self { char_size }
    }

    /// Check if a code has a mosaic glyph
    pub fn is_sextant(code: u8) -> bool {
        matches!(code, 0x20..=0x3f | 0x60..=0x7f)
    }

    fn draw_sextant<S: Surface + ?Sized>(&self, surface: &mut S, glyph: &Glyph) {
        let CharSize { width, height } = self.char_size;
        let columns = [(0, width / 2), (width / 2, width - width / 2)];
        let third = height / 3;
        let rows = [(0, third), (third, height - 2 * third), (height - third, third)];

        for (index, bit) in SEXTANT_BITS.iter().enumerate() {
            if glyph.code & bit == 0 {
                continue;
            }
            let (left, w) = columns[index % 2];
            let (top, h) = rows[index / 2];
            surface.fill_rect(glyph.x + left, glyph.y + top, w, h, glyph.fg);
        }
    }

    fn draw_underline<S: Surface + ?Sized>(&self, surface: &mut S, glyph: &Glyph) {
        // Only the bottom part of an enlarged glyph carries the line
        if glyph.part.y + 1 < glyph.mult.height {
            return;
        }
        let CharSize { width, height } = self.char_size;
        let Some(bottom) = height.checked_sub(1) else {
            return;
        };
        surface.fill_rect(glyph.x, glyph.y + bottom, width, 1, glyph.fg);
    }
}

impl GlyphProvider for SextantFont {
    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, glyph: &Glyph) {
        match glyph.charset {
            Charset::G1 if Self::is_sextant(glyph.code) => self.draw_sextant(surface, glyph),
            Charset::G1 => tracing::trace!(code = glyph.code, "no mosaic glyph"),
            Charset::G0 => {}
        }
        if glyph.underline {
            self.draw_underline(surface, glyph);
        }
    }
}
