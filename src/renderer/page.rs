//! Page rendering
//!
//! One pass over the page memory, top to bottom and left to right. Zone
//! attributes (background, mask, underline) start fresh on every row and
//! are carried forward from cell to cell; nothing is looked up twice and
//! nothing looks ahead.

use crate::core::{Cell, CellKind, Color, Mult, PageMemory, Part};

use super::glyph::{Charset, Glyph, GlyphProvider};
use super::surface::Surface;
use super::CharSize;

/// Zone attributes of the row being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Zone {
    bg: Color,
    mask: bool,
    underline: bool,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            mask: false,
            underline: false,
        }
    }
}

impl Zone {
    /// Zone state seen by `cell`, before it is drawn
    fn enter(self, cell: &Cell) -> Self {
        let mut zone = self;
        match cell.kind {
            CellKind::Delimiter {
                background: Some(bg),
                ..
            } => zone.bg = bg,
            CellKind::Delimiter { .. } => {}
            CellKind::Text => zone.bg = cell.bg,
            CellKind::Mosaic => {
                zone.bg = cell.bg;
                zone.underline = false;
            }
        }
        zone
    }

    /// Zone state left for the following cells once `cell` is drawn
    fn leave(self, cell: &Cell) -> Self {
        let mut zone = self;
        if let CellKind::Delimiter {
            mask, underline, ..
        } = cell.kind
        {
            if let Some(mask) = mask {
                zone.mask = mask;
            }
            if let Some(underline) = underline {
                zone.underline = underline;
            }
        }
        zone
    }
}

/// Draws page memory onto a surface
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    char_size: CharSize,
}

impl Renderer {
    pub fn new(char_size: CharSize) -> Self {
        Self { char_size }
    }

    pub fn char_size(&self) -> CharSize {
        self.char_size
    }

    /// Mark the status line, then draw the whole page
    pub fn render<S, G>(&self, page: &mut PageMemory, surface: &mut S, glyphs: &G)
    where
        S: Surface + ?Sized,
        G: GlyphProvider,
    {
        page.mark_status_line();
        self.draw(page, surface, glyphs);
    }

    /// Draw the page as it is
    pub fn draw<S, G>(&self, page: &PageMemory, surface: &mut S, glyphs: &G)
    where
        S: Surface + ?Sized,
        G: GlyphProvider,
    {
        let CharSize { width, height } = self.char_size;
        tracing::debug!(cols = page.cols(), rows = page.rows(), "render page");

        for (row_index, row) in page.grid().iter_rows().enumerate() {
            let y = row_index as u32 * height;
            let mut zone = Zone::default();

            for (col_index, cell) in row.cells.iter().enumerate() {
                let x = col_index as u32 * width;
                zone = zone.enter(cell);

                let (front, back) = if cell.inverted {
                    (zone.bg, cell.fg)
                } else {
                    (cell.fg, zone.bg)
                };

                surface.fill_rect(x, y, width, height, back);

                if !zone.mask {
                    let glyph = if cell.is_mosaic() {
                        Glyph {
                            charset: Charset::G1,
                            code: cell.code,
                            x,
                            y,
                            part: Part::default(),
                            mult: Mult::NORMAL,
                            fg: front,
                            underline: false,
                        }
                    } else {
                        Glyph {
                            charset: Charset::G0,
                            code: cell.code,
                            x,
                            y,
                            part: cell.part,
                            mult: cell.mult,
                            fg: front,
                            underline: zone.underline,
                        }
                    };
                    glyphs.draw_cell(&mut *surface, &glyph);
                }

                zone = zone.leave(cell);
            }
        }
    }
}
