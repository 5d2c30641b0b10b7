//! Page rendering tests
//!
//! These tests render page memory through recording surfaces and glyph
//! providers and check which backgrounds and glyphs the single pass emits.

use std::cell::RefCell;

use videotex_term::app::Config;
use videotex_term::core::{Cell, Color, Mult, PageMemory, Part, ScrollDirection, STATUS_MARKER_COL};
use videotex_term::renderer::{CharSize, Charset, Glyph, GlyphProvider, Renderer, Surface};

const COLS: usize = 40;
const ROWS: usize = 25;

/// Surface remembering every background fill
#[derive(Default)]
struct FillLog {
    fills: Vec<(u32, u32, Color)>,
}

impl Surface for FillLog {
    fn fill_rect(&mut self, x: u32, y: u32, _width: u32, _height: u32, color: Color) {
        self.fills.push((x, y, color));
    }
}

impl FillLog {
    fn at(&self, col: usize, row: usize) -> Vec<Color> {
        let (x, y) = (col as u32 * 8, row as u32 * 10);
        self.fills
            .iter()
            .filter(|fill| fill.0 == x && fill.1 == y)
            .map(|fill| fill.2)
            .collect()
    }
}

/// Glyph provider remembering every glyph request
#[derive(Default)]
struct GlyphLog {
    glyphs: RefCell<Vec<Glyph>>,
}

impl GlyphProvider for GlyphLog {
    fn draw_cell<S: Surface + ?Sized>(&self, _surface: &mut S, glyph: &Glyph) {
        self.glyphs.borrow_mut().push(*glyph);
    }
}

impl GlyphLog {
    fn at(&self, col: usize, row: usize) -> Option<Glyph> {
        let (x, y) = (col as u32 * 8, row as u32 * 10);
        self.glyphs
            .borrow()
            .iter()
            .find(|glyph| glyph.x == x && glyph.y == y)
            .copied()
    }

    fn count_in_row(&self, row: usize) -> usize {
        let y = row as u32 * 10;
        self.glyphs.borrow().iter().filter(|glyph| glyph.y == y).count()
    }
}

fn render(page: &mut PageMemory) -> (FillLog, GlyphLog) {
    let mut surface = FillLog::default();
    let glyphs = GlyphLog::default();
    Renderer::new(CharSize::default()).render(page, &mut surface, &glyphs);
    (surface, glyphs)
}

#[test]
fn test_every_cell_is_painted_and_drawn_once() {
    let mut page = PageMemory::new(COLS, ROWS);
    let (surface, glyphs) = render(&mut page);
    assert_eq!(surface.fills.len(), COLS * ROWS);
    assert_eq!(glyphs.glyphs.borrow().len(), COLS * ROWS);
}

#[test]
fn test_status_line_marker() {
    let mut page = PageMemory::new(COLS, ROWS);
    let (surface, glyphs) = render(&mut page);

    let marker = page.cell(STATUS_MARKER_COL, 0).unwrap();
    assert_eq!(marker.code, b'F');
    assert!(marker.inverted);

    let glyph = glyphs.at(STATUS_MARKER_COL, 0).unwrap();
    assert_eq!(glyph.code, b'F');
    assert_eq!(glyph.fg, Color::Black);
    assert_eq!(surface.at(STATUS_MARKER_COL, 0), vec![Color::White]);
}

#[test]
fn test_mask_hides_glyphs_until_row_end() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(10, 5, Cell::delimiter().with_mask(true));
    for col in 11..COLS {
        page.set_cell(col, 5, Cell::text(b'X'));
    }
    let (surface, glyphs) = render(&mut page);

    for col in 0..=10 {
        assert!(glyphs.at(col, 5).is_some(), "column {col} should be drawn");
    }
    for col in 11..COLS {
        assert!(glyphs.at(col, 5).is_none(), "column {col} should be masked");
        assert_eq!(surface.at(col, 5).len(), 1, "column {col} background");
    }
    assert_eq!(glyphs.count_in_row(5), 11);

    // Zone state does not leak into the next row
    assert_eq!(glyphs.count_in_row(6), COLS);
}

#[test]
fn test_delimiter_clears_mask() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(10, 5, Cell::delimiter().with_mask(true));
    page.set_cell(20, 5, Cell::delimiter().with_mask(false));
    page.set_cell(25, 5, Cell::delimiter());
    let (_, glyphs) = render(&mut page);

    assert!(glyphs.at(10, 5).is_some());
    assert!(glyphs.at(15, 5).is_none());
    // The clearing delimiter is itself still masked
    assert!(glyphs.at(20, 5).is_none());
    assert!(glyphs.at(21, 5).is_some());
    // A delimiter without a mask value keeps the mask cleared
    assert!(glyphs.at(26, 5).is_some());
}

#[test]
fn test_mosaic_cells_are_never_underlined() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(0, 3, Cell::delimiter().with_zone_underline(true));
    page.set_cell(1, 3, Cell::text(b'A'));
    page.set_cell(2, 3, Cell::mosaic(0x7f));
    page.set_cell(3, 3, Cell::text(b'B'));
    page.set_cell(4, 3, Cell::delimiter().with_zone_underline(true));
    page.set_cell(5, 3, Cell::text(b'C'));
    let (_, glyphs) = render(&mut page);

    let text = glyphs.at(1, 3).unwrap();
    assert!(text.underline);
    assert_eq!(text.charset, Charset::G0);

    let mosaic = glyphs.at(2, 3).unwrap();
    assert!(!mosaic.underline);
    assert_eq!(mosaic.charset, Charset::G1);

    // The mosaic switched the zone underline off
    assert!(!glyphs.at(3, 3).unwrap().underline);
    assert!(glyphs.at(5, 3).unwrap().underline);
}

#[test]
fn test_mosaic_ignores_size_attributes() {
    let mut page = PageMemory::new(COLS, ROWS);
    let big = Part { x: 1, y: 1 };
    page.set_cell(0, 2, Cell::mosaic(0x7f).with_size(big, Mult::DOUBLE_SIZE));
    page.set_cell(1, 2, Cell::text(b'A').with_size(big, Mult::DOUBLE_SIZE));
    let (_, glyphs) = render(&mut page);

    let mosaic = glyphs.at(0, 2).unwrap();
    assert_eq!(mosaic.part, Part::default());
    assert_eq!(mosaic.mult, Mult::NORMAL);

    let text = glyphs.at(1, 2).unwrap();
    assert_eq!(text.part, big);
    assert_eq!(text.mult, Mult::DOUBLE_SIZE);
}

#[test]
fn test_inverted_cell_swaps_colors() {
    let mut page = PageMemory::new(COLS, ROWS);
    let cell = Cell::text(b'A')
        .with_colors(Color::Red, Color::Blue)
        .with_inverted(true);
    page.set_cell(7, 9, cell);
    let (surface, glyphs) = render(&mut page);

    assert_eq!(surface.at(7, 9), vec![Color::Red]);
    assert_eq!(glyphs.at(7, 9).unwrap().fg, Color::Blue);
}

#[test]
fn test_zone_background() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(0, 4, Cell::delimiter().with_zone_background(Color::Green));
    page.set_cell(1, 4, Cell::delimiter().with_colors(Color::White, Color::Red));
    page.set_cell(2, 4, Cell::mosaic(0x20).with_colors(Color::White, Color::Yellow));
    page.set_cell(3, 4, Cell::delimiter());
    let (surface, _) = render(&mut page);

    assert_eq!(surface.at(0, 4), vec![Color::Green]);
    // Delimiters do not take their own background as the zone background
    assert_eq!(surface.at(1, 4), vec![Color::Green]);
    assert_eq!(surface.at(2, 4), vec![Color::Yellow]);
    assert_eq!(surface.at(3, 4), vec![Color::Yellow]);
    // Every row starts black
    assert_eq!(surface.at(0, 5), vec![Color::Black]);
}

#[test]
fn test_scroll_loses_the_discarded_row() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(0, 2, Cell::text(b'X'));
    page.set_cell(0, 3, Cell::text(b'Y'));

    page.scroll(ScrollDirection::Up);
    page.scroll(ScrollDirection::Down);

    // Row 2 was pushed out and comes back blank
    assert_ne!(page.cell(0, 2).unwrap().code, b'X');
    assert!(page.row(2).unwrap().is_blank());
    assert_eq!(page.cell(0, 3).unwrap().code, b'Y');
}

#[test]
fn test_render_is_deterministic() {
    let mut page = PageMemory::new(COLS, ROWS);
    page.set_cell(3, 3, Cell::delimiter().with_mask(true));
    page.set_cell(9, 8, Cell::mosaic(0x35).with_colors(Color::Cyan, Color::Magenta));

    let (first_surface, first_glyphs) = render(&mut page);
    let (second_surface, second_glyphs) = render(&mut page);
    assert_eq!(first_surface.fills, second_surface.fills);
    assert_eq!(*first_glyphs.glyphs.borrow(), *second_glyphs.glyphs.borrow());
}

#[test]
fn test_pixels_with_sextant_font() {
    let config = Config::default();
    let mut page = config.page();
    page.set_cell(0, 1, Cell::mosaic(0x7f).with_colors(Color::Red, Color::Black));
    page.set_cell(1, 1, Cell::text(b' ').with_colors(Color::White, Color::Blue));

    let mut surface = config.surface();
    config.renderer().render(&mut page, &mut surface, &config.font());

    // Zoom 2: cell (0, 1) starts at device pixel (0, 20)
    assert_eq!(surface.pixel(0, 20), Some((255, 0, 0)));
    assert_eq!(surface.pixel(15, 39), Some((255, 0, 0)));
    assert_eq!(surface.pixel(17, 21), Some((0, 0, 255)));
    assert_eq!(surface.pixel(0, 40), Some((0, 0, 0)));
}
