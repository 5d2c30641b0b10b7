//! Drawing surfaces
//!
//! A [`Surface`] receives filled rectangles in logical pixels: one cell is
//! `char_size` logical pixels. [`PixelBuffer`] is an RGBA software surface
//! that scales logical pixels by an integer zoom factor.

use crate::core::{Color, Palette};

use super::Zoom;

/// Something the renderer and glyph providers can paint on
pub trait Surface {
    /// Fill a rectangle given in logical pixels
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);
}

/// Software RGBA surface
pub struct PixelBuffer {
    /// Pixel buffer (RGBA)
    buffer: Vec<u8>,
    /// Buffer width in device pixels
    width: u32,
    /// Buffer height in device pixels
    height: u32,
    zoom: Zoom,
    palette: Palette,
}

impl PixelBuffer {
    /// Create a black buffer covering `width` x `height` logical pixels.
    /// A size that does not fit in memory gives an empty buffer.
    pub fn new(width: u32, height: u32, zoom: Zoom, palette: Palette) -> Self {
        let (width, height, len) = device_size(width, height, zoom).unwrap_or_else(|| {
            tracing::warn!(width, height, ?zoom, "surface too large, using an empty buffer");
            (0, 0, 0)
        });
        let mut surface = Self {
            buffer: vec![0u8; len],
            width,
            height,
            zoom,
            palette,
        };
        surface.clear(Color::Black);
        surface
    }

    /// Width in device pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in device pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA data, row-major
    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    /// Clear the buffer with a color
    pub fn clear(&mut self, color: Color) {
        let (r, g, b) = self.palette.rgb(color);
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, 255]);
        }
    }

    /// RGB value of a device pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some((self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2]))
    }
}

/// Device width, height and RGBA byte length, if they fit
fn device_size(width: u32, height: u32, zoom: Zoom) -> Option<(u32, u32, usize)> {
    let width = width.checked_mul(zoom.x)?;
    let height = height.checked_mul(zoom.y)?;
    let len = (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)?;
    Some((width, height, len))
}

impl Surface for PixelBuffer {
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let (r, g, b) = self.palette.rgb(color);
        let left = x.saturating_mul(self.zoom.x);
        let top = y.saturating_mul(self.zoom.y);
        let right = x.saturating_add(width).saturating_mul(self.zoom.x).min(self.width);
        let bottom = y.saturating_add(height).saturating_mul(self.zoom.y).min(self.height);

        for row in top..bottom {
            for col in left..right {
                let idx = (row as usize * self.width as usize + col as usize) * 4;
                self.buffer[idx..idx + 4].copy_from_slice(&[r, g, b, 255]);
            }
        }
    }
}
