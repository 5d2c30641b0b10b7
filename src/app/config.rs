//! Configuration for the terminal display

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{PageMemory, Palette};
use crate::renderer::{CharSize, PixelBuffer, Renderer, SextantFont, Zoom};

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page dimensions
    pub grid: GridConfig,
    /// Cell size in logical pixels
    pub char_size: CharSize,
    /// Logical to device pixel scale
    pub zoom: Zoom,
    /// Palette used to convert colors to pixels
    pub palette: Palette,
}

/// Page dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 40, rows: 25 }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A blank page of the configured size
    pub fn page(&self) -> PageMemory {
        PageMemory::new(self.grid.cols, self.grid.rows)
    }

    /// A surface large enough for the whole page
    pub fn surface(&self) -> PixelBuffer {
        PixelBuffer::new(
            (self.grid.cols as u32).saturating_mul(self.char_size.width),
            (self.grid.rows as u32).saturating_mul(self.char_size.height),
            self.zoom,
            self.palette,
        )
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.char_size)
    }

    pub fn font(&self) -> SextantFont {
        SextantFont::new(self.char_size)
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
