//! Protocol Commands
//!
//! The command tree exchanged with authoring tools. Each node is one
//! protocol command; groups nest other commands. Compiling a tree pushes
//! the protocol codes of every command into a [`Stream`] in document order.
//!
//! Documents are JSON arrays of nodes tagged by `type`:
//!
//! ```json
//! [
//!   { "type": "clear-screen" },
//!   { "type": "move-locate", "x": 1, "y": 1 },
//!   { "type": "color-fg", "color": "yellow" },
//!   { "type": "content-string", "value": "Bonjour" }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::stream::codes::{
    BG_BASE, BLINK_OFF, BLINK_ON, BS, CAN, CR, DOUBLE_HEIGHT, DOUBLE_SIZE, DOUBLE_WIDTH, ESC,
    FF, FG_BASE, HT, INVERT_OFF, INVERT_ON, LF, NORMAL_SIZE, NUL, RS, SI, SO, UNDERLINE_OFF,
    UNDERLINE_ON, US, VT,
};
use crate::stream::Stream;

/// Highest row a cursor can be located on
pub const MAX_ROW: u8 = 24;

/// Highest column a cursor can be located on
pub const MAX_COL: u8 = 40;

/// Codes per second on a 1200 baud link (10 bits per code)
pub const CODES_PER_SECOND: u32 = 120;

/// A node of the command tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    /// Move the cursor to column `x` (1-40) of row `y` (0-24, 0 is the status line)
    MoveLocate { x: u8, y: u8 },
    /// Move the cursor to the first column of the first row
    MoveHome,
    MoveLeft,
    MoveUp,
    MoveDown,
    MoveRight,
    /// Move the cursor to the first column of the current row
    MoveSol,

    ClearScreen,
    /// Clear from the cursor to the end of the row
    ClearEol,

    ColorFg { color: Color },
    ColorBg { color: Color },

    EffectNormalSize,
    EffectDoubleSize,
    EffectDoubleWidth,
    EffectDoubleHeight,
    EffectBlinkOn,
    EffectBlinkOff,
    EffectInvertOn,
    EffectInvertOff,
    EffectUnderlineOn,
    EffectUnderlineOff,

    /// A group of commands compiled in order
    ContentGroup {
        #[serde(default)]
        children: Vec<Command>,
    },
    /// Text written at the cursor
    ContentString { value: String },
    /// Lines of text, each starting on a new row
    ContentBlock { value: String },
    /// Mosaic characters, written in the graphics set
    Smgraph { codes: Vec<u8> },
    /// Pause the terminal by sending padding
    ContentDelay { milliseconds: u32 },
}

impl Command {
    /// Push the protocol codes of this command
    pub fn encode(&self, stream: &mut Stream) -> Result<(), CommandError> {
        match self {
            Command::MoveLocate { x, y } => {
                if !(1..=MAX_COL).contains(x) {
                    return Err(CommandError::OutOfRange {
                        field: "column",
                        value: *x,
                    });
                }
                if *y > MAX_ROW {
                    return Err(CommandError::OutOfRange {
                        field: "row",
                        value: *y,
                    });
                }
                stream.push([US, 0x40 + y, 0x40 + x]);
            }
            Command::MoveHome => stream.push(RS),
            Command::MoveLeft => stream.push(BS),
            Command::MoveUp => stream.push(VT),
            Command::MoveDown => stream.push(LF),
            Command::MoveRight => stream.push(HT),
            Command::MoveSol => stream.push(CR),

            Command::ClearScreen => stream.push(FF),
            Command::ClearEol => stream.push(CAN),

            Command::ColorFg { color } => stream.push([ESC, FG_BASE + color.index()]),
            Command::ColorBg { color } => stream.push([ESC, BG_BASE + color.index()]),

            Command::EffectNormalSize => stream.push([ESC, NORMAL_SIZE]),
            Command::EffectDoubleSize => stream.push([ESC, DOUBLE_SIZE]),
            Command::EffectDoubleWidth => stream.push([ESC, DOUBLE_WIDTH]),
            Command::EffectDoubleHeight => stream.push([ESC, DOUBLE_HEIGHT]),
            Command::EffectBlinkOn => stream.push([ESC, BLINK_ON]),
            Command::EffectBlinkOff => stream.push([ESC, BLINK_OFF]),
            Command::EffectInvertOn => stream.push([ESC, INVERT_ON]),
            Command::EffectInvertOff => stream.push([ESC, INVERT_OFF]),
            Command::EffectUnderlineOn => stream.push([ESC, UNDERLINE_ON]),
            Command::EffectUnderlineOff => stream.push([ESC, UNDERLINE_OFF]),

            Command::ContentGroup { children } => {
                for child in children {
                    child.encode(stream)?;
                }
            }
            Command::ContentString { value } => stream.push(value.as_str()),
            Command::ContentBlock { value } => {
                for (index, line) in value.lines().enumerate() {
                    if index > 0 {
                        stream.push([CR, LF]);
                    }
                    stream.push(line);
                }
            }
            Command::Smgraph { codes } => {
                stream.push(SO);
                stream.push(codes.as_slice());
                stream.push(SI);
            }
            Command::ContentDelay { milliseconds } => {
                let padding = milliseconds.saturating_mul(CODES_PER_SECOND) / 1000;
                stream.push(vec![NUL; padding as usize]);
            }
        }
        Ok(())
    }
}

/// Compile a command tree into protocol codes
pub fn compile(commands: &[Command]) -> Result<Stream, CommandError> {
    let mut stream = Stream::new();
    for command in commands {
        command.encode(&mut stream)?;
    }
    tracing::debug!(commands = commands.len(), codes = stream.len(), "compiled");
    Ok(stream)
}

/// Parse a command tree from a JSON document
pub fn from_json(json: &str) -> Result<Vec<Command>, CommandError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a command tree from a JSON file
pub fn load(path: &Path) -> Result<Vec<Command>, CommandError> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}

/// Command tree error
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: u8 },
}
