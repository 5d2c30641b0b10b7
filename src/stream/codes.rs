//! Protocol code constants
//!
//! C0 control codes and escape parameters understood by the terminal.

/// Null, used as padding
pub const NUL: u8 = 0x00;
/// Backspace, cursor left
pub const BS: u8 = 0x08;
/// Horizontal tab, cursor right
pub const HT: u8 = 0x09;
/// Line feed, cursor down
pub const LF: u8 = 0x0a;
/// Vertical tab, cursor up
pub const VT: u8 = 0x0b;
/// Form feed, clear screen
pub const FF: u8 = 0x0c;
/// Carriage return, cursor to start of row
pub const CR: u8 = 0x0d;
/// Shift out, switch to the mosaic set
pub const SO: u8 = 0x0e;
/// Shift in, switch to the text set
pub const SI: u8 = 0x0f;
/// Repeat the previous character, followed by `0x40 + count`
pub const REP: u8 = 0x12;
/// Cancel, clear to end of row
pub const CAN: u8 = 0x18;
/// Single shift 2, the next code (or accent and letter) is from the G2 set
pub const SS2: u8 = 0x19;
/// Escape, followed by one attribute parameter
pub const ESC: u8 = 0x1b;
/// Record separator, cursor home
pub const RS: u8 = 0x1e;
/// Unit separator, followed by `0x40 + row` and `0x40 + col`
pub const US: u8 = 0x1f;

/// Highest code the terminal accepts
pub const MAX_CODE: u8 = 0x7f;

/// First printable code
pub const PRINTABLE: u8 = 0x20;

/// Base of the repeat count parameter
pub const REP_BASE: u8 = 0x40;

/// Largest count one repeat marker can carry
pub const REP_MAX: u8 = MAX_CODE - REP_BASE;

/// Foreground color parameters are `FG_BASE + color`
pub const FG_BASE: u8 = 0x40;
/// Background color parameters are `BG_BASE + color`
pub const BG_BASE: u8 = 0x50;

/// Default foreground (white)
pub const FG_DEFAULT: u8 = FG_BASE + 7;
/// Default background (black)
pub const BG_DEFAULT: u8 = BG_BASE;

pub const BLINK_ON: u8 = 0x48;
pub const BLINK_OFF: u8 = 0x49;
pub const NORMAL_SIZE: u8 = 0x4c;
pub const DOUBLE_HEIGHT: u8 = 0x4d;
pub const DOUBLE_WIDTH: u8 = 0x4e;
pub const DOUBLE_SIZE: u8 = 0x4f;

/// Stop underline (text) or separated mosaic (graphics)
pub const UNDERLINE_OFF: u8 = 0x59;
/// Start underline (text) or separated mosaic (graphics)
pub const UNDERLINE_ON: u8 = 0x5a;

pub const INVERT_OFF: u8 = 0x5c;
pub const INVERT_ON: u8 = 0x5d;

/// Check if a code is a foreground color parameter
pub fn is_foreground(param: u8) -> bool {
    (FG_BASE..=FG_BASE + 7).contains(&param)
}

/// Check if a code is a background color parameter
pub fn is_background(param: u8) -> bool {
    (BG_BASE..=BG_BASE + 7).contains(&param)
}
