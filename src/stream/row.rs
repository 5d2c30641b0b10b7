//! Row passes
//!
//! Both passes expect the stream to hold exactly one display row. Applied
//! to anything else they still return protocol-legal codes, but the result
//! is not guaranteed to display the same.

use super::codes::{
    is_background, is_foreground, BG_DEFAULT, ESC, FF, FG_DEFAULT, HT, PRINTABLE, REP,
    REP_BASE, REP_MAX, RS, SS2, UNDERLINE_OFF, UNDERLINE_ON, US,
};
use super::special::g2_len;
use super::Stream;

impl Stream {
    /// Return the row without its trailing control codes.
    ///
    /// The result ends with the last printable code or repeat marker. The
    /// parameter of an escape sequence and the two parameters of a unit
    /// separator never count as printable.
    pub fn trim_row(&self) -> Stream {
        let len = self.items.len();
        let mut last = None;
        let mut i = 0;

        while i < len {
            let code = self.items[i];

            if code >= PRINTABLE {
                last = Some(i);
                i += 1;
                continue;
            }

            if code == REP {
                last = Some(i + 1);
                i += 2;
                continue;
            }

            if code == ESC {
                i += 1;
            }
            if self.items.get(i) == Some(&US) {
                i += 2;
            }
            i += 1;
        }

        let end = last.map_or(0, |last| (last + 1).min(len));
        let mut trimmed = Stream::new();
        trimmed.items.extend(self.items.range(..end).copied());
        trimmed
    }

    /// Return the row with runs of a character replaced by repeat markers.
    ///
    /// Redundant color and separation changes are dropped. Every other
    /// control is copied with its parameters. Cursor positioning (US, RS,
    /// FF) resets the tracked attributes to their defaults.
    pub fn optimize_row(&self) -> Stream {
        let mut state = RowState::default();
        let mut run = 0usize;
        let mut optimized = Stream::new();
        let mut i = 0;

        while i < self.items.len() {
            let event = state.classify(self, i);

            if run > 0 && event.flushes() {
                flush_run(&mut optimized, state.last, run);
                run = 0;
            }

            match event {
                Event::MoveRight => optimized.extend_codes(&[HT]),
                Event::Foreground(fg) => {
                    state.fg = fg;
                    optimized.extend_codes(&[ESC, fg]);
                }
                Event::Background(bg) => {
                    state.bg = bg;
                    optimized.extend_codes(&[ESC, bg]);
                }
                Event::Separated(param) => {
                    state.separated = !state.separated;
                    optimized.extend_codes(&[ESC, param]);
                }
                Event::Char(c) => {
                    state.last = c;
                    optimized.extend_codes(&[c]);
                }
                Event::Repeat => run += 1,
                Event::Control(len) => {
                    let end = (i + len).min(self.items.len());
                    optimized.items.extend(self.items.range(i..end).copied());
                    match self.items[i] {
                        // The terminal repeats a G2 glyph, not the code we last saw
                        SS2 => state.last = 0,
                        // Positioning starts over with default attributes
                        US | RS | FF => state = RowState::default(),
                        _ => {}
                    }
                }
                Event::Redundant => {}
            }

            i += event.len();
        }

        if run > 0 {
            flush_run(&mut optimized, state.last, run);
        }

        optimized
    }
}

/// Emit a pending run of `count` repetitions of `c`
fn flush_run(out: &mut Stream, c: u8, mut count: usize) {
    let max = REP_MAX as usize;
    while count > max {
        out.extend_codes(&[REP, REP_BASE + REP_MAX]);
        count -= max;
    }
    if count == 1 {
        out.extend_codes(&[c]);
    } else {
        out.extend_codes(&[REP, REP_BASE + count as u8]);
    }
}

/// Attribute state of the terminal while walking a row
#[derive(Debug, Clone, Copy)]
struct RowState {
    fg: u8,
    bg: u8,
    separated: bool,
    last: u8,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            fg: FG_DEFAULT,
            bg: BG_DEFAULT,
            separated: false,
            last: 0x00,
        }
    }
}

/// What one position of the row does to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    MoveRight,
    Foreground(u8),
    Background(u8),
    Separated(u8),
    Char(u8),
    Repeat,
    /// Any other control, spanning this many codes
    Control(usize),
    /// An escape sequence that changes nothing
    Redundant,
}

impl Event {
    fn flushes(self) -> bool {
        !matches!(self, Event::Repeat | Event::Redundant)
    }

    /// Number of codes consumed
    fn len(self) -> usize {
        match self {
            Event::Foreground(_)
            | Event::Background(_)
            | Event::Separated(_)
            | Event::Redundant => 2,
            Event::Control(len) => len,
            Event::MoveRight | Event::Char(_) | Event::Repeat => 1,
        }
    }
}

impl RowState {
    /// Classify the code at `i`. The first matching check wins.
    fn classify(&self, row: &Stream, i: usize) -> Event {
        let code = row.items[i];
        let param = row.get(i + 1);

        if code == HT {
            return Event::MoveRight;
        }

        if code == ESC {
            let Some(param) = param else {
                return Event::Control(1);
            };
            if is_foreground(param) {
                return if param != self.fg {
                    Event::Foreground(param)
                } else {
                    Event::Redundant
                };
            }
            if is_background(param) {
                return if param != self.bg {
                    Event::Background(param)
                } else {
                    Event::Redundant
                };
            }
            return match (param, self.separated) {
                (UNDERLINE_ON, false) | (UNDERLINE_OFF, true) => Event::Separated(param),
                (UNDERLINE_ON, true) | (UNDERLINE_OFF, false) => Event::Redundant,
                _ => Event::Control(2),
            };
        }

        if code >= PRINTABLE {
            return if code != self.last {
                Event::Char(code)
            } else {
                Event::Repeat
            };
        }

        match code {
            REP => Event::Control(2),
            US => Event::Control(3),
            SS2 => Event::Control(1 + param.map_or(0, g2_len)),
            _ => Event::Control(1),
        }
    }
}
