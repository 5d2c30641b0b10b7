//! Stream codec tests
//!
//! Property tests for the protocol stream: insertion, range dropping and
//! the two row passes. Optimized rows are checked by decoding them the way
//! the terminal would and comparing what ends up displayed.

use proptest::prelude::*;

use videotex_term::stream::{substitute, Stream, Value};

/// What the terminal shows or does for one decoded position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shown {
    Glyph {
        code: u8,
        fg: u8,
        bg: u8,
        separated: bool,
    },
    Tab,
    Control(u8),
}

/// Decode a row the way the terminal does
fn decode_row(row: &Stream) -> Vec<Shown> {
    let codes = row.to_vec();
    let mut fg = 0x47;
    let mut bg = 0x50;
    let mut separated = false;
    let mut last = None;
    let mut shown = Vec::new();

    let mut i = 0;
    while i < codes.len() {
        match codes[i] {
            0x1b => {
                match codes[i + 1] {
                    p @ 0x40..=0x47 => fg = p,
                    p @ 0x50..=0x57 => bg = p,
                    0x5a => separated = true,
                    0x59 => separated = false,
                    _ => {}
                }
                i += 2;
            }
            0x12 => {
                let count = codes[i + 1] - 0x40;
                if let Some(code) = last {
                    for _ in 0..count {
                        shown.push(Shown::Glyph {
                            code,
                            fg,
                            bg,
                            separated,
                        });
                    }
                }
                i += 2;
            }
            0x09 => {
                shown.push(Shown::Tab);
                i += 1;
            }
            code if code >= 0x20 => {
                shown.push(Shown::Glyph {
                    code,
                    fg,
                    bg,
                    separated,
                });
                last = Some(code);
                i += 1;
            }
            code => {
                shown.push(Shown::Control(code));
                i += 1;
            }
        }
    }
    shown
}

/// One well-formed element of a display row
fn row_token() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        4 => prop::sample::select(vec![b'A', b'B', b' ', b'-']).prop_map(|c| vec![c]),
        1 => (0x40u8..=0x47).prop_map(|fg| vec![0x1b, fg]),
        1 => (0x50u8..=0x57).prop_map(|bg| vec![0x1b, bg]),
        1 => prop::sample::select(vec![0x59u8, 0x5a]).prop_map(|p| vec![0x1b, p]),
        1 => Just(vec![0x09u8]),
        1 => prop::sample::select(vec![0x0au8, 0x0d, 0x18]).prop_map(|c| vec![c]),
    ]
}

fn display_row() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(row_token(), 0..40).prop_map(|tokens| tokens.concat())
}

proptest! {
    #[test]
    fn push_then_shift_returns_code(code in 0u8..=0x7f) {
        let mut stream = Stream::new();
        stream.push(code);
        prop_assert_eq!(stream.len(), 1);
        prop_assert_eq!(stream.shift(), Some(code));
        prop_assert!(stream.is_empty());
    }

    #[test]
    fn push_out_of_range_is_dropped(code in 0x80i64..0x11_0000) {
        prop_assume!(substitute(code).is_none());
        let mut stream = Stream::from_value("AB");
        stream.push(code);
        prop_assert_eq!(stream.len(), 2);
    }

    #[test]
    fn push_is_associative(
        a in prop::collection::vec(any::<u8>(), 0..32),
        b in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut separate = Stream::new();
        separate.push(Stream::from_value(a.clone()));
        separate.push(Stream::from_value(b.clone()));

        let mut joined = Stream::new();
        joined.push(Stream::from_value([a, b].concat()));

        prop_assert_eq!(separate, joined);
    }

    #[test]
    fn stream_codes_stay_in_range(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let stream = Stream::from_value(values);
        prop_assert!(stream.iter().all(|code| code <= 0x7f));
    }

    #[test]
    fn trim_row_is_idempotent(row in prop::collection::vec(0u8..=0x7f, 0..64)) {
        let once = Stream::from_value(row).trim_row();
        let twice = once.trim_row();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn trim_row_keeps_displayed_content(row in display_row()) {
        let row = Stream::from_value(row);
        let glyphs = |shown: Vec<Shown>| -> Vec<Shown> {
            shown.into_iter().filter(|s| matches!(s, Shown::Glyph { .. })).collect()
        };
        prop_assert_eq!(glyphs(decode_row(&row.trim_row())), glyphs(decode_row(&row)));
    }

    #[test]
    fn optimize_row_displays_the_same(row in display_row()) {
        let row = Stream::from_value(row);
        let optimized = row.optimize_row();
        prop_assert_eq!(decode_row(&optimized), decode_row(&row));
        prop_assert!(optimized.len() <= row.len());
    }
}

#[test]
fn optimize_collapses_five_identical_codes() {
    let optimized = Stream::from_value("AAAAA").optimize_row();
    // The first code is drawn, the marker repeats it four more times
    assert_eq!(optimized.to_vec(), vec![b'A', 0x12, 0x40 + 4]);
    assert_eq!(decode_row(&optimized).len(), 5);
}

#[test]
fn optimize_emits_single_code_literally() {
    let optimized = Stream::from_value("A").optimize_row();
    assert_eq!(optimized.to_vec(), vec![b'A']);
}

#[test]
fn optimize_pending_run_of_one_is_literal() {
    let optimized = Stream::from_value("AA").optimize_row();
    assert_eq!(optimized.to_vec(), vec![b'A', b'A']);
}

#[test]
fn special_chars_expand_on_push() {
    let stream = Stream::from_value(Value::Code('à' as i64));
    assert_eq!(stream.to_vec(), vec![0x19, 0x41, b'a']);
}

#[test]
fn shift_and_pop_on_empty_stream_never_underflow() {
    let mut stream = Stream::new();
    for _ in 0..3 {
        assert_eq!(stream.shift(), None);
        assert_eq!(stream.pop(), None);
    }
    assert_eq!(stream.len(), 0);
}
