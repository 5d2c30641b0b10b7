//! Special character substitution
//!
//! The terminal has no code for accented letters and a few symbols. It draws
//! them from its G2 set: `SS2` followed by an accent and the base letter, or
//! `SS2` followed by a single symbol code.

use super::codes::SS2;

const GRAVE: u8 = 0x41;
const ACUTE: u8 = 0x42;
const CIRCUMFLEX: u8 = 0x43;
const DIAERESIS: u8 = 0x48;
const CEDILLA: u8 = 0x4b;

/// Character to protocol codes, consulted for every pushed value
pub const SPECIAL_CHARS: &[(char, &[u8])] = &[
    ('à', &[SS2, GRAVE, b'a']),
    ('è', &[SS2, GRAVE, b'e']),
    ('ù', &[SS2, GRAVE, b'u']),
    ('é', &[SS2, ACUTE, b'e']),
    ('â', &[SS2, CIRCUMFLEX, b'a']),
    ('ê', &[SS2, CIRCUMFLEX, b'e']),
    ('î', &[SS2, CIRCUMFLEX, b'i']),
    ('ô', &[SS2, CIRCUMFLEX, b'o']),
    ('û', &[SS2, CIRCUMFLEX, b'u']),
    ('ä', &[SS2, DIAERESIS, b'a']),
    ('ë', &[SS2, DIAERESIS, b'e']),
    ('ï', &[SS2, DIAERESIS, b'i']),
    ('ö', &[SS2, DIAERESIS, b'o']),
    ('ü', &[SS2, DIAERESIS, b'u']),
    ('ç', &[SS2, CEDILLA, b'c']),
    ('£', &[SS2, 0x23]),
    ('§', &[SS2, 0x27]),
    ('←', &[SS2, 0x2c]),
    ('↑', &[SS2, 0x2d]),
    ('→', &[SS2, 0x2e]),
    ('↓', &[SS2, 0x2f]),
    ('°', &[SS2, 0x30]),
    ('±', &[SS2, 0x31]),
    ('÷', &[SS2, 0x38]),
    ('¼', &[SS2, 0x3c]),
    ('½', &[SS2, 0x3d]),
    ('¾', &[SS2, 0x3e]),
    ('Œ', &[SS2, 0x6a]),
    ('œ', &[SS2, 0x7a]),
    ('ß', &[SS2, 0x7b]),
];

/// Look up the codes replacing a value, if it is a special character
pub fn substitute(value: i64) -> Option<&'static [u8]> {
    SPECIAL_CHARS
        .iter()
        .find(|(c, _)| *c as i64 == value)
        .map(|(_, codes)| *codes)
}

/// Number of codes following `SS2` in a G2 sequence starting with `first`
pub fn g2_len(first: u8) -> usize {
    match first {
        GRAVE..=0x4f => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::codes::MAX_CODE;

    #[test]
    fn test_substitute_accented_letter() {
        assert_eq!(substitute('é' as i64), Some(&[SS2, 0x42, b'e'][..]));
        assert_eq!(substitute('ç' as i64), Some(&[SS2, 0x4b, b'c'][..]));
    }

    #[test]
    fn test_substitute_plain_ascii() {
        assert_eq!(substitute('e' as i64), None);
        assert_eq!(substitute(0x20), None);
    }

    #[test]
    fn test_table_is_protocol_legal() {
        for (c, codes) in SPECIAL_CHARS {
            assert!(*c as u32 > MAX_CODE as u32, "{c} is plain ASCII");
            assert!(codes.iter().all(|&code| code <= MAX_CODE));
            assert_eq!(codes.len(), 1 + g2_len(codes[1]));
        }
    }
}
