//! Protocol Stream Module
//!
//! A [`Stream`] is a queue of protocol codes. Any [`Value`] can be pushed
//! into it: characters, numbers, sequences and other streams are linearized
//! into codes in the 0x00-0x7F range the terminal understands.
//!
//! Pushing never fails. Special characters are expanded through the
//! substitution table and codes outside the protocol range are dropped.
//!
//! Two passes work on a stream holding exactly one display row:
//! - [`Stream::trim_row`] drops trailing control codes
//! - [`Stream::optimize_row`] collapses runs of a character into repeat markers

pub mod codes;
mod row;
mod special;
mod value;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

pub use special::{substitute, SPECIAL_CHARS};
pub use value::Value;

use codes::MAX_CODE;

/// An ordered queue of protocol codes
///
/// Deserialized codes go through [`Stream::push`] like any other value, so
/// a stream read from JSON never holds a code above 0x7F.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", from = "Vec<i64>")]
pub struct Stream {
    items: VecDeque<u8>,
}

impl Stream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream from any value
    pub fn from_value(value: impl Into<Value>) -> Self {
        let mut stream = Self::new();
        stream.push(value);
        stream
    }

    /// Empty the stream
    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Number of codes in the stream
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Code at a position
    pub fn get(&self, index: usize) -> Option<u8> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    /// Copy the codes into a byte vector, ready for transmission
    pub fn to_vec(&self) -> Vec<u8> {
        self.items.iter().copied().collect()
    }

    /// Push any value at the end of the stream
    pub fn push(&mut self, value: impl Into<Value>) {
        self.push_value(value.into());
    }

    fn push_value(&mut self, value: Value) {
        match value {
            Value::Empty | Value::Ignored => {}
            Value::Code(code) => self.push_code(code),
            Value::Number(number) => {
                if number.is_finite() {
                    self.push_code(number.trunc() as i64);
                } else {
                    tracing::trace!(number, "dropping non-finite number");
                }
            }
            Value::Char(c) => self.push_code(c as i64),
            Value::Seq(values) => {
                for value in values {
                    self.push_value(value);
                }
            }
            Value::Stream(stream) => self.items.extend(stream.items),
        }
    }

    fn push_code(&mut self, code: i64) {
        if let Some(codes) = special::substitute(code) {
            self.items.extend(codes.iter().copied());
            return;
        }
        match u8::try_from(code) {
            Ok(code) if code <= MAX_CODE => self.items.push_back(code),
            _ => tracing::trace!(code, "dropping code outside protocol range"),
        }
    }

    /// Remove and return the first code.
    /// An empty stream returns `None` and stays empty.
    pub fn shift(&mut self) -> Option<u8> {
        self.items.pop_front()
    }

    /// Remove and return the last code.
    /// An empty stream returns `None` and stays empty.
    pub fn pop(&mut self) -> Option<u8> {
        self.items.pop_back()
    }

    /// Append codes that are already protocol-legal
    fn extend_codes(&mut self, codes: &[u8]) {
        self.items.extend(codes.iter().copied());
    }
}

impl From<Vec<i64>> for Stream {
    fn from(codes: Vec<i64>) -> Self {
        codes.into_iter().collect()
    }
}

impl From<Stream> for Vec<u8> {
    fn from(stream: Stream) -> Self {
        stream.items.into()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a u8;
    type IntoIter = std::collections::vec_deque::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<V: Into<Value>> Extend<V> for Stream {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<V: Into<Value>> FromIterator<V> for Stream {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut stream = Self::new();
        stream.extend(iter);
        stream
    }
}
