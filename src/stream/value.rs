//! Stream input values
//!
//! Everything that can be pushed into a [`Stream`]. Conversions exist for
//! the usual Rust types and for JSON documents; values the stream does not
//! understand become [`Value::Ignored`] and push nothing.

use super::Stream;

/// A value accepted by [`Stream::push`]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nothing to push
    Empty,
    /// An integer code, substitution-checked then range-checked
    Code(i64),
    /// A number, rounded toward zero then handled as a code
    Number(f64),
    /// A single character, handled as its code point
    Char(char),
    /// A sequence of values, pushed in order
    Seq(Vec<Value>),
    /// Another stream, appended as is
    Stream(Stream),
    /// A value of an unsupported kind
    Ignored,
}

impl From<u8> for Value {
    fn from(code: u8) -> Self {
        Value::Code(code as i64)
    }
}

impl From<u16> for Value {
    fn from(code: u16) -> Self {
        Value::Code(code as i64)
    }
}

impl From<u32> for Value {
    fn from(code: u32) -> Self {
        Value::Code(code as i64)
    }
}

impl From<i32> for Value {
    fn from(code: i32) -> Self {
        Value::Code(code as i64)
    }
}

impl From<i64> for Value {
    fn from(code: i64) -> Self {
        Value::Code(code)
    }
}

impl From<usize> for Value {
    fn from(code: usize) -> Self {
        i64::try_from(code).map_or(Value::Ignored, Value::Code)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Number(number)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Value::Char(c),
            _ => Value::Seq(s.chars().map(Value::Char).collect()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::from(s.as_str())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::from(s.as_str())
    }
}

impl From<Stream> for Value {
    fn from(stream: Stream) -> Self {
        Value::Stream(stream)
    }
}

impl From<&Stream> for Value {
    fn from(stream: &Stream) -> Self {
        Value::Stream(stream.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Value::Seq(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Empty, Into::into)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Empty,
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(code) => Value::Code(code),
                None => n.as_f64().map_or(Value::Ignored, Value::Number),
            },
            serde_json::Value::String(s) => Value::from(s.as_str()),
            serde_json::Value::Array(items) => Value::Seq(items.iter().map(Value::from).collect()),
            serde_json::Value::Bool(_) | serde_json::Value::Object(_) => Value::Ignored,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from(&json)
    }
}
