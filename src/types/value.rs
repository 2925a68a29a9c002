//! # Runtime Value Representation
//!
//! This module provides `Value`, the fully-owned runtime representation for
//! field and column values. Values own all their data; there is no borrowed
//! variant because instances are plain bags of bindings with no backing
//! buffer to borrow from.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Description |
//! |---------|-----------|-------------|
//! | Null | - | absent value |
//! | Bool | bool | boolean |
//! | Int | i64 | 64-bit signed integer |
//! | Float | f64 | 64-bit floating point |
//! | Decimal | {digits: i128, scale: i16} | arbitrary-precision decimal |
//! | Date | i32 | days since epoch |
//! | Time | i64 | microseconds since midnight |
//! | Timestamp | i64 | microseconds since epoch |
//! | Text | String | UTF-8 string |
//! | Blob | Vec<u8> | binary data |
//! | List | Vec<Value> | ordered sequence, heterogeneous by design |
//!
//! ## Rendering
//!
//! `Display` produces the canonical render used when printing records:
//! `null`, `true`, `1`, `0.1`, decimals as `int.frac` with a zero-padded
//! fraction, text single-quoted with `''` escaping, blobs as an opaque
//! `<blob:N bytes>` marker, date/time/timestamp as their raw integers, and
//! lists in brackets. The render is deterministic and meant for debugging,
//! not as a serialization format.

use std::fmt;

/// Fully-owned runtime value for record fields and row columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal { digits: i128, scale: i16 },
    Date(i32),
    Time(i64),
    Timestamp(i64),
    Text(String),
    Blob(Vec<u8>),
    List(Vec<Value>),
}

impl Value {
    /// Creates a text value.
    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    /// Creates a blob value.
    pub fn blob(data: impl Into<Vec<u8>>) -> Value {
        Value::Blob(data.into())
    }

    /// Creates a decimal from unscaled digits and a scale.
    ///
    /// `decimal(99, 1)` is 9.9; `decimal(1, 0)` is 1.
    pub fn decimal(digits: i128, scale: i16) -> Value {
        Value::Decimal { digits, scale }
    }

    /// Creates a list value from any iterator of values.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Value {
        Value::List(items.into_iter().collect())
    }

    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the lowercase variant name used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal { .. } => "decimal",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Timestamp(_) => "timestamp",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Decimal { digits, scale } => {
                if *scale <= 0 {
                    write!(f, "{}", digits)
                } else {
                    let divisor = 10i128.pow(*scale as u32);
                    let int_part = *digits / divisor;
                    let frac_part = (*digits % divisor).abs();
                    write!(
                        f,
                        "{}.{:0>width$}",
                        int_part,
                        frac_part,
                        width = *scale as usize
                    )
                }
            }
            Value::Date(days) => write!(f, "{}", days),
            Value::Time(micros) => write!(f, "{}", micros),
            Value::Timestamp(micros) => write!(f, "{}", micros),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Value::Blob(b) => write!(f, "<blob:{} bytes>", b.len()),
            Value::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
