//! # Semantic Type Tags
//!
//! This module provides the canonical `DataType` enum for dynrec, used across
//! record schemas and row headers.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: one DataType enum used everywhere
//! 2. **Storage-efficient**: `#[repr(u8)]` for single-byte discriminant
//! 3. **Advisory only**: tags document intent; construction never checks a
//!    value against its declared tag unless a caller installs a check
//! 4. **Metadata-free**: container element tags live in `FieldDef`, not here
//!
//! ## Type Categories
//!
//! | Category | Types |
//! |----------|-------|
//! | **Boolean** | Bool |
//! | **Numeric** | Int, Float, Decimal |
//! | **Date/Time** | Date, Time, Timestamp |
//! | **Text** | Text |
//! | **Binary** | Blob |
//! | **Container** | List |
//!
//! ## Discriminant Values
//!
//! Discriminants are grouped by category:
//! - 0-8: fixed-width primitives (bool, int, float, decimal, datetime)
//! - 20-21: variable-length text/binary
//! - 40: containers
//!
//! ## Usage
//!
//! ```ignore
//! use dynrec::types::{DataType, Value};
//!
//! let dt = DataType::Int;
//! assert!(dt.is_numeric());
//! assert!(dt.accepts(&Value::Int(42)));
//! ```

use crate::types::Value;

/// Advisory type tag for a declared field or column.
///
/// Uses `#[repr(u8)]` for efficient single-byte encoding. Element tags for
/// `List` fields are stored in `FieldDef`, not in the enum.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool = 0,
    Int = 1,
    Float = 2,
    Decimal = 3,
    Date = 6,
    Time = 7,
    Timestamp = 8,

    Text = 20,
    Blob = 21,

    List = 40,
}

impl DataType {
    /// Returns true if this is a numeric type (integer, float, or decimal).
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float | DataType::Decimal)
    }

    /// Returns true if this is a date/time type.
    pub fn is_datetime(&self) -> bool {
        matches!(self, DataType::Date | DataType::Time | DataType::Timestamp)
    }

    /// Returns true if this is a text-like type.
    pub fn is_text(&self) -> bool {
        matches!(self, DataType::Text)
    }

    /// Stock strict-mode check: does `value` agree with this tag?
    ///
    /// `Null` passes every tag. `List` accepts any element types; element
    /// tags are advisory. This is only consulted when a caller installs a
    /// check via `RecordBuilder::check_types` — default construction never
    /// calls it. The by-value receiver makes `DataType::accepts` usable
    /// directly as a `TypeCheck`.
    pub fn accepts(self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::Bool(_) => self == DataType::Bool,
            Value::Int(_) => self == DataType::Int,
            Value::Float(_) => self == DataType::Float,
            Value::Decimal { .. } => self == DataType::Decimal,
            Value::Date(_) => self == DataType::Date,
            Value::Time(_) => self == DataType::Time,
            Value::Timestamp(_) => self == DataType::Timestamp,
            Value::Text(_) => self == DataType::Text,
            Value::Blob(_) => self == DataType::Blob,
            Value::List(_) => self == DataType::List,
        }
    }

    /// Returns the lowercase tag name used in messages.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Decimal => "decimal",
            DataType::Date => "date",
            DataType::Time => "time",
            DataType::Timestamp => "timestamp",
            DataType::Text => "text",
            DataType::Blob => "blob",
            DataType::List => "list",
        }
    }
}

impl TryFrom<u8> for DataType {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DataType::Bool),
            1 => Ok(DataType::Int),
            2 => Ok(DataType::Float),
            3 => Ok(DataType::Decimal),
            6 => Ok(DataType::Date),
            7 => Ok(DataType::Time),
            8 => Ok(DataType::Timestamp),
            20 => Ok(DataType::Text),
            21 => Ok(DataType::Blob),
            40 => Ok(DataType::List),
            _ => eyre::bail!("invalid DataType discriminant: {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_predicates() {
        assert!(DataType::Int.is_numeric());
        assert!(DataType::Decimal.is_numeric());
        assert!(!DataType::Text.is_numeric());
        assert!(DataType::Timestamp.is_datetime());
        assert!(!DataType::Blob.is_datetime());
        assert!(DataType::Text.is_text());
    }

    #[test]
    fn discriminant_round_trip() {
        for dt in [
            DataType::Bool,
            DataType::Int,
            DataType::Float,
            DataType::Decimal,
            DataType::Date,
            DataType::Time,
            DataType::Timestamp,
            DataType::Text,
            DataType::Blob,
            DataType::List,
        ] {
            assert_eq!(DataType::try_from(dt as u8).unwrap(), dt);
        }
    }

    #[test]
    fn invalid_discriminant_fails() {
        let result = DataType::try_from(99);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid DataType discriminant"));
    }

    #[test]
    fn accepts_null_for_every_tag() {
        assert!(DataType::Int.accepts(&Value::Null));
        assert!(DataType::Text.accepts(&Value::Null));
        assert!(DataType::List.accepts(&Value::Null));
    }

    #[test]
    fn accepts_matches_variant() {
        assert!(DataType::Int.accepts(&Value::Int(1)));
        assert!(!DataType::Int.accepts(&Value::text("1")));
        assert!(DataType::Decimal.accepts(&Value::decimal(99, 1)));
    }

    #[test]
    fn accepts_list_ignores_element_types() {
        let mixed = Value::list([Value::Int(1), Value::Int(2), Value::text("A")]);
        assert!(DataType::List.accepts(&mixed));
    }
}
