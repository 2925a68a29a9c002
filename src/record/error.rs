//! # Construction and Definition Errors
//!
//! Typed errors for the two failure points in the record lifecycle:
//! `SchemaError` at definition time and `ConstructError` at construction
//! time. Both implement `std::error::Error` and convert into
//! `eyre::Report`, so callers can match on kinds via downcast or just read
//! the formatted message.
//!
//! ## Message Formats
//!
//! Construction messages follow a fixed shape that tests assert verbatim.
//! Missing-field lists join names in declared order with a conjunction
//! before the last one:
//!
//! ```text
//! Person() missing 1 required argument: 'id'
//! Person() missing 2 required arguments: 'birth' and 'value'
//! Person() missing 4 required arguments: 'id', 'name', 'birth', and 'value'
//! ```
//!
//! Every failure is local and synchronous; construction either fully
//! succeeds or produces no instance. Nothing is retried.

use crate::types::DataType;
use std::fmt;

/// Definition-time schema error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field name appears more than once in the declaration.
    DuplicateFieldName { type_name: String, name: String },
    /// A field name is not a bare identifier.
    InvalidFieldName { type_name: String, name: String },
    /// A field without a default follows a field with one.
    RequiredAfterDefault {
        type_name: String,
        required: String,
        defaulted: String,
    },
    /// The declaration exceeds `config::MAX_FIELDS`.
    TooManyFields { type_name: String, count: usize },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateFieldName { type_name, name } => {
                write!(f, "{}: duplicate field name '{}'", type_name, name)
            }
            SchemaError::InvalidFieldName { type_name, name } => {
                write!(
                    f,
                    "{}: field name '{}' is not a valid identifier",
                    type_name, name
                )
            }
            SchemaError::RequiredAfterDefault {
                type_name,
                required,
                defaulted,
            } => {
                write!(
                    f,
                    "{}: required field '{}' follows defaulted field '{}'",
                    type_name, required, defaulted
                )
            }
            SchemaError::TooManyFields { type_name, count } => {
                write!(
                    f,
                    "{}: {} fields exceeds the limit of {}",
                    type_name,
                    count,
                    crate::config::MAX_FIELDS
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Construction-time error. Carries enough structure for callers to
/// distinguish every failure kind without parsing the message.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructError {
    /// One or more required fields received no value. `missing` holds the
    /// omitted names in declared order.
    MissingRequiredFields {
        type_name: String,
        missing: Vec<String>,
    },
    /// More positional values were supplied than fields declared.
    TooManyArguments {
        type_name: String,
        expected: usize,
        given: usize,
    },
    /// A named binding referenced a field the schema does not declare.
    UnknownField { type_name: String, name: String },
    /// A field was bound both positionally and by name.
    DuplicateBinding { type_name: String, name: String },
    /// An installed type check rejected a value (opt-in strict mode only).
    TypeCheckFailed {
        type_name: String,
        field: String,
        declared: DataType,
        got: &'static str,
    },
}

/// Joins field names as `'a'`, `'a' and 'b'`, or `'a', 'b', and 'c'`.
fn join_quoted(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => format!("'{}'", only),
        [first, second] => format!("'{}' and '{}'", first, second),
        [head @ .., last] => {
            let mut out = String::new();
            for name in head {
                out.push_str(&format!("'{}', ", name));
            }
            out.push_str(&format!("and '{}'", last));
            out
        }
    }
}

impl fmt::Display for ConstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::MissingRequiredFields { type_name, missing } => {
                let noun = if missing.len() == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(
                    f,
                    "{}() missing {} required {}: {}",
                    type_name,
                    missing.len(),
                    noun,
                    join_quoted(missing)
                )
            }
            ConstructError::TooManyArguments {
                type_name,
                expected,
                given,
            } => {
                write!(
                    f,
                    "{}() takes {} arguments but {} were given",
                    type_name, expected, given
                )
            }
            ConstructError::UnknownField { type_name, name } => {
                write!(f, "{}() got an unexpected field '{}'", type_name, name)
            }
            ConstructError::DuplicateBinding { type_name, name } => {
                write!(f, "{}() got multiple values for field '{}'", type_name, name)
            }
            ConstructError::TypeCheckFailed {
                type_name,
                field,
                declared,
                got,
            } => {
                write!(
                    f,
                    "{}() field '{}' declared {} but got {}",
                    type_name,
                    field,
                    declared.name(),
                    got
                )
            }
        }
    }
}

impl std::error::Error for ConstructError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(names: &[&str]) -> ConstructError {
        ConstructError::MissingRequiredFields {
            type_name: "Person".to_string(),
            missing: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn missing_one_uses_singular() {
        assert_eq!(
            missing(&["id"]).to_string(),
            "Person() missing 1 required argument: 'id'"
        );
    }

    #[test]
    fn missing_two_joins_with_and() {
        assert_eq!(
            missing(&["birth", "value"]).to_string(),
            "Person() missing 2 required arguments: 'birth' and 'value'"
        );
    }

    #[test]
    fn missing_four_uses_serial_comma() {
        assert_eq!(
            missing(&["id", "name", "birth", "value"]).to_string(),
            "Person() missing 4 required arguments: 'id', 'name', 'birth', and 'value'"
        );
    }

    #[test]
    fn too_many_arguments_message() {
        let err = ConstructError::TooManyArguments {
            type_name: "Person".to_string(),
            expected: 4,
            given: 6,
        };
        assert_eq!(err.to_string(), "Person() takes 4 arguments but 6 were given");
    }

    #[test]
    fn unknown_field_message() {
        let err = ConstructError::UnknownField {
            type_name: "Person".to_string(),
            name: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Person() got an unexpected field 'nope'");
    }

    #[test]
    fn duplicate_binding_message() {
        let err = ConstructError::DuplicateBinding {
            type_name: "Person".to_string(),
            name: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Person() got multiple values for field 'id'"
        );
    }

    #[test]
    fn type_check_message() {
        let err = ConstructError::TypeCheckFailed {
            type_name: "Person".to_string(),
            field: "id".to_string(),
            declared: DataType::Int,
            got: "text",
        };
        assert_eq!(
            err.to_string(),
            "Person() field 'id' declared int but got text"
        );
    }

    #[test]
    fn schema_error_messages() {
        let err = SchemaError::RequiredAfterDefault {
            type_name: "Person".to_string(),
            required: "value".to_string(),
            defaulted: "birth".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Person: required field 'value' follows defaulted field 'birth'"
        );

        let err = SchemaError::DuplicateFieldName {
            type_name: "Person".to_string(),
            name: "id".to_string(),
        };
        assert!(err.to_string().contains("duplicate field name 'id'"));
    }
}
