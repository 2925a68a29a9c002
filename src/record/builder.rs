//! # RecordBuilder - Record Construction
//!
//! This module provides `RecordBuilder`, the construction call for a record
//! type. Bindings accumulate positionally and by name; all validation runs
//! once at `finish()`, so a failed construction reports the complete
//! picture (every missing field, not just the first).
//!
//! ## Usage
//!
//! ```ignore
//! let record = RecordBuilder::new(&schema)
//!     .arg(Value::Int(1))
//!     .arg(Value::text("A"))
//!     .kwarg("value", Value::decimal(1, 1))
//!     .finish()?;
//! ```
//!
//! ## Binding Rules
//!
//! - Positional values bind to fields in declared order.
//! - A field bound positionally cannot also be bound by name.
//! - Unbound fields take their declared default; unbound required fields
//!   fail construction with the full ordered missing list.
//! - Values are stored as given. No type check runs unless the caller
//!   installs one with `check_types`.

use crate::record::error::ConstructError;
use crate::record::record::Record;
use crate::record::schema::SchemaRef;
use crate::types::{DataType, Value};
use eyre::Result;
use smallvec::SmallVec;
use std::sync::Arc;

/// Opt-in strict-mode hook: declared tag x supplied value -> pass/fail.
pub type TypeCheck = fn(DataType, &Value) -> bool;

pub struct RecordBuilder {
    schema: SchemaRef,
    positional: SmallVec<[Value; 8]>,
    named: SmallVec<[(String, Value); 4]>,
    check: Option<TypeCheck>,
}

impl RecordBuilder {
    /// Starts a construction call against the shared schema.
    pub fn new(schema: &SchemaRef) -> Self {
        Self {
            schema: Arc::clone(schema),
            positional: SmallVec::new(),
            named: SmallVec::new(),
            check: None,
        }
    }

    /// Binds the next positional value.
    pub fn arg(mut self, value: Value) -> Self {
        self.positional.push(value);
        self
    }

    /// Binds positional values from an iterator, in order.
    pub fn args(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.positional.extend(values);
        self
    }

    /// Binds a value by field name.
    pub fn kwarg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.named.push((name.into(), value));
        self
    }

    /// Installs a type check consulted for every bound value at `finish()`.
    ///
    /// Pass `DataType::accepts` for the stock check. Defaults are trusted
    /// as declared and never re-checked.
    pub fn check_types(mut self, check: TypeCheck) -> Self {
        self.check = Some(check);
        self
    }

    /// Validates all bindings and produces the instance.
    pub fn finish(self) -> Result<Record> {
        let schema = self.schema;
        let field_count = schema.field_count();
        let type_name = schema.type_name();

        if self.positional.len() > field_count {
            return Err(ConstructError::TooManyArguments {
                type_name: type_name.to_string(),
                expected: field_count,
                given: self.positional.len(),
            }
            .into());
        }

        let mut slots: Vec<Option<Value>> = Vec::with_capacity(field_count);
        slots.resize_with(field_count, || None);

        let positional_len = self.positional.len();
        for (idx, value) in self.positional.into_iter().enumerate() {
            slots[idx] = Some(value);
        }

        for (name, value) in self.named {
            let Some(idx) = schema.field_index(&name) else {
                return Err(ConstructError::UnknownField {
                    type_name: type_name.to_string(),
                    name,
                }
                .into());
            };
            if idx < positional_len || slots[idx].is_some() {
                return Err(ConstructError::DuplicateBinding {
                    type_name: type_name.to_string(),
                    name,
                }
                .into());
            }
            slots[idx] = Some(value);
        }

        let missing: Vec<String> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(idx, field)| slots[*idx].is_none() && field.is_required())
            .map(|(_, field)| field.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ConstructError::MissingRequiredFields {
                type_name: type_name.to_string(),
                missing,
            }
            .into());
        }

        if let Some(check) = self.check {
            for (idx, slot) in slots.iter().enumerate() {
                let Some(value) = slot else { continue };
                let field = &schema.fields()[idx];
                if !check(field.data_type(), value) {
                    return Err(ConstructError::TypeCheckFailed {
                        type_name: type_name.to_string(),
                        field: field.name().to_string(),
                        declared: field.data_type(),
                        got: value.kind(),
                    }
                    .into());
                }
            }
        }

        let mut defaulted_bitmap = vec![0u8; field_count.div_ceil(8)];
        let values: Vec<Value> = slots
            .into_iter()
            .enumerate()
            .map(|(idx, slot)| match slot {
                Some(value) => value,
                None => {
                    defaulted_bitmap[idx / 8] |= 1 << (idx % 8);
                    schema.fields()[idx]
                        .default()
                        .value()
                        .cloned()
                        .unwrap_or(Value::Null)
                }
            })
            .collect();

        Ok(Record::from_parts(schema, values, defaulted_bitmap))
    }
}
