//! # Record Instances
//!
//! A `Record` is one instance of a record type: a shared schema handle and
//! one owned value per field, in declared order. Instances are immutable
//! bags of bindings with no identity beyond their field values.
//!
//! A byte bitmap tracks which fields received their declared default rather
//! than an explicit binding, so "the default was applied" stays observable
//! even when the default equals a value a caller might have passed.

use crate::record::schema::SchemaRef;
use crate::row::Row;
use crate::types::Value;
use eyre::{ensure, Result};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Record {
    schema: SchemaRef,
    values: Vec<Value>,
    defaulted_bitmap: Vec<u8>,
}

impl Record {
    pub(crate) fn from_parts(
        schema: SchemaRef,
        values: Vec<Value>,
        defaulted_bitmap: Vec<u8>,
    ) -> Self {
        Self {
            schema,
            values,
            defaulted_bitmap,
        }
    }

    /// Wraps a row as an instance of `schema`, binding values positionally.
    ///
    /// The row's column count must match the schema's field count; column
    /// labels are not consulted.
    pub fn from_row(schema: &SchemaRef, row: &Row) -> Result<Record> {
        ensure!(
            row.column_count() == schema.field_count(),
            "row has {} columns but {} declares {} fields",
            row.column_count(),
            schema.type_name(),
            schema.field_count()
        );
        crate::record::RecordBuilder::new(schema)
            .args(row.values().iter().cloned())
            .finish()
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Returns the value at the given field index.
    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    /// Returns the value of the named field.
    pub fn get_named(&self, name: &str) -> Option<&Value> {
        self.schema.field_index(name).map(|idx| &self.values[idx])
    }

    /// All field values in declared order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if the field at `idx` received its declared default
    /// rather than an explicit binding.
    pub fn was_defaulted(&self, idx: usize) -> bool {
        idx < self.values.len() && self.defaulted_bitmap[idx / 8] & (1 << (idx % 8)) != 0
    }

    /// Named variant of [`Record::was_defaulted`].
    pub fn was_defaulted_named(&self, name: &str) -> bool {
        self.schema
            .field_index(name)
            .is_some_and(|idx| self.was_defaulted(idx))
    }
}

/// Field-for-field equality. How a value arrived (positional, named, or by
/// default) does not affect equality; the type name and field names do.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema && self.values == other.values
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.schema.type_name())?;
        for (idx, field) in self.schema.fields().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", field.name(), self.values[idx])?;
        }
        write!(f, ")")
    }
}
