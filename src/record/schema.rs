//! # Schema Definition
//!
//! This module provides the `RecordSchema` struct that defines the shape of
//! a record. The schema pre-computes a name-to-index map for field lookup.
//!
//! ## Schema Internals
//!
//! - `type_name`: the record type's display name
//! - `fields`: ordered field declarations
//! - `by_name`: pre-computed field name -> index map
//! - `required_count`: number of leading fields without defaults
//!
//! Declaration order is load-bearing: it defines both the positional
//! binding order and the canonical render order. Once any field has a
//! default, every later field must have one too, so positional calls stay
//! unambiguous.

use crate::config::MAX_FIELDS;
use crate::record::error::SchemaError;
use crate::record::field::FieldDef;
use crate::row::RowHeader;
use crate::types::{is_bare_identifier, DataType};
use eyre::Result;
use hashbrown::HashMap;
use std::sync::Arc;

/// Shared handle to a schema. All instances of a record type hold one.
pub type SchemaRef = Arc<RecordSchema>;

#[derive(Debug, PartialEq)]
pub struct RecordSchema {
    type_name: String,
    fields: Vec<FieldDef>,
    by_name: HashMap<String, usize>,
    required_count: usize,
}

impl RecordSchema {
    /// Validates a declaration and builds the shared schema.
    ///
    /// Fails when a field name repeats, is not a bare identifier, when a
    /// required field follows a defaulted one, or when the declaration
    /// exceeds `MAX_FIELDS`.
    pub fn new(type_name: impl Into<String>, fields: Vec<FieldDef>) -> Result<SchemaRef> {
        let type_name = type_name.into();

        if fields.len() > MAX_FIELDS {
            return Err(SchemaError::TooManyFields {
                type_name,
                count: fields.len(),
            }
            .into());
        }

        let mut by_name = HashMap::with_capacity(fields.len());
        let mut first_defaulted: Option<usize> = None;

        for (idx, field) in fields.iter().enumerate() {
            if !is_bare_identifier(field.name()) {
                return Err(SchemaError::InvalidFieldName {
                    type_name,
                    name: field.name().to_string(),
                }
                .into());
            }
            if by_name.insert(field.name().to_string(), idx).is_some() {
                return Err(SchemaError::DuplicateFieldName {
                    type_name,
                    name: field.name().to_string(),
                }
                .into());
            }
            match (field.is_required(), first_defaulted) {
                (true, Some(defaulted_idx)) => {
                    return Err(SchemaError::RequiredAfterDefault {
                        type_name,
                        required: field.name().to_string(),
                        defaulted: fields[defaulted_idx].name().to_string(),
                    }
                    .into());
                }
                (false, None) => first_defaulted = Some(idx),
                _ => {}
            }
        }

        let required_count = first_defaulted.unwrap_or(fields.len());

        Ok(Arc::new(Self {
            type_name,
            fields,
            by_name,
            required_count,
        }))
    }

    /// Derives a schema from a row header, one required field per column.
    ///
    /// Every label must be a bare identifier; a header containing an
    /// expression label like `count(*)` cannot be wrapped as a fixed-schema
    /// record until the column is aliased.
    pub fn from_row_header(type_name: impl Into<String>, header: &RowHeader) -> Result<SchemaRef> {
        let fields = header
            .labels()
            .iter()
            .map(|label| FieldDef::new(label.clone(), DataType::Text))
            .collect();
        Self::new(type_name, fields)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, idx: usize) -> Option<&FieldDef> {
        self.fields.get(idx)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.field_index(name).map(|idx| &self.fields[idx])
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Number of fields that must receive a value at construction.
    pub fn required_count(&self) -> usize {
        self.required_count
    }
}
