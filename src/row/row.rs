use crate::row::header::HeaderRef;
use crate::types::Value;
use eyre::{bail, Result};

/// One result row: a shared header plus one value per column.
///
/// Positional access always works. Name access works only for columns
/// whose label is a bare identifier; any other key fails with a
/// no-such-column error.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    header: HeaderRef,
    values: Vec<Value>,
}

impl Row {
    pub fn new(header: HeaderRef, values: Vec<Value>) -> Self {
        Self { header, values }
    }

    pub fn header(&self) -> &HeaderRef {
        &self.header
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Looks up a column by name.
    pub fn get_named(&self, name: &str) -> Result<&Value> {
        match self.header.column_index(name) {
            Some(idx) => Ok(&self.values[idx]),
            None => bail!("no such column: '{}'", name),
        }
    }

    pub fn get_int(&self, index: usize) -> Result<i64> {
        match self.get(index) {
            Some(Value::Int(i)) => Ok(*i),
            Some(other) => bail!("expected int, got {}", other.kind()),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_float(&self, index: usize) -> Result<f64> {
        match self.get(index) {
            Some(Value::Float(x)) => Ok(*x),
            Some(other) => bail!("expected float, got {}", other.kind()),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_text(&self, index: usize) -> Result<&str> {
        match self.get(index) {
            Some(Value::Text(s)) => Ok(s),
            Some(other) => bail!("expected text, got {}", other.kind()),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn get_blob(&self, index: usize) -> Result<&[u8]> {
        match self.get(index) {
            Some(Value::Blob(b)) => Ok(b),
            Some(other) => bail!("expected blob, got {}", other.kind()),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn is_null(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Value::Null))
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }
}
