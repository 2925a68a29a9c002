//! # Field Declarations
//!
//! A `FieldDef` declares one slot of a record schema: a name, an advisory
//! type tag, an optional default, and optional read-only metadata for
//! external tooling. Defaults use a dedicated `FieldDefault` sentinel so
//! that "no default configured" stays distinguishable from a legitimate
//! default of any value, including `Null`.

use crate::types::{DataType, Value};
use hashbrown::HashMap;

/// Default marker for a declared field.
///
/// `Missing` is the absent-default sentinel. It is a variant of its own
/// rather than a reuse of any data value, so `Missing` never compares equal
/// to `Value(Value::Null)` or any other configured default.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDefault {
    /// No default configured; the field is required at construction.
    Missing,
    /// The value supplied when the field is omitted at construction.
    Value(Value),
}

impl FieldDefault {
    /// Returns true if no default is configured.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldDefault::Missing)
    }

    /// Returns the configured default value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            FieldDefault::Missing => None,
            FieldDefault::Value(v) => Some(v),
        }
    }
}

/// Read-only metadata attached to a field declaration.
///
/// The map is populated at declaration time and never mutated afterwards;
/// the record machinery stores it but never interprets it. Keys are free
/// form (`"UK"`, `"DF"`, ...) and belong to whatever external tooling
/// consults them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: HashMap<String, Value>,
}

impl Metadata {
    /// Builds metadata from key/value pairs.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        }
    }

    /// Looks up a metadata value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One declared field of a record schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    name: String,
    data_type: DataType,
    element_type: Option<DataType>,
    default: FieldDefault,
    metadata: Metadata,
}

impl FieldDef {
    /// Declares a field with the given name and advisory type tag.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            element_type: None,
            default: FieldDefault::Missing,
            metadata: Metadata::default(),
        }
    }

    /// Declares a list field with an advisory element tag.
    ///
    /// The element tag is documentation only; list values are stored as
    /// given, elements unchecked.
    pub fn list(name: impl Into<String>, element_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::List,
            element_type: Some(element_type),
            default: FieldDefault::Missing,
            metadata: Metadata::default(),
        }
    }

    /// Configures a default; the field becomes optional at construction.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = FieldDefault::Value(default);
        self
    }

    /// Attaches metadata entries. Metadata is read-only from here on.
    pub fn with_metadata<K, I>(mut self, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        self.metadata = Metadata::from_entries(entries);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Advisory element tag for list fields.
    pub fn element_type(&self) -> Option<DataType> {
        self.element_type
    }

    pub fn default(&self) -> &FieldDefault {
        &self.default
    }

    /// Returns true if the field must receive a value at construction.
    pub fn is_required(&self) -> bool {
        self.default.is_missing()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
