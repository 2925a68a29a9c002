//! # Limit Constants
//!
//! All numeric limits used by schema definition.

/// Maximum number of fields a single schema may declare.
///
/// Schemas beyond this size stop being a value type and start being a
/// table; `RecordSchema::new` rejects them at definition time.
pub const MAX_FIELDS: usize = 1024;
