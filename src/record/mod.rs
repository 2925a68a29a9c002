//! # Schema-Driven Records
//!
//! This module provides the record facility: declare an ordered field
//! schema once, then construct immutable instances from positional and
//! named bindings. Required fields are enforced at construction time;
//! declared types are advisory and never checked unless a caller opts in.
//!
//! ## Module Structure
//!
//! - `field`: `FieldDef`, the `FieldDefault` sentinel, and field `Metadata`
//! - `schema`: `RecordSchema` with pre-computed name lookup
//! - `builder`: `RecordBuilder` construction call
//! - `record`: the immutable `Record` instance
//! - `error`: `SchemaError` and `ConstructError`
//!
//! ## Construction Semantics
//!
//! A construction call binds values positionally (declared order) and by
//! name, with the conventional restriction that a field bound positionally
//! cannot also be bound by name. Unbound fields fall back to their declared
//! default; unbound required fields abort the call with the complete
//! ordered list of missing names. All failures are synchronous and leave no
//! partial instance behind.

pub mod builder;
pub mod error;
pub mod field;
pub mod record;
pub mod schema;


pub use builder::{RecordBuilder, TypeCheck};
pub use error::{ConstructError, SchemaError};
pub use field::{FieldDef, FieldDefault, Metadata};
pub use record::Record;
pub use schema::{RecordSchema, SchemaRef};
