//! # dynrec - Schema-Driven Dynamic Records
//!
//! dynrec provides a runtime-declared record facility and a column-name-aware
//! result-row representation. A record type is declared once as an ordered
//! field schema (name, advisory type tag, optional default, optional
//! metadata); instances are then constructed from positional and named
//! bindings, with required fields enforced at construction time and declared
//! types deliberately unchecked unless a caller opts in.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dynrec::record::{FieldDef, RecordBuilder, RecordSchema};
//! use dynrec::types::{DataType, Value};
//!
//! let person = RecordSchema::new(
//!     "Person",
//!     vec![
//!         FieldDef::new("id", DataType::Int),
//!         FieldDef::new("name", DataType::Text),
//!         FieldDef::new("birth", DataType::Timestamp),
//!         FieldDef::new("value", DataType::Decimal).with_default(Value::decimal(0, 1)),
//!     ],
//! )?;
//!
//! let alice = RecordBuilder::new(&person)
//!     .arg(Value::Int(1))
//!     .kwarg("name", Value::text("A"))
//!     .kwarg("birth", Value::Timestamp(0))
//!     .finish()?;
//!
//! assert_eq!(alice.get_named("id"), Some(&Value::Int(1)));
//! assert!(alice.was_defaulted_named("value"));
//! println!("{}", alice); // Person(id=1, name='A', birth=0, value=0.0)
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Record API (schema -> builder ->   │
//! │  instance)                          │
//! ├──────────────────┬──────────────────┤
//! │  RecordSchema /  │  Row / Cursor    │
//! │  FieldDef        │  (result side)   │
//! ├──────────────────┴──────────────────┤
//! │  Unified types (DataType, Value)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`types`]: advisory `DataType` tags and the owned `Value` runtime
//!   representation
//! - [`record`]: field declarations, schemas, the construction builder,
//!   instances, and their errors
//! - [`row`]: result rows addressable positionally always and by name only
//!   for bare-identifier labels, plus the `fetch_one`/`fetch_all` cursor
//! - [`config`]: compile-time limits
//!
//! ## Failure Semantics
//!
//! All failures are local and synchronous. Schema definition and record
//! construction either fully succeed or return a typed error through
//! [`eyre::Result`]; nothing is retried and no partial instance survives a
//! failed call.

pub mod config;
pub mod record;
pub mod row;
pub mod types;

pub use record::{
    ConstructError, FieldDef, FieldDefault, Metadata, Record, RecordBuilder, RecordSchema,
    SchemaError, SchemaRef,
};
pub use row::{Cursor, HeaderRef, Row, RowHeader};
pub use types::{DataType, Value};
