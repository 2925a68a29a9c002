//! # Name-Aware Result Rows
//!
//! This module provides the result-side contract of an embedded data-store
//! driver: rows that are always addressable positionally and addressable by
//! name only for columns whose assigned label is a bare identifier.
//!
//! ## Addressing Rules
//!
//! | Access | Works when |
//! |--------|------------|
//! | `row.get(idx)` | always (within bounds) |
//! | `row.get_named(name)` | label is a bare identifier assigned to that column |
//!
//! An expression column such as `count(*)` keeps its label in the header
//! (visible via `labels()`) but never resolves by name; alias the column to
//! a bare identifier to make it addressable. Name lookup with any other key
//! fails with a no-such-column error.
//!
//! ## Module Structure
//!
//! - `header`: shared `RowHeader` with the pre-computed name map
//! - `row`: `Row` with positional, named, and typed access
//! - `cursor`: `Cursor` with `fetch_one`/`fetch_all` semantics

pub mod cursor;
pub mod header;
pub mod row;

pub use cursor::Cursor;
pub use header::{HeaderRef, RowHeader};
pub use row::Row;
