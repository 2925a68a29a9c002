//! # Result-Set Cursor
//!
//! A `Cursor` is an already-materialized result set: the header plus the
//! remaining rows, consumed front to back. It models the result side of an
//! embedded driver's call surface (`fetch_one` yields the next row or
//! `None`; `fetch_all` drains whatever remains). Producing the rows in the
//! first place is the driver's job, not this crate's.

use crate::row::header::HeaderRef;
use crate::row::row::Row;
use crate::types::Value;
use eyre::{ensure, Result};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug)]
pub struct Cursor {
    header: HeaderRef,
    rows: VecDeque<Row>,
}

impl Cursor {
    /// Builds a cursor over `rows`, each checked against the header arity.
    pub fn new(header: HeaderRef, rows: Vec<Vec<Value>>) -> Result<Self> {
        let column_count = header.column_count();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, values)| {
                ensure!(
                    values.len() == column_count,
                    "row {} has {} values but the header declares {} columns",
                    idx,
                    values.len(),
                    column_count
                );
                Ok(Row::new(Arc::clone(&header), values))
            })
            .collect::<Result<VecDeque<Row>>>()?;

        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &HeaderRef {
        &self.header
    }

    /// Yields the next row, or `None` once the set is exhausted.
    pub fn fetch_one(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Drains and returns all remaining rows.
    pub fn fetch_all(&mut self) -> Vec<Row> {
        self.rows.drain(..).collect()
    }

    /// Rows not yet fetched.
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

impl Iterator for Cursor {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.fetch_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::header::RowHeader;

    fn users_cursor() -> Cursor {
        let header = RowHeader::new(vec!["id", "name"]);
        Cursor::new(
            header,
            vec![
                vec![Value::Int(0), Value::text("A")],
                vec![Value::Int(1), Value::text("B")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn fetch_one_consumes_in_order() {
        let mut cursor = users_cursor();
        assert_eq!(cursor.remaining(), 2);

        let first = cursor.fetch_one().unwrap();
        assert_eq!(first.get_int(0).unwrap(), 0);

        let second = cursor.fetch_one().unwrap();
        assert_eq!(second.get_text(1).unwrap(), "B");

        assert!(cursor.fetch_one().is_none());
    }

    #[test]
    fn fetch_all_drains_the_remainder() {
        let mut cursor = users_cursor();
        cursor.fetch_one().unwrap();

        let rest = cursor.fetch_all();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].get_named("name").unwrap(), &Value::text("B"));
        assert!(cursor.fetch_all().is_empty());
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let header = RowHeader::new(vec!["id", "name"]);
        let result = Cursor::new(header, vec![vec![Value::Int(0)]]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("row 0 has 1 values but the header declares 2 columns"));
    }

    #[test]
    fn cursor_iterates() {
        let ids: Vec<i64> = users_cursor().map(|row| row.get_int(0).unwrap()).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
