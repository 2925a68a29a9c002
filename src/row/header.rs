//! # Row Headers
//!
//! A `RowHeader` holds the ordered column labels of one result set and is
//! shared by every row of that set. The name-to-index map is pre-computed
//! at construction and contains only bare-identifier labels: a column whose
//! label is an expression (`count(*)`) stays positionally addressable but
//! has no usable name access. When two columns carry the same label, the
//! first occurrence wins for name lookup.

use crate::types::is_bare_identifier;
use hashbrown::HashMap;
use std::sync::Arc;

/// Shared handle to a header. Every row of a result set holds one.
pub type HeaderRef = Arc<RowHeader>;

#[derive(Debug, PartialEq)]
pub struct RowHeader {
    labels: Vec<String>,
    by_name: HashMap<String, usize>,
}

impl RowHeader {
    /// Builds a header from column labels in result order.
    pub fn new(labels: Vec<impl Into<String>>) -> HeaderRef {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut by_name = HashMap::new();
        for (idx, label) in labels.iter().enumerate() {
            if is_bare_identifier(label) && !by_name.contains_key(label.as_str()) {
                by_name.insert(label.clone(), idx);
            }
        }
        Arc::new(Self { labels, by_name })
    }

    /// All column labels in result order, including non-addressable ones.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Resolves a name to a column index. Only bare-identifier labels
    /// resolve; anything else returns None.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Returns true if the column at `idx` can be addressed by name.
    pub fn is_addressable(&self, idx: usize) -> bool {
        self.labels
            .get(idx)
            .is_some_and(|label| self.by_name.get(label.as_str()) == Some(&idx))
    }
}
