//! # Tabular Output
//!
//! Every statistics query returns a [`Table`]: an ordered header plus rows
//! aligned to it, the uniform contract consumed by any downstream reporting
//! layer. Cells are a variant type because rows mix labels, counts, years,
//! scalar aggregates, and multi-valued mode results.

use crate::stats::StatValue;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Values(Vec<u64>),
}

impl Cell {
    /// Numeric view of the cell, if it is scalar.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Integer view of the cell.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Text view of the cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Multi-valued view of the cell.
    pub fn as_values(&self) -> Option<&[u64]> {
        match self {
            Cell::Values(values) => Some(values),
            _ => None,
        }
    }
}

impl From<StatValue> for Cell {
    fn from(value: StatValue) -> Self {
        match value {
            StatValue::Scalar(scalar) => Cell::Float(scalar),
            StatValue::Values(values) => Cell::Values(values),
        }
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// Ordered column labels plus rows aligned to them.
///
/// Every row holds exactly `header.len()` cells; [`Table::push_row`] enforces
/// the invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Ordered column labels.
    pub header: Vec<String>,
    /// Rows aligned to `header`.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// # Panics
    /// Panics if the row width does not match the header.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        assert_eq!(
            row.len(),
            self.header.len(),
            "row width must match header width"
        );
        self.rows.push(row);
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Export the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
