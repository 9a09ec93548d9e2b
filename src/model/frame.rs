//! Tabular dataset structures.

use super::Value;
use crate::error::{Error, Result};

/// Inferred storage type of a column.
///
/// The type decides how the renderer formats the column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    /// Whole numbers, nothing missing
    Int,
    /// Numbers with a fraction or a gap, or nothing at all
    Float,
    /// Booleans, nothing missing
    Bool,
    /// Dates, gaps allowed
    DateTime,
    /// Elapsed times, gaps allowed
    Duration,
    /// Anything else
    Object,
}

impl DType {
    /// Check if this column renders as a number.
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int | DType::Float | DType::Bool)
    }
}

/// A labelled column of cell values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Column label from the header row
    pub label: String,

    /// Cell values, one per row
    pub values: Vec<Value>,
}

impl Column {
    /// Create a new column.
    pub fn new(label: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// Get the number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Infer the column type from its values.
    pub fn dtype(&self) -> DType {
        let present: Vec<&Value> = self.values.iter().filter(|v| !v.is_empty()).collect();
        let has_gaps = present.len() < self.values.len();

        if present.is_empty() {
            return DType::Float;
        }
        if present.iter().all(|v| v.is_numeric()) {
            let all_int = present.iter().all(|v| matches!(v, Value::Int(_)));
            return if all_int && !has_gaps {
                DType::Int
            } else {
                DType::Float
            };
        }
        if present.iter().all(|v| matches!(v, Value::Bool(_))) {
            return if has_gaps { DType::Object } else { DType::Bool };
        }
        if present.iter().all(|v| matches!(v, Value::DateTime(_))) {
            return DType::DateTime;
        }
        if present.iter().all(|v| matches!(v, Value::Duration(_))) {
            return DType::Duration;
        }
        DType::Object
    }
}

/// A table of equally long columns with an implicit `0..n` row index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    /// Create a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column to the right edge of the frame.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(Error::Render(format!(
                "column '{}' has {} values, expected {}",
                column.label,
                column.len(),
                self.rows
            )));
        }
        self.rows = column.len();
        self.columns.push(column);
        Ok(())
    }

    /// Get all columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by label.
    pub fn column(&self, label: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.label == label)
    }

    /// Get the column labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get the values of one row, left to right.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.rows {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }
}
