//! Error types for value tree operations.
//!
//! Every failure is local and synchronous: the operation that returns an
//! error has not mutated the tree. Each variant carries the key, index or
//! kinds involved so callers can report or recover without re-inspecting
//! the tree.

use std::fmt;

use thiserror::Error;

use crate::kind::ValueKind;

/// Result alias used throughout the crate.
pub type ValueResult<T> = Result<T, ValueError>;

/// A position inside a container, used to report out-of-range access.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// Index into a list.
    Index(usize),
    /// Column/row coordinate into a grid.
    Cell { column: usize, row: usize },
    /// A single grid column.
    Column(usize),
    /// A single grid row.
    Row(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Index(i) => write!(f, "index {i}"),
            Position::Cell { column, row } => write!(f, "cell ({column}, {row})"),
            Position::Column(c) => write!(f, "column {c}"),
            Position::Row(r) => write!(f, "row {r}"),
        }
    }
}

/// Errors raised by value tree operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Downcast to a variant the value does not hold. `found` is `None`
    /// when the slot was null.
    #[error("type mismatch: expected {expected}, found {}", found_name(.found))]
    TypeMismatch {
        expected: ValueKind,
        found: Option<ValueKind>,
    },
    /// Dictionary lookup or removal of an absent key.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    /// List or grid access beyond the logical extent.
    #[error("{index} out of range for extent {extent}")]
    IndexOutOfRange { index: Position, extent: Position },
    /// Grid constructed with a logical shape larger than its capacity.
    #[error(
        "invalid grid shape: {columns}x{rows} exceeds capacity {column_max}x{row_max}"
    )]
    InvalidShape {
        columns: usize,
        rows: usize,
        column_max: usize,
        row_max: usize,
    },
}

fn found_name(found: &Option<ValueKind>) -> &'static str {
    found.map_or("null", ValueKind::name)
}

impl ValueError {
    pub fn type_mismatch(expected: ValueKind, found: Option<ValueKind>) -> Self {
        ValueError::TypeMismatch { expected, found }
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        ValueError::KeyNotFound { key: key.into() }
    }

    /// Out-of-range list index against a list of `len` elements.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        ValueError::IndexOutOfRange {
            index: Position::Index(index),
            extent: Position::Index(len),
        }
    }

    /// Out-of-range grid cell against a logical `columns x rows` shape.
    pub fn cell_out_of_range(column: usize, row: usize, columns: usize, rows: usize) -> Self {
        ValueError::IndexOutOfRange {
            index: Position::Cell { column, row },
            extent: Position::Cell {
                column: columns,
                row: rows,
            },
        }
    }
}
