//! Core data models for distinct reading
//!
//! Parsed rows and documents, the column reference used to pick the
//! identifying column, and the groups delivered to callers.

use std::fmt;

/// One parsed record: an ordered sequence of string fields
pub type Row = Vec<String>;

/// All rows of a parsed file, header included at index 0 when present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
    lines: Vec<u64>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row read from the given 1-based source line
    pub fn push(&mut self, row: Row, line: u64) {
        self.rows.push(row);
        self.lines.push(line);
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in document order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Source line on which the row at `index` starts
    pub fn line_of(&self, index: usize) -> Option<u64> {
        self.lines.get(index).copied()
    }

    /// First row, if any
    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Consume the document, yielding `(line, row)` pairs in order
    pub fn into_rows_with_lines(self) -> impl Iterator<Item = (u64, Row)> {
        self.lines.into_iter().zip(self.rows)
    }
}

/// Reference to the identifying column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnRef {
    /// Zero-based column position
    ByIndex(usize),
    /// Header field name (requires header mode)
    ByName(String),
}

impl From<usize> for ColumnRef {
    fn from(index: usize) -> Self {
        ColumnRef::ByIndex(index)
    }
}

impl From<&str> for ColumnRef {
    fn from(name: &str) -> Self {
        ColumnRef::ByName(name.to_string())
    }
}

impl From<String> for ColumnRef {
    fn from(name: String) -> Self {
        ColumnRef::ByName(name)
    }
}

impl From<&String> for ColumnRef {
    fn from(name: &String) -> Self {
        ColumnRef::ByName(name.clone())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnRef::ByIndex(index) => write!(f, "#{}", index),
            ColumnRef::ByName(name) => write!(f, "'{}'", name),
        }
    }
}

/// Rows sharing one value in the identifying column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Value found in the identifying column
    pub key: String,

    /// Member rows in document order
    pub rows: Vec<Row>,
}

impl Group {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
