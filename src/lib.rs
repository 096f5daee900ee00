//! CSV Distinct Library
//!
//! Reads a delimited text file into memory and groups its data rows by the
//! value of an identifying column, handing every group to a caller-supplied
//! callback (or returning the groups for pull-based iteration).
//!
//! This library provides:
//! - Configurable CSV parsing (delimiter, comments, header row, field count
//!   enforcement, lax quoting, trailing delimiters, leading space trimming)
//! - Column resolution by position or by header name (last match wins)
//! - Exhaustive, non-overlapping partitioning of data rows by key
//!
//! ```no_run
//! use csv_distinct::{DistinctReader, ReaderConfig};
//!
//! # fn example() -> csv_distinct::Result<()> {
//! let reader = DistinctReader::with_config(ReaderConfig::default().with_header(true));
//! reader.read_csv("people.csv", "id", |rows| {
//!     println!("{} rows share id {}", rows.len(), rows[0][0]);
//! })?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod distinct_reader;
    }
}

// Re-export commonly used types
pub use app::models::{ColumnRef, Document, Group, Row};
pub use app::services::distinct_reader::{DistinctReader, Groups};
pub use config::ReaderConfig;

/// Result type alias for distinct reading
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading and grouping CSV files
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("File error for '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid delimited text under the active configuration
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// The column reference cannot be used with the active configuration
    #[error("Invalid column reference {reference}: {reason}")]
    InvalidColumnReference { reference: String, reason: String },

    /// No header field matches the requested column name
    #[error("Column not found in header: '{name}'")]
    ColumnNotFound { name: String },

    /// A data row is too short for the resolved column
    #[error("Row on line {line} has {width} fields, cannot access column {column}")]
    RowAccess {
        line: u64,
        column: usize,
        width: usize,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a file access error with the offending path
    pub fn file_access(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid column reference error
    pub fn invalid_column_reference(
        reference: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidColumnReference {
            reference: reference.into(),
            reason: reason.into(),
        }
    }

    /// Create a column not found error
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a row access error
    pub fn row_access(line: u64, column: usize, width: usize) -> Self {
        Self::RowAccess {
            line,
            column,
            width,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
