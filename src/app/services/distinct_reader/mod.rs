//! Distinct reader for grouping CSV rows by an identifying column
//!
//! ## Architecture
//!
//! - [`reader`] - File handling and delivery of groups
//! - [`quote_validator`] - Strict quote checking over raw bytes
//! - [`document_parser`] - CSV tokenizing and record-level options
//! - [`column_resolver`] - Column reference resolution against the header
//! - [`grouping`] - Partitioning of data rows by key
//!
//! ## Usage
//!
//! ```no_run
//! use csv_distinct::{DistinctReader, ReaderConfig};
//!
//! # fn example() -> csv_distinct::Result<()> {
//! let reader = DistinctReader::with_config(ReaderConfig::default().with_header(true));
//!
//! let groups = reader.group_file("orders.csv", "customer_id")?;
//! for group in groups {
//!     println!("{}: {} orders", group.key, group.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod column_resolver;
pub mod document_parser;
pub mod grouping;
pub mod quote_validator;
pub mod reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_resolver::{find_header_index, resolve_column};
pub use grouping::Groups;
pub use quote_validator::{QuoteFault, QuoteViolation};
pub use reader::DistinctReader;
