//! Test utilities for distinct reader testing
//!
//! Helpers for writing temporary CSV files and collecting delivered groups
//! in a stable order.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::Row;
use crate::config::ReaderConfig;

mod quote_validator_tests;

/// Helper to create a temporary file holding exactly `content`
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Minimal people file with a repeated id
pub fn create_people_csv() -> String {
    "id,name\n1,Alice\n2,Bob\n1,Alicia\n".to_string()
}

/// Header config used by most tests
pub fn header_config() -> ReaderConfig {
    ReaderConfig::default().with_header(true)
}

/// Sort delivered groups by the key at `column` so assertions do not depend
/// on delivery order
pub fn sorted_by_key(mut groups: Vec<Vec<Row>>, column: usize) -> Vec<Vec<Row>> {
    groups.sort_by(|a, b| a[0][column].cmp(&b[0][column]));
    groups
}

/// Build a row from string slices
pub fn row(fields: &[&str]) -> Row {
    fields.iter().map(|f| f.to_string()).collect()
}
