//! Resolution of a [`ColumnRef`] to a concrete column index

use tracing::debug;

use crate::app::models::{ColumnRef, Document, Row};
use crate::{Error, Result};

/// Resolve the identifying column against a parsed document
///
/// Returns `Ok(None)` only when header mode is on, the document has no rows
/// at all and a name was requested: there is no header to match against and
/// no data to group.
pub fn resolve_column(
    document: &Document,
    column: &ColumnRef,
    has_header: bool,
) -> Result<Option<usize>> {
    match column {
        ColumnRef::ByIndex(index) => Ok(Some(*index)),
        ColumnRef::ByName(name) if !has_header => Err(Error::invalid_column_reference(
            column.to_string(),
            format!(
                "column name '{}' requires header mode; use a column index instead",
                name
            ),
        )),
        ColumnRef::ByName(name) => match document.first_row() {
            None => Ok(None),
            Some(header) => {
                let index = find_header_index(header, name)
                    .ok_or_else(|| Error::column_not_found(name.as_str()))?;
                debug!("Resolved column '{}' to index {}", name, index);
                Ok(Some(index))
            }
        },
    }
}

/// Position of `name` in the header row; the last match wins
pub fn find_header_index(header: &Row, name: &str) -> Option<usize> {
    header.iter().rposition(|field| field == name)
}
