//! Distinct reader orchestration
//!
//! Reads a file, parses it, resolves the identifying column and delivers the
//! resulting groups either through a callback or as a [`Groups`] collection.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_resolver::resolve_column;
use super::document_parser::parse_document;
use super::grouping::{Groups, partition};
use crate::app::models::{ColumnRef, Document, Row};
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Reader that groups CSV rows by the distinct values of one column
///
/// The reader only holds its configuration. Every call parses into its own
/// document, so a shared reader can serve concurrent calls on different files.
#[derive(Debug, Clone, Default)]
pub struct DistinctReader {
    config: ReaderConfig,
}

impl DistinctReader {
    /// Create a reader with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Mutable access for overriding options between reads
    pub fn config_mut(&mut self) -> &mut ReaderConfig {
        &mut self.config
    }

    /// Read and parse a whole file without grouping
    pub fn read_document(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        self.config.validate()?;

        debug!("Reading CSV file: {}", path.display());
        let file = path.display().to_string();
        let data = std::fs::read(path).map_err(|e| Error::file_access(file.as_str(), e))?;

        parse_document(&data, &self.config, &file)
    }

    /// Read a file and return its rows grouped by the value of `column`
    pub fn group_file(
        &self,
        path: impl AsRef<Path>,
        column: impl Into<ColumnRef>,
    ) -> Result<Groups> {
        let path = path.as_ref();
        let column = column.into();

        let document = self.read_document(path)?;
        let data_start = usize::from(self.config.has_header);
        let data_rows = document.len().saturating_sub(data_start);

        let groups = match resolve_column(&document, &column, self.config.has_header)? {
            Some(index) => partition(document, data_start, index)?,
            None => {
                warn!(
                    "No header row in {}; column {} left unresolved",
                    path.display(),
                    column
                );
                Groups::default()
            }
        };

        info!(
            "Grouped {} data rows from {} into {} distinct values of column {}",
            data_rows,
            path.display(),
            groups.len(),
            column
        );
        Ok(groups)
    }

    /// Read a file and call `on_distinct` once per distinct value of `column`
    ///
    /// Each call receives the rows sharing one value, in document order. Groups
    /// arrive in order of first appearance of their value. Nothing is
    /// delivered unless the whole file parses and every data row can be
    /// grouped.
    pub fn read_csv<F>(
        &self,
        path: impl AsRef<Path>,
        column: impl Into<ColumnRef>,
        mut on_distinct: F,
    ) -> Result<()>
    where
        F: FnMut(Vec<Row>),
    {
        let groups = self.group_file(path, column)?;

        for group in groups {
            on_distinct(group.rows);
        }

        Ok(())
    }
}
