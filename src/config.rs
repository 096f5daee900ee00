//! Configuration management and validation.
//!
//! Provides the parsing options used by the distinct reader together with
//! builder helpers and validation of the reserved characters.

use crate::constants::{DEFAULT_DELIMITER, FIELDS_PER_RECORD_UNCHECKED, RESERVED_CHARS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// CSV parsing options for a [`DistinctReader`](crate::DistinctReader)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Treat the first row as column names and exclude it from grouping
    pub has_header: bool,

    /// Field separator (ASCII only)
    pub delimiter: char,

    /// Lines starting with this character are skipped
    pub comment: Option<char>,

    /// Expected number of fields per record (0 = no enforcement)
    pub fields_per_record: usize,

    /// Tolerate malformed quote sequences instead of failing
    pub lazy_quotes: bool,

    /// Tolerate a dangling delimiter at the end of a record
    pub trailing_delimiter: bool,

    /// Strip leading whitespace from every field
    pub trim_leading_space: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            has_header: false,
            delimiter: DEFAULT_DELIMITER,
            comment: None,
            fields_per_record: FIELDS_PER_RECORD_UNCHECKED,
            lazy_quotes: false,
            trailing_delimiter: false,
            trim_leading_space: false,
        }
    }
}

impl ReaderConfig {
    /// Enable or disable header mode
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the comment marker
    pub fn with_comment(mut self, comment: char) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Enforce an exact field count on every record
    pub fn with_fields_per_record(mut self, fields_per_record: usize) -> Self {
        self.fields_per_record = fields_per_record;
        self
    }

    /// Enable lenient quote handling
    pub fn with_lazy_quotes(mut self) -> Self {
        self.lazy_quotes = true;
        self
    }

    /// Tolerate a trailing delimiter at line end
    pub fn with_trailing_delimiter(mut self) -> Self {
        self.trailing_delimiter = true;
        self
    }

    /// Strip leading whitespace from fields
    pub fn with_trim_leading_space(mut self) -> Self {
        self.trim_leading_space = true;
        self
    }

    /// Whether field-count enforcement is active
    pub fn enforces_field_count(&self) -> bool {
        self.fields_per_record != FIELDS_PER_RECORD_UNCHECKED
    }

    /// Delimiter as the byte handed to the tokenizer
    ///
    /// Only meaningful after [`validate`](Self::validate) has succeeded.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    /// Comment marker as the byte handed to the tokenizer
    pub fn comment_byte(&self) -> Option<u8> {
        self.comment.map(|c| c as u8)
    }

    /// Check that delimiter and comment marker are usable
    pub fn validate(&self) -> Result<()> {
        check_marker("delimiter", self.delimiter)?;

        if let Some(comment) = self.comment {
            check_marker("comment", comment)?;
            if comment == self.delimiter {
                return Err(Error::configuration(format!(
                    "comment character {:?} must differ from the delimiter",
                    comment
                )));
            }
        }

        debug!(
            "Validated reader config: delimiter={:?}, comment={:?}, header={}",
            self.delimiter, self.comment, self.has_header
        );
        Ok(())
    }
}

fn check_marker(role: &str, c: char) -> Result<()> {
    if !c.is_ascii() {
        return Err(Error::configuration(format!(
            "{} {:?} must be an ASCII character",
            role, c
        )));
    }
    if RESERVED_CHARS.contains(&c) {
        return Err(Error::configuration(format!(
            "{} {:?} is reserved",
            role, c
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();

        assert_eq!(config.delimiter, ',');
        assert!(!config.has_header);
        assert_eq!(config.comment, None);
        assert!(!config.enforces_field_count());
        assert!(!config.lazy_quotes);
        assert!(!config.trailing_delimiter);
        assert!(!config.trim_leading_space);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_helpers() {
        let config = ReaderConfig::default()
            .with_header(true)
            .with_delimiter(';')
            .with_comment('#')
            .with_fields_per_record(3)
            .with_lazy_quotes()
            .with_trailing_delimiter()
            .with_trim_leading_space();

        assert!(config.has_header);
        assert_eq!(config.delimiter_byte(), b';');
        assert_eq!(config.comment_byte(), Some(b'#'));
        assert!(config.enforces_field_count());
        assert!(config.lazy_quotes);
        assert!(config.trailing_delimiter);
        assert!(config.trim_leading_space);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reserved_delimiter_rejected() {
        for delimiter in ['"', '\n', '\r'] {
            let config = ReaderConfig::default().with_delimiter(delimiter);
            assert!(matches!(
                config.validate(),
                Err(Error::Configuration { .. })
            ));
        }
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = ReaderConfig::default().with_delimiter('§');
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ASCII"));
    }

    #[test]
    fn test_comment_equal_to_delimiter_rejected() {
        let config = ReaderConfig::default().with_delimiter('|').with_comment('|');
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_tab_delimiter_accepted() {
        let config = ReaderConfig::default().with_delimiter('\t').with_comment('#');
        assert!(config.validate().is_ok());
    }
}
