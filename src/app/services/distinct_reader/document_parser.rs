//! Parsing of raw CSV bytes into a [`Document`]
//!
//! Tokenizing is delegated to the `csv` crate. This module applies the
//! reader configuration around it: strict quote checking, leading space
//! trimming, trailing delimiter tolerance and field-count enforcement.

use std::borrow::Cow;

use csv::StringRecord;
use tracing::debug;

use super::quote_validator::validate_quotes;
use crate::app::models::{Document, Row};
use crate::config::ReaderConfig;
use crate::constants::{CARRIAGE_RETURN, LEADING_SPACE, LINE_FEED, QUOTE};
use crate::{Error, Result};

/// Parse the whole input into a document
///
/// `file` is only used for error context.
pub fn parse_document(data: &[u8], config: &ReaderConfig, file: &str) -> Result<Document> {
    config.validate()?;

    if !config.lazy_quotes {
        validate_quotes(data, config)
            .map_err(|violation| Error::csv_parsing(file, violation.to_string(), None))?;
    }

    let input = strip_leading_space(data, config);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter_byte())
        .comment(config.comment_byte())
        .from_reader(input.as_ref());

    let mut document = Document::new();
    let mut record = StringRecord::new();

    while reader
        .read_record(&mut record)
        .map_err(|e| Error::csv_parsing(file, "Failed to read CSV record", Some(e)))?
    {
        let line = record.position().map_or(0, |position| position.line());
        let row = record_to_row(&record, config);

        if config.enforces_field_count() && row.len() != config.fields_per_record {
            return Err(Error::csv_parsing(
                file,
                format!(
                    "record on line {}: wrong number of fields (expected {}, found {})",
                    line,
                    config.fields_per_record,
                    row.len()
                ),
                None,
            ));
        }

        document.push(row, line);
    }

    debug!("Parsed {} records from {}", document.len(), file);
    Ok(document)
}

/// Convert a tokenized record into a row, applying the trailing delimiter rule
pub fn record_to_row(record: &StringRecord, config: &ReaderConfig) -> Row {
    let mut row: Row = record.iter().map(str::to_string).collect();

    if config.trailing_delimiter && row.len() > 1 && row.last().is_some_and(|f| f.is_empty()) {
        row.pop();
    }

    row
}

/// Drop spaces and tabs at the start of every field before tokenizing
///
/// The tokenizer only recognises a quoted field when the quote is the first
/// byte of the field, so trimming has to happen on the raw input. Bytes
/// inside quoted fields and comment lines are copied untouched.
fn strip_leading_space<'a>(data: &'a [u8], config: &ReaderConfig) -> Cow<'a, [u8]> {
    if !config.trim_leading_space {
        return Cow::Borrowed(data);
    }

    let delimiter = config.delimiter_byte();
    let comment = config.comment_byte();
    let len = data.len();
    let mut out = Vec::with_capacity(len);
    let mut pos = 0;
    let mut at_record_start = true;

    while pos < len {
        if at_record_start {
            let b = data[pos];
            if b == LINE_FEED || b == CARRIAGE_RETURN {
                out.push(b);
                pos += 1;
                continue;
            }
            if comment == Some(b) {
                while pos < len && data[pos] != LINE_FEED {
                    out.push(data[pos]);
                    pos += 1;
                }
                if pos < len {
                    out.push(LINE_FEED);
                    pos += 1;
                }
                continue;
            }
            at_record_start = false;
        }

        while pos < len && LEADING_SPACE.contains(&data[pos]) {
            pos += 1;
        }

        if pos < len && data[pos] == QUOTE {
            out.push(QUOTE);
            pos += 1;
            while pos < len {
                let b = data[pos];
                out.push(b);
                pos += 1;
                if b == QUOTE {
                    if pos < len && data[pos] == QUOTE {
                        out.push(QUOTE);
                        pos += 1;
                    } else {
                        break;
                    }
                }
            }
        }

        // Unquoted field, or whatever follows a closing quote
        while pos < len {
            let b = data[pos];
            out.push(b);
            pos += 1;
            if b == delimiter {
                break;
            }
            if b == LINE_FEED || b == CARRIAGE_RETURN {
                if b == CARRIAGE_RETURN && pos < len && data[pos] == LINE_FEED {
                    out.push(LINE_FEED);
                    pos += 1;
                }
                at_record_start = true;
                break;
            }
        }
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripped(data: &[u8], config: &ReaderConfig) -> String {
        String::from_utf8(strip_leading_space(data, config).into_owned()).unwrap()
    }

    #[test]
    fn test_strip_disabled_borrows_input() {
        let config = ReaderConfig::default();
        assert!(matches!(
            strip_leading_space(b"a,  b\n", &config),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_strip_keeps_quoted_content() {
        let config = ReaderConfig::default().with_trim_leading_space();

        assert_eq!(
            stripped(b"1, \"  Smith, John\"\n \t2,\"a\"\"b\"\n", &config),
            "1,\"  Smith, John\"\n2,\"a\"\"b\"\n"
        );
    }

    #[test]
    fn test_strip_leaves_comment_lines() {
        let config = ReaderConfig::default()
            .with_trim_leading_space()
            .with_comment('#');

        assert_eq!(stripped(b"#  a,  b\r\n x, y\r\n", &config), "#  a,  b\r\nx,y\r\n");
    }
}
