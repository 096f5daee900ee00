//! Strict quote checking over raw CSV bytes
//!
//! The `csv` tokenizer always accepts malformed quoting. When lax quoting is
//! disabled the raw input is scanned first, using the same delimiter, comment
//! and trimming settings, and the first quoting fault is reported with its
//! position.

use std::fmt;

use crate::config::ReaderConfig;
use crate::constants::{CARRIAGE_RETURN, LEADING_SPACE, LINE_FEED, QUOTE};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Kind of quoting fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteFault {
    /// A quote inside a field that did not start with one
    BareQuote,
    /// A closing quote followed by something other than a delimiter or line end
    ExtraneousQuote,
    /// A quoted field still open at end of input
    UnterminatedQuote,
}

/// Position and kind of the first quoting fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteViolation {
    /// 1-based line
    pub line: u64,
    /// 1-based byte column within the line
    pub column: usize,
    pub fault: QuoteFault,
}

impl fmt::Display for QuoteViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.fault {
            QuoteFault::BareQuote => "bare \" in non-quoted field",
            QuoteFault::ExtraneousQuote => "extraneous \" in quoted field",
            QuoteFault::UnterminatedQuote => "missing closing \" in quoted field",
        };
        write!(f, "line {}, column {}: {}", self.line, self.column, reason)
    }
}

/// Byte cursor tracking line and column
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    line: u64,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        let pos = if data.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };
        Self {
            data,
            pos,
            line: 1,
            line_start: pos,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    #[inline]
    fn peek_next(&self) -> Option<u8> {
        self.data.get(self.pos + 1).copied()
    }

    #[inline]
    fn column(&self) -> usize {
        self.pos - self.line_start + 1
    }

    fn is_terminator(b: u8) -> bool {
        b == LINE_FEED || b == CARRIAGE_RETURN
    }

    /// Consume `\n`, `\r` or `\r\n` at the cursor and start a new line
    fn consume_terminator(&mut self) {
        if self.peek() == Some(CARRIAGE_RETURN) {
            self.pos += 1;
        }
        if self.peek() == Some(LINE_FEED) {
            self.pos += 1;
        }
        self.line += 1;
        self.line_start = self.pos;
    }

    fn skip_line(&mut self) {
        while let Some(b) = self.peek() {
            if Self::is_terminator(b) {
                self.consume_terminator();
                return;
            }
            self.pos += 1;
        }
    }

    fn violation(&self, column: usize, fault: QuoteFault) -> QuoteViolation {
        QuoteViolation {
            line: self.line,
            column,
            fault,
        }
    }
}

/// Outcome of scanning one field
enum FieldEnd {
    Delimiter,
    RecordEnd,
    Eof,
}

/// Scan `data` for quoting faults under the given configuration
pub fn validate_quotes(
    data: &[u8],
    config: &ReaderConfig,
) -> std::result::Result<(), QuoteViolation> {
    let delimiter = config.delimiter_byte();
    let comment = config.comment_byte();
    let mut cursor = Cursor::new(data);

    while let Some(b) = cursor.peek() {
        // Empty lines and comment lines only count at the start of a record
        if Cursor::is_terminator(b) {
            cursor.consume_terminator();
            continue;
        }
        if comment == Some(b) {
            cursor.skip_line();
            continue;
        }

        loop {
            match scan_field(&mut cursor, delimiter, config.trim_leading_space)? {
                FieldEnd::Delimiter => continue,
                FieldEnd::RecordEnd | FieldEnd::Eof => break,
            }
        }
    }

    Ok(())
}

fn scan_field(
    cursor: &mut Cursor<'_>,
    delimiter: u8,
    trim_leading_space: bool,
) -> std::result::Result<FieldEnd, QuoteViolation> {
    if trim_leading_space {
        while cursor.peek().is_some_and(|b| LEADING_SPACE.contains(&b)) {
            cursor.pos += 1;
        }
    }

    if cursor.peek() == Some(QUOTE) {
        scan_quoted_field(cursor, delimiter)
    } else {
        scan_unquoted_field(cursor, delimiter)
    }
}

fn scan_unquoted_field(
    cursor: &mut Cursor<'_>,
    delimiter: u8,
) -> std::result::Result<FieldEnd, QuoteViolation> {
    while let Some(b) = cursor.peek() {
        if b == delimiter {
            cursor.pos += 1;
            return Ok(FieldEnd::Delimiter);
        }
        if Cursor::is_terminator(b) {
            cursor.consume_terminator();
            return Ok(FieldEnd::RecordEnd);
        }
        if b == QUOTE {
            return Err(cursor.violation(cursor.column(), QuoteFault::BareQuote));
        }
        cursor.pos += 1;
    }
    Ok(FieldEnd::Eof)
}

fn scan_quoted_field(
    cursor: &mut Cursor<'_>,
    delimiter: u8,
) -> std::result::Result<FieldEnd, QuoteViolation> {
    let open_line = cursor.line;
    let open_column = cursor.column();
    cursor.pos += 1;

    loop {
        match cursor.peek() {
            None => {
                return Err(QuoteViolation {
                    line: open_line,
                    column: open_column,
                    fault: QuoteFault::UnterminatedQuote,
                });
            }
            Some(QUOTE) if cursor.peek_next() == Some(QUOTE) => cursor.pos += 2,
            Some(QUOTE) => {
                cursor.pos += 1;
                break;
            }
            Some(b) if Cursor::is_terminator(b) => cursor.consume_terminator(),
            Some(_) => cursor.pos += 1,
        }
    }

    match cursor.peek() {
        None => Ok(FieldEnd::Eof),
        Some(b) if b == delimiter => {
            cursor.pos += 1;
            Ok(FieldEnd::Delimiter)
        }
        Some(b) if Cursor::is_terminator(b) => {
            cursor.consume_terminator();
            Ok(FieldEnd::RecordEnd)
        }
        // Report the closing quote itself
        Some(_) => Err(cursor.violation(cursor.column() - 1, QuoteFault::ExtraneousQuote)),
    }
}
