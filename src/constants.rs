//! Parsing constants for the distinct reader
//!
//! Default values and reserved characters shared by configuration
//! validation, quote checking and record parsing.

// =============================================================================
// Defaults
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Field-count enforcement value meaning "no enforcement"
pub const FIELDS_PER_RECORD_UNCHECKED: usize = 0;

// =============================================================================
// Reserved Characters
// =============================================================================

/// Quote byte used for quoted fields
pub const QUOTE: u8 = b'"';

/// Carriage return, treated as a record terminator (alone or before `\n`)
pub const CARRIAGE_RETURN: u8 = b'\r';

/// Line feed record terminator
pub const LINE_FEED: u8 = b'\n';

/// Characters that can never act as a delimiter or comment marker
pub const RESERVED_CHARS: &[char] = &['"', '\r', '\n'];

/// Whitespace stripped when leading space trimming is enabled
pub const LEADING_SPACE: &[u8] = &[b' ', b'\t'];
