//! Tests for strict quote checking

use super::super::quote_validator::{QuoteFault, validate_quotes};
use crate::config::ReaderConfig;

#[test]
fn test_well_formed_quotes_accepted() {
    let config = ReaderConfig::default();
    let data = b"id,name\n1,\"Smith, John\"\n2,\"say \"\"hi\"\"\"\n";

    assert!(validate_quotes(data, &config).is_ok());
}

#[test]
fn test_multiline_quoted_field_accepted() {
    let config = ReaderConfig::default();
    let data = b"id,note\r\n1,\"first\r\nsecond\"\r\n2,plain";

    assert!(validate_quotes(data, &config).is_ok());
}

#[test]
fn test_bare_quote_in_unquoted_field() {
    let config = ReaderConfig::default();
    let data = b"id,name\n1,Al\"ice\n";

    let violation = validate_quotes(data, &config).unwrap_err();
    assert_eq!(violation.fault, QuoteFault::BareQuote);
    assert_eq!(violation.line, 2);
    assert_eq!(violation.column, 5);
}

#[test]
fn test_unterminated_quote_reports_opening_position() {
    let config = ReaderConfig::default();
    let data = b"id,name\n1,\"Alice\n2,Bob\n";

    let violation = validate_quotes(data, &config).unwrap_err();
    assert_eq!(violation.fault, QuoteFault::UnterminatedQuote);
    assert_eq!(violation.line, 2);
    assert_eq!(violation.column, 3);
}

#[test]
fn test_extraneous_quote_after_closing_quote() {
    let config = ReaderConfig::default();
    let data = b"id,name\n1,\"Ali\"ce\n";

    let violation = validate_quotes(data, &config).unwrap_err();
    assert_eq!(violation.fault, QuoteFault::ExtraneousQuote);
    assert_eq!(violation.line, 2);
    assert_eq!(violation.column, 7);
    assert!(violation.to_string().starts_with("line 2, column 7"));
}

#[test]
fn test_comment_lines_ignored() {
    let config = ReaderConfig::default().with_comment('#');
    let data = b"# a \"quoted\" comment\nid,name\n1,Alice\n";

    assert!(validate_quotes(data, &config).is_ok());
}

#[test]
fn test_comment_lines_checked_without_comment_marker() {
    let config = ReaderConfig::default();
    let data = b"# a \"quoted\" comment\nid,name\n";

    let violation = validate_quotes(data, &config).unwrap_err();
    assert_eq!(violation.fault, QuoteFault::BareQuote);
    assert_eq!(violation.line, 1);
}

#[test]
fn test_leading_space_before_quote() {
    let data = b"id, \"Alice\"\n";

    let strict = ReaderConfig::default();
    assert_eq!(
        validate_quotes(data, &strict).unwrap_err().fault,
        QuoteFault::BareQuote
    );

    let trimming = ReaderConfig::default().with_trim_leading_space();
    assert!(validate_quotes(data, &trimming).is_ok());
}

#[test]
fn test_custom_delimiter_after_quoted_field() {
    let config = ReaderConfig::default().with_delimiter(';');
    let data = b"\"a;b\";c\n";

    assert!(validate_quotes(data, &config).is_ok());

    let comma = ReaderConfig::default();
    assert_eq!(
        validate_quotes(data, &comma).unwrap_err().fault,
        QuoteFault::ExtraneousQuote
    );
}

#[test]
fn test_empty_input_accepted() {
    assert!(validate_quotes(b"", &ReaderConfig::default()).is_ok());
    assert!(validate_quotes(b"\n\n", &ReaderConfig::default()).is_ok());
}
