//! DMF record parser.
//!
//! ```text
//! DMF-DATA      = Identifier ":" *Property [";"]
//! Identifier    = 1*(ALPHA / DIGIT / "-")
//! Property      = Property-Name ":" Property-Value *("," Property-Value) ";"
//! Property-Name = 1*(ALPHA / DIGIT / "-")
//! ```
//!
//! Binary data objects are not supported.

use mecard_core::config::LimitsConfig;
use mecard_core::constants::{NAME_SEPARATOR, PROPERTY_TERMINATOR, VALUE_SEPARATOR, is_name_byte};

use super::cursor::Cursor;
use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::value::scan_value;
use crate::format::dmf::core::{DmfProperty, DmfRecord, DmfValue};

/// Limits applied by the parsers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Inputs longer than this many bytes are rejected up front.
    pub max_input_len: Option<usize>,
}

impl ParseOptions {
    #[must_use]
    pub const fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            max_input_len: Some(max_input_len),
        }
    }

    /// Rejects `input` if it exceeds the configured size.
    ///
    /// ## Errors
    /// Returns [`ParseErrorKind::InputTooLarge`] when over the limit.
    pub fn check_len(&self, input: &[u8]) -> ParseResult<()> {
        match self.max_input_len {
            Some(max) if input.len() > max => {
                tracing::debug!(input_len = input.len(), max, "Input over size limit");
                Err(ParseError::new(
                    ParseErrorKind::InputTooLarge,
                    max,
                    format!("{} bytes exceeds the limit of {max}", input.len()),
                ))
            }
            _ => Ok(()),
        }
    }
}

impl From<&LimitsConfig> for ParseOptions {
    fn from(limits: &LimitsConfig) -> Self {
        Self {
            max_input_len: limits.max_input_len,
        }
    }
}

/// Parses a DMF record, discarding the reason on failure.
///
/// Accepts anything byte-like, so both `&str` and `&[u8]` work.
#[must_use]
pub fn parse_record(input: impl AsRef<[u8]>) -> Option<DmfRecord> {
    try_parse_record(input).ok()
}

/// Parses a DMF record under the given limits, discarding the reason on failure.
#[must_use]
pub fn parse_record_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Option<DmfRecord> {
    try_parse_record_with(input, options).ok()
}

/// Parses a DMF record.
///
/// ## Errors
/// Returns an error if the input is empty or violates the grammar.
pub fn try_parse_record(input: impl AsRef<[u8]>) -> ParseResult<DmfRecord> {
    try_parse_record_with(input, &ParseOptions::default())
}

/// Parses a DMF record under the given limits.
///
/// ## Errors
/// Returns an error if the input is empty, too large, or violates the grammar.
pub fn try_parse_record_with(
    input: impl AsRef<[u8]>,
    options: &ParseOptions,
) -> ParseResult<DmfRecord> {
    parse_data(input.as_ref(), options)
}

#[tracing::instrument(skip(data, options), fields(input_len = data.len()))]
fn parse_data(data: &[u8], options: &ParseOptions) -> ParseResult<DmfRecord> {
    options.check_len(data)?;

    let result = parse_dmf(data);
    match &result {
        Ok(record) => tracing::debug!(
            identifier = record.identifier(),
            properties = record.properties().len(),
            "DMF record parsed"
        ),
        Err(e) => tracing::debug!(error = %e, "DMF record rejected"),
    }
    result
}

fn parse_dmf(data: &[u8]) -> ParseResult<DmfRecord> {
    let mut cur = Cursor::new(data);
    if !cur.skip_spaces() {
        tracing::trace!(offset = cur.position(), "Blank input");
        return Err(ParseError::empty());
    }

    let identifier = parse_identifier(&mut cur)?;

    let mut properties = Vec::new();
    let mut buf = Vec::new();
    while let Some(property) = parse_property(&mut cur, &mut buf) {
        properties.push(property);
        if !cur.eat(PROPERTY_TERMINATOR) {
            break;
        }
    }

    // The final terminator is optional, and whatever follows it is ignored
    cur.skip_spaces();
    if !cur.at_end() && cur.peek() != PROPERTY_TERMINATOR {
        tracing::trace!(offset = cur.position(), "Unexpected content after properties");
        return Err(ParseError::unexpected(cur.position(), cur.peek()));
    }

    Ok(DmfRecord::from_parts(identifier, properties))
}

/// Parses the identifier and eats the `:` after it.
fn parse_identifier(cur: &mut Cursor<'_>) -> ParseResult<String> {
    let start = *cur;
    if !cur.skip_until(NAME_SEPARATOR) {
        tracing::trace!(offset = cur.position(), "No ':' after identifier");
        return Err(ParseError::new(
            ParseErrorKind::MissingIdentifier,
            cur.position(),
            "no ':' after identifier",
        ));
    }

    let mut id = start.until(cur);
    cur.advance(1);

    if !id.strip_trailing_spaces() {
        tracing::trace!(offset = id.position(), "Empty identifier");
        return Err(ParseError::new(
            ParseErrorKind::MissingIdentifier,
            id.position(),
            "empty identifier",
        ));
    }
    if !id.all(is_name_byte) {
        tracing::trace!(offset = id.position(), "Invalid identifier");
        return Err(ParseError::new(
            ParseErrorKind::InvalidIdentifier,
            id.position(),
            format!("invalid identifier: {}", String::from_utf8_lossy(id.remaining())),
        ));
    }

    Ok(ascii_string(id.remaining()))
}

/// Parses `Property-Name ":" Property-Value *("," Property-Value)`, without
/// the terminator.
///
/// Returns `None` with the cursor restored if no property starts here.
fn parse_property(cur: &mut Cursor<'_>, buf: &mut Vec<u8>) -> Option<DmfProperty> {
    let save = *cur;

    if cur.skip_spaces() {
        let name = cur.take_while(is_name_byte);
        if !name.is_empty() && cur.eat(NAME_SEPARATOR) {
            let values = parse_values(cur, buf);
            tracing::trace!(
                name = %String::from_utf8_lossy(name),
                values = values.as_ref().map_or(0, Vec::len),
                "Parsed property"
            );
            return Some(DmfProperty::from_parts(ascii_string(name), values));
        }
    }

    *cur = save;
    None
}

/// Parses the comma-separated values after a property name.
///
/// Empty values are kept. There is no value section at all only when the
/// input ends right after the name separator.
fn parse_values(cur: &mut Cursor<'_>, buf: &mut Vec<u8>) -> Option<Vec<DmfValue>> {
    if cur.at_end() {
        return None;
    }

    let mut values = Vec::new();
    loop {
        scan_value(cur, buf);
        values.push(DmfValue::from(buf.as_slice()));
        if !cur.eat(VALUE_SEPARATOR) {
            break;
        }
    }
    Some(values)
}

/// Identifier and name bytes are ASCII by construction.
fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
