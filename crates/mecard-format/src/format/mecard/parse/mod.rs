//! MECARD parsing.
//!
//! A MECARD is a DMF record with the identifier `MECARD`. Properties outside
//! the schema are ignored.

use mecard_core::constants::{MECARD_ID, MECARD_PREFIX};

use crate::format::dmf::core::{DmfRecord, DmfValue};
use crate::format::dmf::parse::cursor::Cursor;
use crate::format::dmf::parse::{
    ParseError, ParseErrorKind, ParseOptions, ParseResult, try_parse_record_with,
};
use crate::format::mecard::core::{MeCard, MeCardField};

impl MeCard {
    /// Projects a DMF record onto the MECARD fields.
    ///
    /// A field collects the values of every non-blank property with its name,
    /// in record order. Blank properties (no value section, or only empty
    /// values) contribute nothing, so a field that only ever occurs blank is
    /// absent.
    ///
    /// ## Errors
    /// Returns [`ParseErrorKind::WrongSchema`]
    /// if the identifier is not exactly `MECARD`.
    pub fn from_record(record: DmfRecord) -> ParseResult<Self> {
        if !record.is(MECARD_ID) {
            return Err(ParseError::wrong_schema(MECARD_ID, record.identifier()));
        }

        let mut card = Self::default();
        for field in MeCardField::ALL {
            card.set(field, collect_field(&record, field));
        }
        card.set_record(record);

        Ok(card)
    }
}

/// Combines the values of all non-blank occasions of `field`.
fn collect_field(record: &DmfRecord, field: MeCardField) -> Option<Vec<DmfValue>> {
    let mut occasions = 0;
    let mut values: Option<Vec<DmfValue>> = None;

    for property in record
        .properties_named(field.name())
        .filter(|p| !p.is_blank())
    {
        occasions += 1;
        values
            .get_or_insert_with(Vec::new)
            .extend_from_slice(property.values());
    }

    if occasions > 1 {
        tracing::trace!(%field, occasions, "Combined repeated field");
    }

    values
}

/// Parses a MECARD, discarding the reason on failure.
#[must_use]
pub fn parse_card(input: impl AsRef<[u8]>) -> Option<MeCard> {
    try_parse_card(input).ok()
}

/// Parses a MECARD under the given limits, discarding the reason on failure.
#[must_use]
pub fn parse_card_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> Option<MeCard> {
    try_parse_card_with(input, options).ok()
}

/// Parses a MECARD.
///
/// ## Errors
/// Returns an error if the input is not a well-formed DMF record, or is one
/// with another identifier.
pub fn try_parse_card(input: impl AsRef<[u8]>) -> ParseResult<MeCard> {
    try_parse_card_with(input, &ParseOptions::default())
}

/// Parses a MECARD under the given limits.
///
/// ## Errors
/// Returns an error if the input is too large, is not a well-formed DMF
/// record, or is one with another identifier.
pub fn try_parse_card_with(input: impl AsRef<[u8]>, options: &ParseOptions) -> ParseResult<MeCard> {
    parse_card_data(input.as_ref(), options)
}

#[tracing::instrument(skip(data, options), fields(input_len = data.len()))]
fn parse_card_data(data: &[u8], options: &ParseOptions) -> ParseResult<MeCard> {
    options.check_len(data)?;

    // Quick check to see if it makes sense to parse the whole thing
    let mut cur = Cursor::new(data);
    if !cur.skip_spaces() {
        return Err(ParseError::empty());
    }
    if data.len() < MECARD_PREFIX.len() {
        tracing::debug!("Input shorter than the MECARD tag");
        return Err(ParseError::new(
            ParseErrorKind::MissingIdentifier,
            data.len(),
            format!("input shorter than {MECARD_PREFIX}"),
        ));
    }
    if !cur.starts_with(MECARD_ID) {
        tracing::debug!("Input does not start with the MECARD tag");
        let head = cur.remaining().iter().take(MECARD_ID.len()).copied().collect::<Vec<_>>();
        return Err(ParseError::wrong_schema(
            MECARD_ID,
            &String::from_utf8_lossy(&head),
        ));
    }

    // Offsets in record errors stay relative to the caller's input
    let record = try_parse_record_with(data, &ParseOptions::default())?;
    let card = MeCard::from_record(record)?;

    tracing::debug!(fields = card.fields().count(), "MECARD parsed");

    Ok(card)
}
