//! DMF serialization.
//!
//! Writes records in the form the parser reads back unchanged:
//!
//! ```text
//! ID:NAME:value,value;NAME:value;;
//! ```

mod escape;

use mecard_core::constants::{NAME_SEPARATOR, PROPERTY_TERMINATOR, VALUE_SEPARATOR, is_valid_name};
use mecard_core::error::CoreError;

pub use escape::escape_value;

use crate::error::FormatResult;
use crate::format::dmf::core::{DmfProperty, DmfRecord};

/// Serializes a record to DMF.
///
/// A property without a value section is written as `NAME:`. When it is the
/// last property both terminators are left out, so that reading the output
/// back yields a property without a value section again. Anywhere else it
/// reads back as a single empty value.
///
/// ## Errors
/// Returns an error if the identifier or a property name is not a run of
/// `ALPHA / DIGIT / "-"`, or a value holds a control byte that cannot be
/// written.
pub fn serialize(record: &DmfRecord) -> FormatResult<Vec<u8>> {
    check_name("identifier", record.identifier())?;

    let mut out = Vec::new();
    out.extend_from_slice(record.identifier().as_bytes());
    out.push(NAME_SEPARATOR);

    let count = record.properties().len();
    for (i, property) in record.properties().iter().enumerate() {
        write_property(&mut out, property)?;
        if property.has_value_section() || i + 1 < count {
            out.push(PROPERTY_TERMINATOR);
        }
    }

    let ends_bare = record
        .properties()
        .last()
        .is_some_and(|p| !p.has_value_section());
    if !ends_bare {
        out.push(PROPERTY_TERMINATOR);
    }

    tracing::trace!(len = out.len(), "DMF record serialized");

    Ok(out)
}

fn write_property(out: &mut Vec<u8>, property: &DmfProperty) -> FormatResult<()> {
    check_name("property name", property.name())?;

    out.extend_from_slice(property.name().as_bytes());
    out.push(NAME_SEPARATOR);

    for (i, value) in property.values().iter().enumerate() {
        if let Some((offset, c)) = escape::find_unencodable(value.as_bytes()) {
            return Err(CoreError::InvalidInput(format!(
                "{}: byte {c:#04x} at offset {offset} cannot be encoded",
                property.name()
            ))
            .into());
        }
        if i > 0 {
            out.push(VALUE_SEPARATOR);
        }
        out.extend_from_slice(&escape_value(value.as_bytes()));
    }

    Ok(())
}

fn check_name(what: &str, name: &str) -> FormatResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!("invalid {what}: {name:?}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    #[test]
    fn basic_record() {
        let rec = DmfRecord::new("id")
            .with_property(DmfProperty::new("name", ["a", "b"]))
            .with_property(DmfProperty::single("url", "http://x"));
        assert_eq!(serialize(&rec).unwrap(), b"id:name:a,b;url:http\\://x;;");
    }

    #[test]
    fn empty_record() {
        assert_eq!(serialize(&DmfRecord::new("foo")).unwrap(), b"foo:;");
    }

    #[test]
    fn bare_last_property_has_no_terminator() {
        let rec = DmfRecord::new("id")
            .with_property(DmfProperty::single("a", ""))
            .with_property(DmfProperty::bare("b"));
        assert_eq!(serialize(&rec).unwrap(), b"id:a:;b:");
    }

    #[test]
    fn bare_inner_property() {
        let rec = DmfRecord::new("id")
            .with_property(DmfProperty::bare("a"))
            .with_property(DmfProperty::single("b", "1"));
        assert_eq!(serialize(&rec).unwrap(), b"id:a:;b:1;;");
    }

    #[test]
    fn invalid_names_rejected() {
        let err = serialize(&DmfRecord::new("bad id")).unwrap_err();
        assert!(matches!(err, FormatError::CoreError(CoreError::InvalidInput(_))));

        let rec = DmfRecord::new("id").with_property(DmfProperty::single("a_b", "x"));
        assert!(serialize(&rec).is_err());
    }

    #[test]
    fn control_byte_rejected() {
        let rec = DmfRecord::new("id").with_property(DmfProperty::single("a", "x\ty"));
        let err = serialize(&rec).unwrap_err();
        assert!(err.to_string().contains("0x09"));
    }
}
