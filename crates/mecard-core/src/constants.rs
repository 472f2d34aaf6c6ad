/// Identifier of the MECARD schema over DMF
pub const MECARD_ID: &str = "MECARD";
/// Tag and separator. No shorter input can hold a MECARD.
pub const MECARD_PREFIX: &str = const_str::concat!(MECARD_ID, ":");

/// Separates the identifier and property names from values
pub const NAME_SEPARATOR: u8 = b':';
/// Separates the values of a multi-valued property
pub const VALUE_SEPARATOR: u8 = b',';
/// Terminates a property, and optionally the whole record
pub const PROPERTY_TERMINATOR: u8 = b';';
/// Escapes the next reserved byte inside a value
pub const ESCAPE: u8 = b'\\';

/// Bytes that must be escaped inside a value.
pub const RESERVED: [u8; 4] = [ESCAPE, VALUE_SEPARATOR, PROPERTY_TERMINATOR, NAME_SEPARATOR];

/// Longest character, in bytes, a single decoding step may emit.
pub const MAX_CHAR_LEN: usize = 6;

/// Whether `c` may appear in an identifier or property name.
///
/// `1*(ALPHA / DIGIT / "-")`
#[must_use]
pub const fn is_name_byte(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

/// Whether `name` is a non-empty run of identifier bytes.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_tag_and_colon() {
        assert_eq!(MECARD_PREFIX, "MECARD:");
    }

    #[test]
    fn name_charset() {
        assert!(is_valid_name("name-0"));
        assert!(is_valid_name("X"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("a_b"));
        assert!(!is_valid_name("a b"));
    }

    #[test]
    fn reserved_bytes_are_not_name_bytes() {
        assert!(RESERVED.iter().all(|&c| !is_name_byte(c)));
    }
}
