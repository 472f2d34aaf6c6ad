//! Shared test vectors.

/// Example card from OMA-TS-MC-V1_0-20130611-A.
pub const OMA_EXAMPLE: &str = "MECARD:\
N:Bill Jones;\
TEL:+18586230741;\
TEL:+18586230742;\
EMAIL:foo@openmobilealliance.org;\
EMAIL:hoo@openmobilealliance.org;\
URL:http\\://www.openmobilealliance.org;;";

/// Inputs that are not DMF records at all.
pub const MALFORMED_RECORDS: &[(&str, &str)] = &[
    ("blank", " "),
    ("missing_id", "x"),
    ("empty_id", ":"),
    ("invalid_id/1", "_:"),
    ("invalid_id/2", " x_ :"),
    ("invalid_prop/1", "foo::"),
    ("invalid_prop/2", "foo: a"),
    ("invalid_prop/3", "foo: a_"),
    ("invalid_prop/4", "foo: a:\\"),
];

/// Inputs that are not MECARDs.
pub const NOT_MECARDS: &[(&str, &str)] = &[
    ("empty", "       "),
    ("garbage", "MECARDDDDDD"),
    ("invalid_id/1", "foo: ;;"),
    ("invalid_id/2", "MECARDD:"),
];

/// Shift-JIS input and the UTF-8 it decodes to.
pub const SHIFT_JIS: &[(&[u8], &str)] = &[(b"\x83\x6e", "ハ"), (b"\x83\x8d", "ロ")];

/// Shift-JIS byte pairs in range but without a mapping. The lead byte passes
/// through as ISO-8859-1 and the trail byte is read on its own.
pub const UNMAPPED_SHIFT_JIS: &[&[u8]] = &[b"\x85\x40", b"\xEB\x40"];

/// Escaped value text and what it decodes to.
pub const ESCAPES: &[(&str, &str)] = &[
    ("colon\\:", "colon:"),
    ("comma\\,", "comma,"),
    ("\\;semicolon", ";semicolon"),
    ("back\\\\slash", "back\\slash"),
    ("optional\\.", "optional."),
];

/// Invalid UTF-8 sequences that pass through as ISO-8859-1.
pub const INVALID_UTF8: &[&[u8]] = &[b"\xD1", b"\xD1\xD1", b"\xFD\x81"];

/// Wraps `value` as the single property `test` of record `id`.
#[must_use]
pub fn single_value_record(value: &[u8]) -> Vec<u8> {
    let mut input = b"id: test:".to_vec();
    input.extend_from_slice(value);
    input.extend_from_slice(b";;");
    input
}
