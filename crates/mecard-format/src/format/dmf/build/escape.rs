//! Value escaping.

use mecard_core::constants::{ESCAPE, RESERVED};

use crate::format::dmf::parse::charset::is_printable_ascii;

/// Escapes the reserved bytes `\ , ; :` with a backslash.
#[must_use]
pub fn escape_value(value: &[u8]) -> Vec<u8> {
    let extra = value.iter().filter(|c| RESERVED.contains(c)).count();
    let mut result = Vec::with_capacity(value.len() + extra);

    for &c in value {
        if RESERVED.contains(&c) {
            result.push(ESCAPE);
        }
        result.push(c);
    }

    result
}

/// Returns the first byte that no escape sequence can carry, if any.
///
/// Control bytes other than CR and LF end a value when it is read back.
pub(crate) fn find_unencodable(value: &[u8]) -> Option<(usize, u8)> {
    value
        .iter()
        .copied()
        .enumerate()
        .find(|&(_, c)| c < 0x80 && !is_printable_ascii(c) && !RESERVED.contains(&c))
}
