//! Property value scanning.
//!
//! The reserved characters `,` `;` `:` and `\` are written inside a value as
//! `\,` `\;` `\:` and `\\`. A backslash before any other character is
//! dropped.

use mecard_core::constants::{ESCAPE, NAME_SEPARATOR, PROPERTY_TERMINATOR, VALUE_SEPARATOR};

use super::charset::decode_char;
use super::cursor::Cursor;

/// Scans one property value into `buf`, replacing its contents.
///
/// Stops in front of the first unescaped `,` `;` or `:`, any other byte that
/// cannot start a character, or the end of input. The terminator is left for
/// the caller. A backslash with nothing escapable after it is left
/// unconsumed as well.
pub fn scan_value(cur: &mut Cursor<'_>, buf: &mut Vec<u8>) {
    let mut backslash = false;
    buf.clear();

    while !cur.at_end() {
        if let Some(c) = decode_char(cur) {
            backslash = false;
            buf.extend_from_slice(c.as_bytes());
            continue;
        }

        match cur.peek() {
            ESCAPE if !backslash => {
                backslash = true;
                cur.advance(1);
            }
            ESCAPE | VALUE_SEPARATOR | PROPERTY_TERMINATOR | NAME_SEPARATOR if backslash => {
                backslash = false;
                buf.push(cur.peek());
                cur.advance(1);
            }
            _ => break,
        }
    }

    if backslash {
        tracing::trace!(offset = cur.position(), "Dangling backslash");
        cur.unget();
    }
}
