//! Character decoding for property values.
//!
//! DMF carries no encoding tag, so each character is decoded by trying the
//! allowed encodings in a fixed order and taking the first that matches:
//!
//! ```text
//! Property-Value = *(printable-ASCII-char / UTF8-char / ShiftJISChar / ISO8Bit)
//! ```
//!
//! Shift-JIS has to be tried before the ISO-8859-1 passthrough because every
//! Shift-JIS lead byte is also a valid ISO-8859-1 byte.

use encoding_rs::SHIFT_JIS;
use mecard_core::constants::MAX_CHAR_LEN;

use super::cursor::Cursor;

/// Encodings a value character may be written in, in trial order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// `%x20-2B / %x2D-39 / %x3C-5B / %x5D-7E`, plus CR and LF.
    PrintableAscii,
    /// A 2 to 6 byte UTF-8 sequence, copied through.
    Utf8,
    /// `(%x81-9F / %xE0-FC) (%x40-7E / %x80-FC)`, transcoded to UTF-8.
    ShiftJis,
    /// Any other byte `%x80-FF`, copied through.
    Iso8859_1,
}

impl Charset {
    /// Trial order.
    pub const PRIORITY: [Self; 4] = [
        Self::PrintableAscii,
        Self::Utf8,
        Self::ShiftJis,
        Self::Iso8859_1,
    ];

    /// Decodes one character from the start of `input` in this encoding.
    #[must_use]
    pub fn decode(self, input: &[u8]) -> Option<DecodedChar> {
        match self {
            Self::PrintableAscii => printable_ascii_char(input),
            Self::Utf8 => utf8_char(input),
            Self::ShiftJis => shift_jis_char(input),
            Self::Iso8859_1 => iso_8bit_char(input),
        }
    }
}

/// One decoded character: how much input it took and what it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    charset: Charset,
    consumed: usize,
    len: usize,
    bytes: [u8; MAX_CHAR_LEN],
}

impl DecodedChar {
    fn copied(charset: Charset, input: &[u8]) -> Self {
        let mut bytes = [0; MAX_CHAR_LEN];
        bytes[..input.len()].copy_from_slice(input);
        Self {
            charset,
            consumed: input.len(),
            len: input.len(),
            bytes,
        }
    }

    /// Which encoding matched.
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// Number of input bytes the character occupies.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The bytes to emit, UTF-8 except for ISO-8859-1 passthrough.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Decodes the character under the cursor and advances past it.
///
/// Returns `None`, leaving the cursor untouched, for the reserved bytes
/// (`,` `;` `:` `\`), for control bytes and at the end of input. The caller
/// decides what those mean.
pub fn decode_char(cur: &mut Cursor<'_>) -> Option<DecodedChar> {
    let input = cur.remaining();
    let decoded = Charset::PRIORITY
        .into_iter()
        .find_map(|charset| charset.decode(input))?;

    if decoded.charset() == Charset::Iso8859_1 {
        tracing::trace!(
            offset = cur.position(),
            byte = input[0],
            "Passing byte through as ISO-8859-1"
        );
    }

    cur.advance(decoded.consumed());
    Some(decoded)
}

/// Whether `c` is a printable ASCII character. CR and LF are accepted on
/// their own, not only as a CRLF pair.
#[must_use]
pub const fn is_printable_ascii(c: u8) -> bool {
    matches!(c, 0x0A | 0x0D | 0x20..=0x2B | 0x2D..=0x39 | 0x3C..=0x5B | 0x5D..=0x7E)
}

fn printable_ascii_char(input: &[u8]) -> Option<DecodedChar> {
    let (&c, _) = input.split_first()?;
    is_printable_ascii(c).then(|| DecodedChar::copied(Charset::PrintableAscii, &input[..1]))
}

/// Length of the UTF-8 sequence announced by lead byte `c`, for 2 to 6 byte
/// sequences.
const fn utf8_sequence_len(c: u8) -> Option<usize> {
    match c {
        _ if c & 0xE0 == 0xC0 => Some(2),
        _ if c & 0xF0 == 0xE0 => Some(3),
        _ if c & 0xF8 == 0xF0 => Some(4),
        _ if c & 0xFC == 0xF8 => Some(5),
        _ if c & 0xFE == 0xFC => Some(6),
        _ => None,
    }
}

fn utf8_char(input: &[u8]) -> Option<DecodedChar> {
    let (&lead, _) = input.split_first()?;
    let n = utf8_sequence_len(lead)?;
    let seq = input.get(..n)?;
    seq[1..]
        .iter()
        .all(|&c| c & 0xC0 == 0x80)
        .then(|| DecodedChar::copied(Charset::Utf8, seq))
}

const fn is_shift_jis_lead(c: u8) -> bool {
    matches!(c, 0x81..=0x9F | 0xE0..=0xFC)
}

const fn is_shift_jis_trail(c: u8) -> bool {
    matches!(c, 0x40..=0x7E | 0x80..=0xFC)
}

/// Only two-byte Shift-JIS sequences are allowed.
fn shift_jis_char(input: &[u8]) -> Option<DecodedChar> {
    let pair = input.get(..2)?;
    if !is_shift_jis_lead(pair[0]) || !is_shift_jis_trail(pair[1]) {
        return None;
    }

    let Some(text) = SHIFT_JIS.decode_without_bom_handling_and_without_replacement(pair) else {
        tracing::trace!(lead = pair[0], trail = pair[1], "Not a Shift-JIS character");
        return None;
    };

    let utf8 = text.as_bytes();
    if utf8.is_empty() || utf8.len() > MAX_CHAR_LEN {
        return None;
    }

    let mut decoded = DecodedChar::copied(Charset::ShiftJis, utf8);
    decoded.consumed = pair.len();
    Some(decoded)
}

fn iso_8bit_char(input: &[u8]) -> Option<DecodedChar> {
    let (&c, _) = input.split_first()?;
    (c >= 0x80).then(|| DecodedChar::copied(Charset::Iso8859_1, &input[..1]))
}
