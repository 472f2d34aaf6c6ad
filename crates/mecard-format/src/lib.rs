//! Decoding and encoding of the Direct MC Format (DMF) and the MECARD
//! schema built on top of it.
//!
//! ```rust
//! use mecard_format::parse_card;
//!
//! let card = parse_card("MECARD:N:Doe,John;TEL:13035551212;;").unwrap();
//! assert_eq!(card.n().unwrap(), ["Doe", "John"]);
//! assert_eq!(card.tel().unwrap(), ["13035551212"]);
//! ```

pub mod error;
pub mod format;

pub use error::{FormatError, FormatResult};
pub use format::dmf::{
    DmfProperty, DmfRecord, DmfValue, ParseError, ParseErrorKind, ParseOptions, ParseResult,
    escape_value, parse_record, parse_record_with, serialize, try_parse_record,
    try_parse_record_with,
};
pub use format::mecard::{
    MeCard, MeCardBuilder, MeCardField, parse_card, parse_card_with, serialize_card,
    try_parse_card, try_parse_card_with,
};
