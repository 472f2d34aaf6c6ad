//! Direct MC Format (DMF), OMA-TS-MC 7.1.2.
//!
//! A DMF record is an identifier followed by `name:value[,value...];`
//! properties:
//!
//! ```text
//! MECARD:N:Doe,John;TEL:13035551212;;
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`DmfRecord`, `DmfProperty`, `DmfValue`)
//! - [`parse`] - Parsing functions and error types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

pub use build::{escape_value, serialize};
pub use self::core::{DmfProperty, DmfRecord, DmfValue};
pub use parse::{
    ParseError, ParseErrorKind, ParseOptions, ParseResult, parse_record, parse_record_with,
    try_parse_record, try_parse_record_with,
};
