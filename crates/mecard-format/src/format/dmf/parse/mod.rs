//! DMF parsing.
//!
//! ## Usage
//!
//! ```rust
//! use mecard_format::format::dmf::parse::parse_record;
//!
//! let record = parse_record("id:name:value0,value1;;").unwrap();
//! assert_eq!(record.identifier(), "id");
//! assert_eq!(record.properties()[0].values(), ["value0", "value1"]);
//! ```
//!
//! ## Layers
//!
//! - [`cursor`] - bounds-checked scanning window
//! - [`charset`] - per-character encoding detection
//! - `value` - escape handling inside a property value
//! - `parser` - the record grammar

pub mod charset;
pub mod cursor;
mod error;
mod parser;
mod value;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::{
    ParseOptions, parse_record, parse_record_with, try_parse_record, try_parse_record_with,
};
pub use value::scan_value;
