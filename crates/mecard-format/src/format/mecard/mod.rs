//! MECARD, the contact schema over DMF used in QR codes.
//!
//! ## Usage
//!
//! ```rust
//! use mecard_format::format::mecard::parse_card;
//!
//! let card = parse_card("MECARD:N:Bill Jones;TEL:+1;TEL:+2;;").unwrap();
//! assert_eq!(card.n().unwrap(), ["Bill Jones"]);
//! assert_eq!(card.tel().unwrap(), ["+1", "+2"]);
//! assert!(card.email().is_none());
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`MeCard`, `MeCardField`)
//! - [`parse`] - Field mapping and parsing functions
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;
pub mod parse;

pub use self::core::{MeCard, MeCardBuilder, MeCardField};
pub use build::serialize_card;
pub use parse::{parse_card, parse_card_with, try_parse_card, try_parse_card_with};
