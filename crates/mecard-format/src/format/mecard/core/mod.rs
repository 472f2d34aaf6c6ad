//! Core MECARD types.

mod card;
mod field;

pub use card::{MeCard, MeCardBuilder};
pub use field::MeCardField;
