//! MECARD serialization.

use mecard_core::constants::MECARD_ID;

use crate::error::FormatResult;
use crate::format::dmf::build::serialize;
use crate::format::dmf::core::{DmfProperty, DmfRecord};
use crate::format::mecard::core::MeCard;

impl MeCard {
    /// Converts the card back to a DMF record: one property per present
    /// field, in schema order.
    #[must_use]
    pub fn to_record(&self) -> DmfRecord {
        self.fields().fold(DmfRecord::new(MECARD_ID), |record, (field, values)| {
            record.with_property(DmfProperty::new(field.name(), values.iter().cloned()))
        })
    }
}

/// Serializes a card to MECARD text.
///
/// ## Errors
/// Returns an error if a value holds a control byte that cannot be written.
pub fn serialize_card(card: &MeCard) -> FormatResult<Vec<u8>> {
    serialize(&card.to_record())
}
