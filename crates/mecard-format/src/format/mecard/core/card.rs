//! MECARD contact card.

use serde::Serialize;

use super::field::MeCardField;
use crate::format::dmf::core::{DmfRecord, DmfValue};

/// A MECARD contact.
///
/// Each field is either absent or holds at least one value. Values of a
/// field that occurs several times in the record are combined in record
/// order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MeCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tel: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bday: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    adr: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<Vec<DmfValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    org: Option<Vec<DmfValue>>,
    /// Record the card was read from.
    #[serde(skip)]
    record: Option<DmfRecord>,
}

impl MeCard {
    /// Starts building a card field by field.
    #[must_use]
    pub fn builder() -> MeCardBuilder {
        MeCardBuilder::default()
    }

    /// Returns the values of `field`, if present.
    #[must_use]
    pub fn field(&self, field: MeCardField) -> Option<&[DmfValue]> {
        self.slot(field).as_deref()
    }

    /// Returns the values of the field with property name `name`, if it is a
    /// schema field and present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DmfValue]> {
        self.field(MeCardField::from_name(name)?)
    }

    /// Iterates over the present fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (MeCardField, &[DmfValue])> + '_ {
        MeCardField::ALL
            .into_iter()
            .filter_map(|f| self.field(f).map(|values| (f, values)))
    }

    /// Returns whether no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Returns the record the card was parsed from, including properties
    /// outside the schema. Cards built with [`MeCard::builder`] have none.
    #[must_use]
    pub fn record(&self) -> Option<&DmfRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub fn n(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::N)
    }

    #[must_use]
    pub fn tel(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Tel)
    }

    #[must_use]
    pub fn email(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Email)
    }

    #[must_use]
    pub fn bday(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Bday)
    }

    #[must_use]
    pub fn adr(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Adr)
    }

    #[must_use]
    pub fn note(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Note)
    }

    #[must_use]
    pub fn url(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Url)
    }

    #[must_use]
    pub fn nickname(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Nickname)
    }

    #[must_use]
    pub fn org(&self) -> Option<&[DmfValue]> {
        self.field(MeCardField::Org)
    }

    pub(crate) fn set(&mut self, field: MeCardField, values: Option<Vec<DmfValue>>) {
        *self.slot_mut(field) = values;
    }

    pub(crate) fn set_record(&mut self, record: DmfRecord) {
        self.record = Some(record);
    }

    fn slot(&self, field: MeCardField) -> &Option<Vec<DmfValue>> {
        match field {
            MeCardField::N => &self.n,
            MeCardField::Tel => &self.tel,
            MeCardField::Email => &self.email,
            MeCardField::Bday => &self.bday,
            MeCardField::Adr => &self.adr,
            MeCardField::Note => &self.note,
            MeCardField::Url => &self.url,
            MeCardField::Nickname => &self.nickname,
            MeCardField::Org => &self.org,
        }
    }

    fn slot_mut(&mut self, field: MeCardField) -> &mut Option<Vec<DmfValue>> {
        match field {
            MeCardField::N => &mut self.n,
            MeCardField::Tel => &mut self.tel,
            MeCardField::Email => &mut self.email,
            MeCardField::Bday => &mut self.bday,
            MeCardField::Adr => &mut self.adr,
            MeCardField::Note => &mut self.note,
            MeCardField::Url => &mut self.url,
            MeCardField::Nickname => &mut self.nickname,
            MeCardField::Org => &mut self.org,
        }
    }
}

/// Cards are equal when their fields are; the source record is not compared.
impl PartialEq for MeCard {
    fn eq(&self, other: &Self) -> bool {
        MeCardField::ALL
            .into_iter()
            .all(|f| self.field(f) == other.field(f))
    }
}

impl Eq for MeCard {}

/// Builds a [`MeCard`] field by field.
#[derive(Debug, Clone, Default)]
pub struct MeCardBuilder {
    card: MeCard,
}

impl MeCardBuilder {
    /// Appends a value to `field`.
    #[must_use]
    pub fn value(mut self, field: MeCardField, value: impl Into<DmfValue>) -> Self {
        self.card
            .slot_mut(field)
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    /// Appends several values to `field`.
    #[must_use]
    pub fn values<V: Into<DmfValue>>(
        mut self,
        field: MeCardField,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.card
            .slot_mut(field)
            .get_or_insert_with(Vec::new)
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Finishes the card. Fields holding only empty values are dropped, as
    /// they would be when reading the card back.
    #[must_use]
    pub fn build(mut self) -> MeCard {
        for field in MeCardField::ALL {
            let slot = self.card.slot_mut(field);
            if slot
                .as_ref()
                .is_some_and(|values| values.iter().all(DmfValue::is_empty))
            {
                *slot = None;
            }
        }
        self.card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let card = MeCard::builder()
            .values(MeCardField::N, ["Doe", "John"])
            .value(MeCardField::Tel, "+1")
            .value(MeCardField::Tel, "+2")
            .build();

        assert_eq!(card.n().unwrap(), ["Doe", "John"]);
        assert_eq!(card.tel().unwrap(), ["+1", "+2"]);
        assert!(card.email().is_none());
        assert!(card.record().is_none());
    }

    #[test]
    fn builder_drops_blank_fields() {
        let card = MeCard::builder()
            .value(MeCardField::Email, "")
            .value(MeCardField::Note, "x")
            .build();
        assert!(card.email().is_none());
        assert_eq!(card.note().unwrap(), ["x"]);
    }

    #[test]
    fn lookup_by_name() {
        let card = MeCard::builder().value(MeCardField::Org, "ACME").build();
        assert_eq!(card.get("ORG").unwrap(), ["ACME"]);
        assert!(card.get("org").is_none());
        assert!(card.get("FOO").is_none());
    }

    #[test]
    fn fields_in_schema_order() {
        let card = MeCard::builder()
            .value(MeCardField::Url, "u")
            .value(MeCardField::N, "n")
            .build();
        let present: Vec<_> = card.fields().map(|(f, _)| f).collect();
        assert_eq!(present, vec![MeCardField::N, MeCardField::Url]);
        assert!(!card.is_empty());
        assert!(MeCard::default().is_empty());
    }

    #[test]
    fn serializes_present_fields_only() {
        let card = MeCard::builder()
            .values(MeCardField::N, ["Doe", "John"])
            .build();
        assert_eq!(
            serde_json::to_string(&card).unwrap(),
            r#"{"n":["Doe","John"]}"#
        );
    }
}
