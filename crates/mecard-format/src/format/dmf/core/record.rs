//! DMF record.

use serde::Serialize;

use super::property::DmfProperty;

/// A parsed DMF record: an identifier followed by its properties.
///
/// Properties keep their input order and are not merged by name; the same
/// name may occur any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmfRecord {
    identifier: String,
    properties: Vec<DmfProperty>,
}

impl DmfRecord {
    /// Creates a record with no properties.
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            properties: Vec::new(),
        }
    }

    pub(crate) fn from_parts(identifier: String, properties: Vec<DmfProperty>) -> Self {
        Self {
            identifier,
            properties,
        }
    }

    /// Appends a property, returning the record.
    #[must_use]
    pub fn with_property(mut self, property: DmfProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// Appends a property.
    pub fn push_property(&mut self, property: DmfProperty) {
        self.properties.push(property);
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns whether the identifier is exactly `identifier`.
    #[must_use]
    pub fn is(&self, identifier: &str) -> bool {
        self.identifier == identifier
    }

    #[must_use]
    pub fn properties(&self) -> &[DmfProperty] {
        &self.properties
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&DmfProperty> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Returns every property with the given name, in record order.
    pub fn properties_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a DmfProperty> + 'a {
        self.properties.iter().filter(move |p| p.name() == name)
    }
}
