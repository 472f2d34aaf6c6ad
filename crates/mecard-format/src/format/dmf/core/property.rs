//! DMF property types.

use serde::Serialize;

use super::value::DmfValue;

/// One `name:value[,value...]` clause of a record.
///
/// `values` is `None` when the property has no value section at all, which
/// only happens when the input ends right after the name separator. A value
/// section that is present but empty holds a single empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DmfProperty {
    name: String,
    values: Option<Vec<DmfValue>>,
}

impl DmfProperty {
    /// Creates a property with the given values.
    #[must_use]
    pub fn new<V: Into<DmfValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self {
            name: name.into(),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Creates a property with a single value.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl Into<DmfValue>) -> Self {
        Self {
            name: name.into(),
            values: Some(vec![value.into()]),
        }
    }

    /// Creates a property without a value section.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: None,
        }
    }

    pub(crate) fn from_parts(name: String, values: Option<Vec<DmfValue>>) -> Self {
        Self { name, values }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the values, or an empty slice if there is no value section.
    #[must_use]
    pub fn values(&self) -> &[DmfValue] {
        self.values.as_deref().unwrap_or_default()
    }

    /// Returns whether the property has a value section.
    #[must_use]
    pub fn has_value_section(&self) -> bool {
        self.values.is_some()
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&DmfValue> {
        self.values().first()
    }

    /// Returns whether the property carries no content: either no value
    /// section, or only empty values.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(DmfValue::is_empty)
    }
}
