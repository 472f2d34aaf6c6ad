//! DMF property value.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A single decoded property value.
///
/// Values are kept as bytes. Most inputs decode to UTF-8, but ISO-8859-1
/// passthrough and lenient multi-byte sequences may leave bytes that do not
/// form valid UTF-8, and those must survive re-encoding unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DmfValue(Vec<u8>);

impl DmfValue {
    /// Creates a value from raw bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the value as text if it is valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Returns the value as text, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for DmfValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl Serialize for DmfValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

impl AsRef<[u8]> for DmfValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for DmfValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for DmfValue {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<String> for DmfValue {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl From<&str> for DmfValue {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl PartialEq<[u8]> for DmfValue {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[u8]> for DmfValue {
    fn eq(&self, other: &&[u8]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for DmfValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for DmfValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_value_as_str() {
        let val = DmfValue::from("тест");
        assert_eq!(val.as_str(), Some("тест"));
        assert_eq!(val, "тест");
    }

    #[test]
    fn latin1_value_is_not_str() {
        let val = DmfValue::new(vec![0xD1, b'a']);
        assert!(val.as_str().is_none());
        assert_eq!(val.to_string_lossy(), "\u{FFFD}a");
        assert_eq!(val, &[0xD1, b'a'][..]);
    }

    #[test]
    fn serializes_as_string() {
        let val = DmfValue::from("Bill Jones");
        assert_eq!(serde_json::to_string(&val).unwrap(), "\"Bill Jones\"");
    }
}
