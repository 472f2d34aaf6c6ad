//! MECARD field names.

use std::fmt;

/// The fields of the MECARD schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeCardField {
    /// Name, usually `family,given`.
    N,
    Tel,
    Email,
    /// Birthday, `YYYYMMDD`.
    Bday,
    /// Address.
    Adr,
    Note,
    Url,
    Nickname,
    /// Organization.
    Org,
}

impl MeCardField {
    /// Every field, in schema order.
    pub const ALL: [Self; 9] = [
        Self::N,
        Self::Tel,
        Self::Email,
        Self::Bday,
        Self::Adr,
        Self::Note,
        Self::Url,
        Self::Nickname,
        Self::Org,
    ];

    /// Property name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Tel => "TEL",
            Self::Email => "EMAIL",
            Self::Bday => "BDAY",
            Self::Adr => "ADR",
            Self::Note => "NOTE",
            Self::Url => "URL",
            Self::Nickname => "NICKNAME",
            Self::Org => "ORG",
        }
    }

    /// Looks up a field by property name. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for MeCardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
