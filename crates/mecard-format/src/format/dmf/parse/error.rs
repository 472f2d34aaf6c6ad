//! DMF parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for DMF parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during DMF parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("offset {offset}: {kind}: {message}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, offset: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            message: message.into(),
        }
    }

    /// Creates an empty input error.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ParseErrorKind::EmptyInput, 0, "no content")
    }

    /// Creates an unexpected content error.
    #[must_use]
    pub fn unexpected(offset: usize, found: u8) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedContent,
            offset,
            format!("expected ';' or end of input, found {:?}", char::from(found)),
        )
    }

    /// Creates a wrong schema error.
    #[must_use]
    pub fn wrong_schema(expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::WrongSchema,
            0,
            format!("expected identifier {expected}, found {found}"),
        )
    }

    /// Returns whether the input violated the grammar, as opposed to being a
    /// valid record of another schema.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is empty or whitespace only.
    EmptyInput,
    /// No `:` after the identifier, or nothing before it.
    MissingIdentifier,
    /// Identifier contains bytes outside `ALPHA / DIGIT / "-"`.
    InvalidIdentifier,
    /// Something other than `;` or end of input follows the properties.
    UnexpectedContent,
    /// Input exceeds the configured size limit.
    InputTooLarge,
    /// Well-formed record whose identifier is not the requested schema.
    WrongSchema,
}

impl ParseErrorKind {
    /// Returns whether this kind is a grammar violation.
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        !matches!(self, Self::WrongSchema)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::MissingIdentifier => write!(f, "missing identifier"),
            Self::InvalidIdentifier => write!(f, "invalid identifier"),
            Self::UnexpectedContent => write!(f, "unexpected content"),
            Self::InputTooLarge => write!(f, "input too large"),
            Self::WrongSchema => write!(f, "wrong schema"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offset_and_kind() {
        let err = ParseError::unexpected(7, b'a');
        assert_eq!(
            err.to_string(),
            "offset 7: unexpected content: expected ';' or end of input, found 'a'"
        );
    }

    #[test]
    fn wrong_schema_is_not_malformed() {
        assert!(!ParseError::wrong_schema("MECARD", "foo").is_malformed());
        assert!(ParseError::empty().is_malformed());
    }
}
