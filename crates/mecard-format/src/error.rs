use thiserror::Error;

use crate::format::dmf::parse::ParseError;

/// Format parsing and encoding errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    CoreError(#[from] mecard_core::error::CoreError),
}

pub type FormatResult<T> = std::result::Result<T, FormatError>;
