//! Core DMF types.

mod property;
mod record;
mod value;

pub use property::DmfProperty;
pub use record::DmfRecord;
pub use value::DmfValue;
