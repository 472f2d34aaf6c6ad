//! Record formats.
//!
//! - [`dmf`] - the generic `identifier:name:value,value;...;` grammar
//! - [`mecard`] - the MECARD contact schema over DMF

pub mod dmf;
pub mod mecard;
