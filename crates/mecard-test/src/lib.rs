//! MECARD workspace - integration test support.
//!
//! Re-exports the workspace crates under one path and holds the shared
//! conformance vectors used by the suites in `tests/`.

pub mod component {
    pub use mecard_core::{constants, error};

    pub mod config {
        pub use mecard_core::config::*;
        pub use mecard_core::logging::{build_filter, init};
    }

    pub mod format {
        pub use mecard_format::format::{dmf, mecard};
        pub use mecard_format::*;
    }
}

pub mod fixtures;
