//! # tuxmate-core - Catalog and Install Generation
//!
//! Foundation crate for tuxmate. Provides the app catalog, the availability
//! resolver, the selection store, the AUR helper policy and the install
//! command/script generator.
//!
//! This crate has **zero internal dependencies** and no terminal code. Every
//! operation outside of loading data is total: unknown ids and empty
//! selections yield empty results, never errors.
//!
//! ## Public API
//!
//! ### Catalog (`catalog`, `types`)
//! - [`Catalog`] - Validated distros, categories and apps; availability lookups
//! - [`Distro`], [`DistroId`], [`PackageManagerFamily`] - Distribution registry
//! - [`App`], [`Category`], [`InstallSpec`], [`InstallMechanism`] - Per-app install metadata
//!
//! ### Selection (`selection`)
//! - [`Selection`] - Set of selected app ids (`toggle`, `clear`, `has`, `count`)
//!
//! ### AUR helpers (`helper`)
//! - [`AurHelper`] - `yay` or `paru`
//! - [`HelperPolicy`] - Whether a helper is installed and which one to use
//!
//! ### Generation (`generator`)
//! - [`generate()`] - Copy command + script for a selection on a distro
//! - [`Generation`] - Generated output plus AUR flags for the UI
//! - [`JoinPolicy`], [`JoinPolicies`] - Strict (`&&`) or continue-on-failure (`;`) chaining
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tuxmate_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod generator;
pub mod helper;
pub mod logging;
pub mod selection;
pub mod types;

/// Prelude for common imports used throughout all tuxmate crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::Catalog;
pub use error::{Error, Result, ResultExt};
pub use generator::{
    generate, partition, script_filename, FamilyConvention, Generation, JoinPolicies, JoinPolicy,
    Partition, PlannedApp,
};
pub use helper::{AurHelper, HelperPolicy};
pub use selection::Selection;
pub use types::{App, Category, Distro, DistroId, InstallMechanism, InstallSpec, PackageManagerFamily};
