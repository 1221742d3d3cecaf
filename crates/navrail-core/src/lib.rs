//! # navrail-core - Core Domain Types
//!
//! Foundation crate for Navrail. Provides the navigation data model,
//! active-entry resolution, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (thiserror, tracing, toml, dirs).
//!
//! ## Public API
//!
//! ### Navigation Model (`nav`)
//! - [`NavTree`] - Ordered item sequence with stable entry identities
//! - [`NavEntry`], [`NavCategory`], [`NavItem`] - Static entry descriptors
//! - [`EntryId`] - Stable entry identity in flatten order
//! - [`BadgeAnchor`], [`badge_label()`] - Notification badge rules
//! - [`Profile`] - Footer profile block data
//!
//! ### Active Resolution (`route`)
//! - [`is_active()`] - Exact-for-root / prefix-for-others matching policy
//! - [`resolve_active()`] - Longest-prefix winner among a route table
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
//! use navrail_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod nav;
pub mod route;

/// Prelude for common imports used throughout all Navrail crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use nav::{
    badge_label, BadgeAnchor, EntryId, NavCategory, NavEntry, NavItem, NavTree, Profile,
    BADGE_OVERFLOW,
};
pub use route::{is_active, resolve_active};
