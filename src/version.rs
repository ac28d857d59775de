//! enumgen version information.
//!
//! This module exposes the tool version as a single constant so the CLI and any generated headers agree on the same
//! value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The enumgen version string (for example, `0.1.0`).
pub const ENUMGEN_VERSION: &str = env!("CARGO_PKG_VERSION");
