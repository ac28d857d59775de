//! Vocabulary registries.
//!
//! This module is the “front door” for fixed vocabulary the core relies on: the field type tokens an author may
//! write in a type comment, and the irregular English nouns the inflection engine knows about.
//!
//! The design goal is to avoid stringly-typed checks scattered across the pipeline. Callers work with **stable IDs**
//! (e.g. [`types::PrimitiveKind`]) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: `const`/`static` tables, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::types::{self, PrimitiveKind};
//!
//! assert_eq!(types::from_str("float64"), Some(PrimitiveKind::Float64));
//! assert_eq!(types::as_str(PrimitiveKind::Duration), "time.Duration");
//! ```

pub mod irregulars;
pub mod types;
