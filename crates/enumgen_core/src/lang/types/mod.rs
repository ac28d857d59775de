//! Field type vocabulary.
//!
//! This module defines the registry of primitive type tokens recognised in a type comment (and the zero-valued
//! samples each one maps to).
//!
//! ## See also
//! - [`crate::convert`] for how a sample selects the parse strategy for a literal

pub mod primitives;

pub use primitives::{PRIMITIVE_TYPES, PrimitiveKind, PrimitiveTypeInfo, as_str, from_str, info_for};
