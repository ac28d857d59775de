//! Primitive field type vocabulary.
//!
//! This registry covers every type token a field declaration may name, e.g. `Gravity[float64]` or
//! `Timeout time.Duration`.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **exact** (case-sensitive): the tokens are identifiers of the generated language,
//!   so `Int` is not `int`.
//! - `int` and `uint` are 64 bits wide.
//! - `complex64`, `complex128` and `uintptr` are recognised as field types but have no literal syntax; converting a
//!   literal into them fails with [`crate::ParseCause::UnsupportedType`].
//!
//! ## Examples
//! ```rust
//! use enumgen_core::lang::types::primitives::{self, PrimitiveKind};
//!
//! assert_eq!(primitives::from_str("uint16"), Some(PrimitiveKind::Uint16));
//! assert_eq!(primitives::from_str("Int"), None);
//! assert_eq!(primitives::info_for(PrimitiveKind::Time).namespace, Some("time"));
//! ```

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::value::Value;

/// Stable identifier for primitive field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PrimitiveKind {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Time,
    Duration,
    Byte,
    Rune,
    Complex64,
    Complex128,
    Uintptr,
}

/// Metadata for a primitive field type.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTypeInfo {
    pub id: PrimitiveKind,
    /// Spelling written in the type comment (and emitted by the writer).
    pub canonical: &'static str,
    /// Foreign namespace the generated code must import to name this type.
    pub namespace: Option<&'static str>,
    pub description: &'static str,
}

/// Registry of primitive field types.
pub const PRIMITIVE_TYPES: &[PrimitiveTypeInfo] = &[
    info(PrimitiveKind::Bool, "bool", "Boolean; literals `true`/`false`/`1`/`0` (and `t`/`f` spellings)."),
    info(PrimitiveKind::String, "string", "String; an enclosing pair of double quotes is stripped."),
    info(PrimitiveKind::Int, "int", "Signed 64-bit integer."),
    info(PrimitiveKind::Int8, "int8", "Signed 8-bit integer."),
    info(PrimitiveKind::Int16, "int16", "Signed 16-bit integer."),
    info(PrimitiveKind::Int32, "int32", "Signed 32-bit integer."),
    info(PrimitiveKind::Int64, "int64", "Signed 64-bit integer."),
    info(PrimitiveKind::Uint, "uint", "Unsigned 64-bit integer."),
    info(PrimitiveKind::Uint8, "uint8", "Unsigned 8-bit integer."),
    info(PrimitiveKind::Uint16, "uint16", "Unsigned 16-bit integer."),
    info(PrimitiveKind::Uint32, "uint32", "Unsigned 32-bit integer."),
    info(PrimitiveKind::Uint64, "uint64", "Unsigned 64-bit integer."),
    info(PrimitiveKind::Float32, "float32", "32-bit float; decimal or exponent notation."),
    info(PrimitiveKind::Float64, "float64", "64-bit float; decimal or exponent notation."),
    namespaced(PrimitiveKind::Time, "time.Time", "time", "Time instant written as an RFC 3339 timestamp."),
    namespaced(
        PrimitiveKind::Duration,
        "time.Duration",
        "time",
        "Time duration written as compound unit tokens, e.g. `1h30m`.",
    ),
    info(PrimitiveKind::Byte, "byte", "Alias of `uint8`."),
    info(PrimitiveKind::Rune, "rune", "Alias of `int32` (a Unicode code point)."),
    info(PrimitiveKind::Complex64, "complex64", "Complex number of two 32-bit floats; no literal syntax."),
    info(PrimitiveKind::Complex128, "complex128", "Complex number of two 64-bit floats; no literal syntax."),
    info(PrimitiveKind::Uintptr, "uintptr", "Pointer-sized unsigned integer; no literal syntax."),
];

/// Resolve a type token to a [`PrimitiveKind`].
///
/// ## Parameters
/// - `token`: candidate type token, already trimmed.
///
/// ## Returns
/// - `Some(PrimitiveKind)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(token: &str) -> Option<PrimitiveKind> {
    PRIMITIVE_TYPES.iter().find(|t| t.canonical == token).map(|t| t.id)
}

/// Return the canonical spelling for a primitive type.
pub fn as_str(id: PrimitiveKind) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a primitive type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveKind) -> &'static PrimitiveTypeInfo {
    PRIMITIVE_TYPES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: every PrimitiveKind has a registry entry")
}

impl PrimitiveKind {
    /// Return the zero-valued sample for this kind.
    ///
    /// The sample's variant is the contract the conversion engine dispatches on; its payload carries no meaning.
    pub fn zero_value(self) -> Value {
        match self {
            PrimitiveKind::Bool => Value::Bool(false),
            PrimitiveKind::String => Value::String(String::new()),
            PrimitiveKind::Int => Value::Int(0),
            PrimitiveKind::Int8 => Value::Int8(0),
            PrimitiveKind::Int16 => Value::Int16(0),
            PrimitiveKind::Int32 => Value::Int32(0),
            PrimitiveKind::Int64 => Value::Int64(0),
            PrimitiveKind::Uint => Value::Uint(0),
            PrimitiveKind::Uint8 => Value::Uint8(0),
            PrimitiveKind::Uint16 => Value::Uint16(0),
            PrimitiveKind::Uint32 => Value::Uint32(0),
            PrimitiveKind::Uint64 => Value::Uint64(0),
            PrimitiveKind::Float32 => Value::Float32(0.0),
            PrimitiveKind::Float64 => Value::Float64(0.0),
            PrimitiveKind::Time => Value::Time(DateTime::<Utc>::UNIX_EPOCH.fixed_offset()),
            PrimitiveKind::Duration => Value::Duration(TimeDelta::zero()),
            PrimitiveKind::Byte => Value::Byte(0),
            PrimitiveKind::Rune => Value::Rune(0),
            PrimitiveKind::Complex64 => Value::Complex64(0.0, 0.0),
            PrimitiveKind::Complex128 => Value::Complex128(0.0, 0.0),
            PrimitiveKind::Uintptr => Value::Uintptr(0),
        }
    }

    /// One-line summary of the type and its literal syntax.
    pub fn description(self) -> &'static str {
        info_for(self).description
    }

    /// Return the foreign namespace this type lives in, if any (e.g. `time` for `time.Time`).
    pub fn namespace(self) -> Option<&'static str> {
        info_for(self).namespace
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(id: PrimitiveKind, canonical: &'static str, description: &'static str) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        namespace: None,
        description,
    }
}

const fn namespaced(
    id: PrimitiveKind,
    canonical: &'static str,
    namespace: &'static str,
    description: &'static str,
) -> PrimitiveTypeInfo {
    PrimitiveTypeInfo {
        id,
        canonical,
        namespace: Some(namespace),
        description,
    }
}
