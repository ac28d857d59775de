//! Provide the pure semantic core for drafting typed enums out of comment-embedded constant metadata.
//!
//! A source front-end hands this crate raw strings: the type-level comment that declares custom fields, each
//! member's trailing comment (aliases + positional field values), and bare identifiers. This crate turns them into
//! strongly-typed, generation-ready values that a code writer can consume.
//!
//! ## Components
//!
//! - [`convert`]: the literal conversion engine (one literal + a sample [`Value`] → typed [`Value`]).
//! - [`fields`]: field-spec extraction from the type comment and positional field-value resolution.
//! - [`aliases`]: alias list parsing.
//! - [`casing`]: plural/singular/camel inflection that preserves the input's casing template.
//! - [`imports`]: derivation of the foreign namespaces generated code needs.
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global mutable state, no logging subscriber. Lookup tables are
//!   `static`/`const` data.
//! - Every function is deterministic and safe to call concurrently.

pub mod aliases;
pub mod casing;
pub mod convert;
pub mod errors;
pub mod fields;
pub mod imports;
pub mod lang;
pub mod value;

pub use aliases::parse_alias_list;
pub use casing::{CasingForms, camel_case, pluralize, singularize};
pub use convert::convert;
pub use errors::{ConvertError, ErrorKind, FieldError, ParseCause};
pub use fields::{Delimiters, FieldSpec, FieldValue, extract_field_specs, resolve_field_values};
pub use imports::derive_imports;
pub use lang::types::PrimitiveKind;
pub use value::Value;
