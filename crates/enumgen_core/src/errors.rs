//! Error taxonomy shared by the conversion engine and field resolution.
//!
//! Callers distinguish failures by [`ErrorKind`], never by matching message text. The kinds are terminal for the
//! single field/member being processed; nothing in this crate retries.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::lang::types::PrimitiveKind;

/// Closed set of failure kinds surfaced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A literal could not be converted to the requested type.
    ParseFailure,
    /// A required positional literal was blank or resolved to an empty string.
    EmptyFieldValue,
}

/// Lower-level reason a literal failed to convert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    #[error("value out of range for the float width")]
    FloatOutOfRange,

    #[error("invalid boolean")]
    InvalidBool,

    #[error("invalid RFC 3339 timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("invalid duration: {0}")]
    InvalidDuration(&'static str),

    #[error("unsupported target type")]
    UnsupportedType,
}

/// A literal failed to convert into its target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {literal:?} to {target}: {cause}")]
pub struct ConvertError {
    pub literal: String,
    pub target: PrimitiveKind,
    #[source]
    pub cause: ParseCause,
}

impl ConvertError {
    pub fn new(literal: impl Into<String>, target: PrimitiveKind, cause: impl Into<ParseCause>) -> Self {
        Self {
            literal: literal.into(),
            target,
            cause: cause.into(),
        }
    }

    /// Conversion failures are always [`ErrorKind::ParseFailure`], whatever the cause.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::ParseFailure
    }
}

/// Resolving a member's positional field values failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field {index} ({field}) has an empty value")]
    EmptyFieldValue { index: usize, field: String },

    #[error("field {index} ({field}): {source}")]
    Parse {
        index: usize,
        field: String,
        #[source]
        source: ConvertError,
    },
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::EmptyFieldValue { .. } => ErrorKind::EmptyFieldValue,
            FieldError::Parse { source, .. } => source.kind(),
        }
    }
}
