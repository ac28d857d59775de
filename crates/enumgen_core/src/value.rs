//! Typed values produced by the conversion engine.
//!
//! A [`Value`] plays two roles: as a *sample* (the zero value stored on a [`crate::FieldSpec`]) its variant selects
//! the parse strategy; as a *result* it carries the parsed payload. A successful conversion always returns the same
//! variant as the sample.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, TimeDelta};

use crate::lang::types::PrimitiveKind;

/// A value of one of the supported primitive field types.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    Bool(bool),
    String(String),
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(u64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Time(DateTime<FixedOffset>),
    Duration(#[cfg_attr(feature = "serde", serde(serialize_with = "serialize_duration"))] TimeDelta),
    Byte(u8),
    Rune(i32),
    Complex64(f32, f32),
    Complex128(f64, f64),
    Uintptr(u64),
}

impl Value {
    /// Return the primitive kind this value belongs to.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Value::Bool(_) => PrimitiveKind::Bool,
            Value::String(_) => PrimitiveKind::String,
            Value::Int(_) => PrimitiveKind::Int,
            Value::Int8(_) => PrimitiveKind::Int8,
            Value::Int16(_) => PrimitiveKind::Int16,
            Value::Int32(_) => PrimitiveKind::Int32,
            Value::Int64(_) => PrimitiveKind::Int64,
            Value::Uint(_) => PrimitiveKind::Uint,
            Value::Uint8(_) => PrimitiveKind::Uint8,
            Value::Uint16(_) => PrimitiveKind::Uint16,
            Value::Uint32(_) => PrimitiveKind::Uint32,
            Value::Uint64(_) => PrimitiveKind::Uint64,
            Value::Float32(_) => PrimitiveKind::Float32,
            Value::Float64(_) => PrimitiveKind::Float64,
            Value::Time(_) => PrimitiveKind::Time,
            Value::Duration(_) => PrimitiveKind::Duration,
            Value::Byte(_) => PrimitiveKind::Byte,
            Value::Rune(_) => PrimitiveKind::Rune,
            Value::Complex64(..) => PrimitiveKind::Complex64,
            Value::Complex128(..) => PrimitiveKind::Complex128,
            Value::Uintptr(_) => PrimitiveKind::Uintptr,
        }
    }

    /// Check whether this value is the semantic “empty” that field resolution refuses (an empty string).
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::String(s) if s.is_empty())
    }
}

/// Render in the generated language's literal syntax.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Int(v) | Value::Int64(v) => write!(f, "{v}"),
            Value::Int8(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::Int32(v) | Value::Rune(v) => write!(f, "{v}"),
            Value::Uint(v) | Value::Uint64(v) | Value::Uintptr(v) => write!(f, "{v}"),
            Value::Uint8(v) | Value::Byte(v) => write!(f, "{v}"),
            Value::Uint16(v) => write!(f, "{v}"),
            Value::Uint32(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Time(v) => write!(f, "{:?}", v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Duration(v) => f.write_str(&format_duration(*v)),
            Value::Complex64(re, im) => write!(f, "complex({re}, {im})"),
            Value::Complex128(re, im) => write!(f, "complex({re}, {im})"),
        }
    }
}

/// Format a duration as compound unit tokens, e.g. `1h30m0s`, `1.5s`, `250ms`.
///
/// The output parses back to the same duration through [`crate::convert`].
pub fn format_duration(d: TimeDelta) -> String {
    // i128 so that the magnitude of i64::MIN nanoseconds is representable.
    let total = match d.num_nanoseconds() {
        Some(n) => n as i128,
        None => i128::from(d.num_seconds()) * 1_000_000_000 + i128::from(d.subsec_nanos()),
    };
    if total == 0 {
        return "0s".to_string();
    }
    let sign = if total < 0 { "-" } else { "" };
    let nanos = total.unsigned_abs();

    if nanos < 1_000_000_000 {
        let (unit, scale) = if nanos < 1_000 {
            ("ns", 1)
        } else if nanos < 1_000_000 {
            ("µs", 1_000)
        } else {
            ("ms", 1_000_000)
        };
        return format!("{sign}{}{unit}", fraction(nanos, scale));
    }

    let hours = nanos / 3_600_000_000_000;
    let rem = nanos % 3_600_000_000_000;
    let minutes = rem / 60_000_000_000;
    let seconds = fraction(rem % 60_000_000_000, 1_000_000_000);

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{hours}h{minutes}m"));
    } else if minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&seconds);
    out.push('s');
    out
}

/// Render `value / scale` with the fractional part's trailing zeros removed.
fn fraction(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let width = scale.ilog10() as usize;
    let digits = format!("{frac:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(feature = "serde")]
fn serialize_duration<S: serde::Serializer>(d: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_zero_value_reports_its_kind() {
        for info in crate::lang::types::PRIMITIVE_TYPES {
            assert_eq!(info.id.zero_value().kind(), info.id);
        }
    }

    #[test]
    fn only_empty_strings_are_empty() {
        assert!(Value::String(String::new()).is_empty());
        assert!(!Value::String("x".into()).is_empty());
        assert!(!Value::Int(0).is_empty());
        assert!(!Value::Bool(false).is_empty());
    }

    #[test]
    fn durations_render_like_compound_tokens() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::minutes(90)), "1h30m0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1.5s");
        assert_eq!(format_duration(TimeDelta::milliseconds(250)), "250ms");
        assert_eq!(format_duration(TimeDelta::microseconds(3)), "3µs");
        assert_eq!(format_duration(TimeDelta::nanoseconds(-42)), "-42ns");
        assert_eq!(format_duration(TimeDelta::seconds(61)), "1m1s");
    }

    #[test]
    fn strings_render_quoted() {
        assert_eq!(Value::String("hi".into()).to_string(), "\"hi\"");
        assert_eq!(Value::Float64(0.5).to_string(), "0.5");
    }

    proptest::proptest! {
        #[test]
        fn formatted_durations_parse_back(nanos in proptest::prelude::any::<i64>()) {
            let d = TimeDelta::nanoseconds(nanos);
            let parsed = crate::convert::convert(&format_duration(d), &Value::Duration(TimeDelta::zero()));
            proptest::prop_assert_eq!(parsed, Ok(Value::Duration(d)));
        }
    }
}
