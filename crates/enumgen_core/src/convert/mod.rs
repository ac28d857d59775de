//! Literal conversion engine.
//!
//! [`convert`] turns one textual literal into a [`Value`] of the same kind as a caller-supplied sample. The sample's
//! variant selects the parse strategy through the [`PARSERS`] table, so every call site looks the same whatever
//! field type it is resolving.
//!
//! ## Literal syntax
//! - `bool`: `1 t T TRUE true True 0 f F FALSE false False`.
//! - signed integers: decimal with optional sign, range-checked per width.
//! - unsigned integers: decimal without `-`, range-checked per width.
//! - `float32`/`float64`: decimal or exponent notation; finite literals that overflow the width are rejected.
//! - `string`: verbatim, minus one enclosing pair of double quotes. `""` is a valid empty string here.
//! - `time.Time`: RFC 3339 timestamp.
//! - `time.Duration`: compound unit tokens such as `1h30m` or `-1.5s` (see [`duration`]).
//!
//! ## Examples
//! ```rust
//! use enumgen_core::{convert, ErrorKind, Value};
//!
//! assert_eq!(convert("42", &Value::Int16(0)).unwrap(), Value::Int16(42));
//! assert_eq!(convert("\"hi\"", &Value::String(String::new())).unwrap(), Value::String("hi".into()));
//! assert_eq!(convert("300", &Value::Uint8(0)).unwrap_err().kind(), ErrorKind::ParseFailure);
//! ```

pub mod duration;

use chrono::DateTime;

use crate::errors::{ConvertError, ParseCause};
use crate::lang::types::PrimitiveKind;
use crate::value::Value;

/// Parse strategy for one primitive kind.
pub type ParseFn = fn(&str) -> Result<Value, ParseCause>;

/// Parse strategies keyed by kind. Kinds without an entry have no literal syntax.
pub static PARSERS: &[(PrimitiveKind, ParseFn)] = &[
    (PrimitiveKind::Bool, parse_bool),
    (PrimitiveKind::String, parse_string),
    (PrimitiveKind::Int, |s| Ok(Value::Int(s.parse()?))),
    (PrimitiveKind::Int8, |s| Ok(Value::Int8(s.parse()?))),
    (PrimitiveKind::Int16, |s| Ok(Value::Int16(s.parse()?))),
    (PrimitiveKind::Int32, |s| Ok(Value::Int32(s.parse()?))),
    (PrimitiveKind::Int64, |s| Ok(Value::Int64(s.parse()?))),
    (PrimitiveKind::Uint, |s| Ok(Value::Uint(s.parse()?))),
    (PrimitiveKind::Uint8, |s| Ok(Value::Uint8(s.parse()?))),
    (PrimitiveKind::Uint16, |s| Ok(Value::Uint16(s.parse()?))),
    (PrimitiveKind::Uint32, |s| Ok(Value::Uint32(s.parse()?))),
    (PrimitiveKind::Uint64, |s| Ok(Value::Uint64(s.parse()?))),
    (PrimitiveKind::Float32, parse_float32),
    (PrimitiveKind::Float64, parse_float64),
    (PrimitiveKind::Time, parse_time),
    (PrimitiveKind::Duration, |s| Ok(Value::Duration(duration::parse_duration(s)?))),
    (PrimitiveKind::Byte, |s| Ok(Value::Byte(s.parse()?))),
    (PrimitiveKind::Rune, |s| Ok(Value::Rune(s.parse()?))),
];

/// Look up the parse strategy for a kind.
pub fn parser_for(kind: PrimitiveKind) -> Option<ParseFn> {
    PARSERS.iter().find(|(k, _)| *k == kind).map(|&(_, f)| f)
}

/// Convert `literal` into a value of the same kind as `sample`.
///
/// ## Parameters
/// - `literal`: the raw literal text, used as-is (callers trim).
/// - `sample`: any value of the target kind; only its variant matters.
///
/// ## Returns
/// - `Ok(Value)` of the sample's kind.
/// - `Err(ConvertError)` of kind [`crate::ErrorKind::ParseFailure`] wrapping the lower-level cause, including
///   [`ParseCause::UnsupportedType`] for kinds without literal syntax.
pub fn convert(literal: &str, sample: &Value) -> Result<Value, ConvertError> {
    let target = sample.kind();
    let parse = parser_for(target).ok_or_else(|| ConvertError::new(literal, target, ParseCause::UnsupportedType))?;
    parse(literal).map_err(|cause| ConvertError::new(literal, target, cause))
}

fn parse_bool(s: &str) -> Result<Value, ParseCause> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(Value::Bool(true)),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(Value::Bool(false)),
        _ => Err(ParseCause::InvalidBool),
    }
}

fn parse_string(s: &str) -> Result<Value, ParseCause> {
    Ok(Value::String(strip_quotes(s).to_string()))
}

/// Strip one enclosing pair of double quotes, if present.
pub fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

fn parse_float32(s: &str) -> Result<Value, ParseCause> {
    let v: f32 = s.parse()?;
    check_float_range(s, v.is_infinite())?;
    Ok(Value::Float32(v))
}

fn parse_float64(s: &str) -> Result<Value, ParseCause> {
    let v: f64 = s.parse()?;
    check_float_range(s, v.is_infinite())?;
    Ok(Value::Float64(v))
}

/// Reject finite literals that only parsed to infinity because they overflow the width.
fn check_float_range(s: &str, is_infinite: bool) -> Result<(), ParseCause> {
    let unsigned = s.trim_start_matches(['+', '-']);
    let spelled_inf = unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
    if is_infinite && !spelled_inf {
        return Err(ParseCause::FloatOutOfRange);
    }
    Ok(())
}

fn parse_time(s: &str) -> Result<Value, ParseCause> {
    Ok(Value::Time(DateTime::parse_from_rfc3339(s)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use chrono::TimeDelta;

    fn conv(literal: &str, kind: PrimitiveKind) -> Result<Value, ConvertError> {
        convert(literal, &kind.zero_value())
    }

    #[test]
    fn bool_accepts_word_and_digit_forms() {
        assert_eq!(conv("true", PrimitiveKind::Bool), Ok(Value::Bool(true)));
        assert_eq!(conv("1", PrimitiveKind::Bool), Ok(Value::Bool(true)));
        assert_eq!(conv("False", PrimitiveKind::Bool), Ok(Value::Bool(false)));
        assert_eq!(conv("0", PrimitiveKind::Bool), Ok(Value::Bool(false)));
    }

    #[test]
    fn bool_rejects_other_words() {
        let err = conv("yes", PrimitiveKind::Bool).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.cause, ParseCause::InvalidBool);
    }

    #[test]
    fn signed_integers_are_range_checked_per_width() {
        assert_eq!(conv("-128", PrimitiveKind::Int8), Ok(Value::Int8(-128)));
        assert!(conv("128", PrimitiveKind::Int8).is_err());
        assert_eq!(conv("32767", PrimitiveKind::Int16), Ok(Value::Int16(32767)));
        assert!(conv("32768", PrimitiveKind::Int16).is_err());
        assert_eq!(conv("-2147483648", PrimitiveKind::Int32), Ok(Value::Int32(i32::MIN)));
        assert_eq!(conv("9223372036854775807", PrimitiveKind::Int64), Ok(Value::Int64(i64::MAX)));
        assert!(conv("9223372036854775808", PrimitiveKind::Int).is_err());
    }

    #[test]
    fn unsigned_integers_reject_negatives_and_overflow() {
        assert_eq!(conv("255", PrimitiveKind::Uint8), Ok(Value::Uint8(255)));
        assert!(conv("-1", PrimitiveKind::Uint8).is_err());
        let err = conv("18446744073709551616", PrimitiveKind::Uint64).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert!(matches!(err.cause, ParseCause::InvalidInteger(_)));
    }

    #[test]
    fn not_a_number_fails_as_parse_failure() {
        let err = conv("not-a-number", PrimitiveKind::Int).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
        assert_eq!(err.target, PrimitiveKind::Int);
        assert_eq!(err.literal, "not-a-number");
    }

    #[test]
    fn floats_accept_exponents_and_reject_width_overflow() {
        assert_eq!(conv("3.3e23", PrimitiveKind::Float64), Ok(Value::Float64(3.3e23)));
        assert_eq!(conv("0.378", PrimitiveKind::Float32), Ok(Value::Float32(0.378)));
        assert_eq!(
            conv("1e40", PrimitiveKind::Float32).unwrap_err().cause,
            ParseCause::FloatOutOfRange
        );
        assert_eq!(conv("1e40", PrimitiveKind::Float64), Ok(Value::Float64(1e40)));
        assert_eq!(conv("-inf", PrimitiveKind::Float64), Ok(Value::Float64(f64::NEG_INFINITY)));
    }

    #[test]
    fn strings_strip_one_pair_of_quotes() {
        assert_eq!(conv("hello", PrimitiveKind::String), Ok(Value::String("hello".into())));
        assert_eq!(conv("\"In Progress\"", PrimitiveKind::String), Ok(Value::String("In Progress".into())));
        assert_eq!(conv("\"\"", PrimitiveKind::String), Ok(Value::String(String::new())));
        assert_eq!(conv("\"", PrimitiveKind::String), Ok(Value::String("\"".into())));
        assert_eq!(conv("\"a", PrimitiveKind::String), Ok(Value::String("\"a".into())));
    }

    #[test]
    fn timestamps_parse_rfc3339() {
        let v = conv("2024-03-01T12:30:00Z", PrimitiveKind::Time).unwrap();
        let Value::Time(t) = v else { panic!("expected time") };
        assert_eq!(t.timestamp(), 1_709_296_200);

        let err = conv("2024-03-01", PrimitiveKind::Time).unwrap_err();
        assert!(matches!(err.cause, ParseCause::InvalidTimestamp(_)));
    }

    #[test]
    fn durations_parse_compound_tokens() {
        assert_eq!(
            conv("1h30m", PrimitiveKind::Duration),
            Ok(Value::Duration(TimeDelta::minutes(90)))
        );
        assert!(matches!(
            conv("soon", PrimitiveKind::Duration).unwrap_err().cause,
            ParseCause::InvalidDuration(_)
        ));
    }

    #[test]
    fn byte_and_rune_parse_like_their_widths() {
        assert_eq!(conv("200", PrimitiveKind::Byte), Ok(Value::Byte(200)));
        assert!(conv("256", PrimitiveKind::Byte).is_err());
        assert_eq!(conv("-65", PrimitiveKind::Rune), Ok(Value::Rune(-65)));
    }

    #[test]
    fn kinds_without_literal_syntax_are_unsupported() {
        for kind in [PrimitiveKind::Complex64, PrimitiveKind::Complex128, PrimitiveKind::Uintptr] {
            let err = conv("1", kind).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseFailure);
            assert_eq!(err.cause, ParseCause::UnsupportedType);
        }
    }

    #[test]
    fn conversion_preserves_the_sample_kind() {
        for (kind, literal) in [
            (PrimitiveKind::Uint16, "7"),
            (PrimitiveKind::Int64, "-7"),
            (PrimitiveKind::Float32, "7.5"),
            (PrimitiveKind::Bool, "t"),
        ] {
            assert_eq!(conv(literal, kind).unwrap().kind(), kind);
        }
    }
}
