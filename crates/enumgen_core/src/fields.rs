//! Field metadata extraction.
//!
//! A type comment declares the custom fields every member carries, e.g. `Gravity[float64], Moons[int]`. Each member
//! comment then lists one literal per field, in order. This module turns the former into [`FieldSpec`]s and resolves
//! the latter into [`FieldValue`]s through the conversion engine.
//!
//! ## Notes
//! - Malformed field *declarations* are dropped (logged at `debug`), so one bad declaration does not block a whole
//!   type. Malformed member *values* are hard errors.
//! - The delimiter convention returned for a comment is the one detected on its last field.

use std::fmt;

use crate::convert::convert;
use crate::errors::FieldError;
use crate::lang::types::{self, PrimitiveKind};
use crate::value::Value;

/// How a field's name is separated from its type token (and a member's aliases from its values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Delimiters {
    /// `Name type`
    #[default]
    Space,
    /// `Name[type]`
    Brackets,
    /// `Name(type)`
    Parens,
}

impl Delimiters {
    pub fn opener(self) -> &'static str {
        match self {
            Delimiters::Space => " ",
            Delimiters::Brackets => "[",
            Delimiters::Parens => "(",
        }
    }

    pub fn closer(self) -> &'static str {
        match self {
            Delimiters::Space => " ",
            Delimiters::Brackets => "]",
            Delimiters::Parens => ")",
        }
    }

    /// Detect the convention of one field substring. Brackets beat parentheses beat spaces.
    pub fn detect(field: &str) -> Self {
        if field.contains('[') {
            Delimiters::Brackets
        } else if field.contains('(') {
            Delimiters::Parens
        } else {
            Delimiters::Space
        }
    }
}

/// Renders the declaration shape, e.g. `name[type]`.
impl fmt::Display for Delimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiters::Space => f.write_str("name type"),
            Delimiters::Brackets | Delimiters::Parens => write!(f, "name{}type{}", self.opener(), self.closer()),
        }
    }
}

/// A named (or anonymous) typed placeholder for one custom attribute.
///
/// `default_value` is a sample: its kind tells the conversion engine how to parse this field's literals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec {
    pub name: String,
    pub default_value: Value,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        Self {
            name: name.into(),
            default_value: kind.zero_value(),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.default_value.kind()
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

/// A [`FieldSpec`] resolved against one member's literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
}

/// Parse a type comment into its delimiter convention and field specs.
///
/// ## Returns
/// - `(Delimiters::Space, vec![])` for a blank comment.
/// - Otherwise the convention detected on the last comma-separated field, and one spec per well-formed field with a
///   recognised type token, in declaration order.
///
/// ## Examples
/// ```rust
/// use enumgen_core::{extract_field_specs, Delimiters, PrimitiveKind};
///
/// let (delims, specs) = extract_field_specs("Name[string], Age[int]");
/// assert_eq!(delims, Delimiters::Brackets);
/// assert_eq!(specs[1].name, "Age");
/// assert_eq!(specs[1].kind(), PrimitiveKind::Int);
/// ```
pub fn extract_field_specs(comment: &str) -> (Delimiters, Vec<FieldSpec>) {
    let comment = comment.trim();
    let mut delimiters = Delimiters::Space;
    let mut specs = Vec::new();
    if comment.is_empty() {
        return (delimiters, specs);
    }

    for field in comment.split(',') {
        let field = field.trim();
        delimiters = Delimiters::detect(field);

        let Some((name, token)) = split_field(field, delimiters) else {
            tracing::debug!(field, "dropping field with unbalanced delimiters");
            continue;
        };
        let Some(kind) = types::from_str(token) else {
            tracing::debug!(field, token, "dropping field with unrecognised type");
            continue;
        };
        specs.push(FieldSpec::new(name, kind));
    }

    (delimiters, specs)
}

/// Split one field declaration into `(name, type token)`.
fn split_field(field: &str, delimiters: Delimiters) -> Option<(&str, &str)> {
    match delimiters {
        Delimiters::Space => Some(match field.split_once(' ') {
            Some((name, token)) => (name.trim(), token.trim()),
            None => ("", field),
        }),
        Delimiters::Brackets | Delimiters::Parens => {
            let open = field.find(delimiters.opener())?;
            let close = field.find(delimiters.closer())?;
            if close < open {
                return None;
            }
            Some((field[..open].trim(), field[open + 1..close].trim()))
        }
    }
}

/// Resolve a member's comma-separated literals against the type's field specs.
///
/// ## Returns
/// - `Ok(vec![])` for a zero-length input.
/// - Otherwise one value per position up to `min(literals, specs)`; excess literals are ignored and missing ones
///   are not an error. Values for anonymous specs are resolved (and validated) but not emitted.
///
/// ## Errors
/// - [`FieldError::EmptyFieldValue`] if a literal is blank or resolves to an empty string.
/// - [`FieldError::Parse`] if a literal does not convert to its spec's type.
///
/// The first error aborts resolution; no partial list is returned.
pub fn resolve_field_values(literals: &str, specs: &[FieldSpec]) -> Result<Vec<FieldValue>, FieldError> {
    let mut values = Vec::new();
    if literals.is_empty() {
        return Ok(values);
    }

    for (index, (literal, spec)) in literals.split(',').zip(specs).enumerate() {
        let literal = literal.trim();
        let empty = || FieldError::EmptyFieldValue {
            index,
            field: spec.name.clone(),
        };
        if literal.is_empty() {
            return Err(empty());
        }

        let value = convert(literal, &spec.default_value).map_err(|source| FieldError::Parse {
            index,
            field: spec.name.clone(),
            source,
        })?;
        if value.is_empty() {
            return Err(empty());
        }

        if spec.is_named() {
            values.push(FieldValue {
                name: spec.name.clone(),
                value,
            });
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn specs(kinds: &[(&str, PrimitiveKind)]) -> Vec<FieldSpec> {
        kinds.iter().map(|&(n, k)| FieldSpec::new(n, k)).collect()
    }

    #[test]
    fn delimiters_display_their_declaration_shape() {
        assert_eq!(Delimiters::Space.to_string(), "name type");
        assert_eq!(Delimiters::Brackets.to_string(), "name[type]");
        assert_eq!(Delimiters::Parens.to_string(), "name(type)");
    }

    #[test]
    fn blank_comment_has_no_fields() {
        assert_eq!(extract_field_specs(""), (Delimiters::Space, vec![]));
        assert_eq!(extract_field_specs("   "), (Delimiters::Space, vec![]));
    }

    #[test]
    fn bracket_fields() {
        let (delims, got) = extract_field_specs("Name[string], Age[int]");
        assert_eq!(delims, Delimiters::Brackets);
        assert_eq!(delims.opener(), "[");
        assert_eq!(delims.closer(), "]");
        assert_eq!(
            got,
            specs(&[("Name", PrimitiveKind::String), ("Age", PrimitiveKind::Int)])
        );
    }

    #[test]
    fn paren_and_space_fields() {
        let (delims, got) = extract_field_specs("Gravity(float64),Moons(int)");
        assert_eq!(delims, Delimiters::Parens);
        assert_eq!(got[0].kind(), PrimitiveKind::Float64);

        let (delims, got) = extract_field_specs("Timeout time.Duration, Since time.Time");
        assert_eq!(delims, Delimiters::Space);
        assert_eq!(
            got,
            specs(&[("Timeout", PrimitiveKind::Duration), ("Since", PrimitiveKind::Time)])
        );
    }

    #[test]
    fn bare_type_token_gives_anonymous_spec() {
        let (_, got) = extract_field_specs("float64");
        assert_eq!(got, specs(&[("", PrimitiveKind::Float64)]));
        assert!(!got[0].is_named());
    }

    #[test]
    fn brackets_win_over_parens() {
        let (delims, got) = extract_field_specs("Label(x)[string]");
        assert_eq!(delims, Delimiters::Brackets);
        assert_eq!(got, specs(&[("Label(x)", PrimitiveKind::String)]));
    }

    #[test]
    fn malformed_and_unknown_fields_are_dropped() {
        let (_, got) = extract_field_specs("A[int, B]string[, C[bool], D[widget]");
        assert_eq!(got, specs(&[("C", PrimitiveKind::Bool)]));
    }

    #[test]
    fn last_field_decides_the_convention() {
        let (delims, got) = extract_field_specs("A[int], B bool");
        assert_eq!(delims, Delimiters::Space);
        assert_eq!(got.len(), 2);
    }

    #[test]
    fn resolves_values_in_order() {
        let s = specs(&[
            ("Count", PrimitiveKind::Int),
            ("Enabled", PrimitiveKind::Bool),
            ("Label", PrimitiveKind::String),
        ]);
        let got = resolve_field_values("42,true,hello", &s).unwrap();
        assert_eq!(
            got,
            vec![
                FieldValue { name: "Count".into(), value: Value::Int(42) },
                FieldValue { name: "Enabled".into(), value: Value::Bool(true) },
                FieldValue { name: "Label".into(), value: Value::String("hello".into()) },
            ]
        );
    }

    #[test]
    fn blank_literal_is_an_error() {
        let s = specs(&[
            ("Count", PrimitiveKind::Int),
            ("Enabled", PrimitiveKind::Bool),
            ("Label", PrimitiveKind::String),
        ]);
        let err = resolve_field_values("42,,hello", &s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyFieldValue);
        assert_eq!(
            err,
            FieldError::EmptyFieldValue { index: 1, field: "Enabled".into() }
        );
    }

    #[test]
    fn quoted_empty_string_is_an_error_here() {
        let s = specs(&[("Label", PrimitiveKind::String)]);
        let err = resolve_field_values("\"\"", &s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyFieldValue);
    }

    #[test]
    fn conversion_failure_propagates_as_parse_failure() {
        let s = specs(&[("Count", PrimitiveKind::Uint8)]);
        let err = resolve_field_values("256", &s).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseFailure);
    }

    #[test]
    fn empty_input_is_no_values() {
        let s = specs(&[("Count", PrimitiveKind::Int)]);
        assert_eq!(resolve_field_values("", &s), Ok(vec![]));
    }

    #[test]
    fn count_mismatch_truncates_to_the_shorter_side() {
        let s = specs(&[("A", PrimitiveKind::Int), ("B", PrimitiveKind::Int)]);
        assert_eq!(resolve_field_values("1,2,not-even-checked", &s).unwrap().len(), 2);
        assert_eq!(resolve_field_values("1", &s).unwrap().len(), 1);
        assert_eq!(resolve_field_values("1,2", &[]), Ok(vec![]));
    }

    #[test]
    fn anonymous_specs_validate_but_do_not_emit() {
        let s = specs(&[("", PrimitiveKind::Int)]);
        assert_eq!(resolve_field_values("7", &s), Ok(vec![]));
        assert!(resolve_field_values("seven", &s).is_err());
    }
}
