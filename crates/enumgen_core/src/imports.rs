//! Import-set derivation.

use std::collections::BTreeSet;

use crate::fields::FieldSpec;

/// Derive the foreign namespaces generated code must import for a set of field specs.
///
/// ## Parameters
/// - `specs`: field specs across every type being generated.
///
/// ## Returns
/// - Sorted, duplicate-free namespace names (e.g. `["time"]` when any field is a `time.Time` or `time.Duration`).
///
/// ## Examples
/// ```rust
/// use enumgen_core::{derive_imports, FieldSpec, PrimitiveKind};
///
/// let specs = [
///     FieldSpec::new("Since", PrimitiveKind::Time),
///     FieldSpec::new("Ttl", PrimitiveKind::Duration),
///     FieldSpec::new("Name", PrimitiveKind::String),
/// ];
/// assert_eq!(derive_imports(&specs), vec!["time"]);
/// ```
pub fn derive_imports<'a, I>(specs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a FieldSpec>,
{
    specs
        .into_iter()
        .filter_map(|spec| spec.kind().namespace())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::types::PrimitiveKind;

    #[test]
    fn no_qualified_types_means_no_imports() {
        let specs = [FieldSpec::new("A", PrimitiveKind::Int), FieldSpec::new("B", PrimitiveKind::Complex128)];
        assert!(derive_imports(&specs).is_empty());
        assert!(derive_imports(&[]).is_empty());
    }

    #[test]
    fn namespaces_are_deduplicated_across_types() {
        let first = vec![FieldSpec::new("Since", PrimitiveKind::Time)];
        let second = vec![FieldSpec::new("Every", PrimitiveKind::Duration)];
        assert_eq!(derive_imports(first.iter().chain(&second)), vec!["time"]);
    }
}
