use std::collections::HashMap;

use enumgen_core::convert::{PARSERS, parser_for};
use enumgen_core::lang::irregulars::{self, IRREGULARS};
use enumgen_core::lang::types::{self, PRIMITIVE_TYPES, PrimitiveKind};

#[test]
fn primitive_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, PrimitiveKind> = HashMap::new();

    for info in PRIMITIVE_TYPES {
        assert_eq!(
            types::from_str(info.canonical),
            Some(info.id),
            "type token not resolvable: {}",
            info.canonical
        );
        assert_eq!(types::as_str(info.id), info.canonical, "as_str mismatch for {:?}", info.id);

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!("duplicate type token {:?}: {:?} and {:?}", info.canonical, prev, info.id);
        }
    }
}

#[test]
fn every_kind_has_exactly_one_registry_entry() {
    for info in PRIMITIVE_TYPES {
        let count = PRIMITIVE_TYPES.iter().filter(|other| other.id == info.id).count();
        assert_eq!(count, 1, "kind {:?} registered {count} times", info.id);
    }
}

#[test]
fn every_kind_is_described() {
    for info in PRIMITIVE_TYPES {
        assert!(!info.description.is_empty(), "missing description for {:?}", info.id);
        assert_eq!(info.id.description(), info.description);
    }
}

#[test]
fn zero_values_round_trip_their_kind() {
    for info in PRIMITIVE_TYPES {
        assert_eq!(info.id.zero_value().kind(), info.id);
    }
}

#[test]
fn namespaces_match_qualified_spellings() {
    for info in PRIMITIVE_TYPES {
        match info.namespace {
            Some(ns) => assert!(
                info.canonical.starts_with(&format!("{ns}.")),
                "{} is not qualified by {ns}",
                info.canonical
            ),
            None => assert!(!info.canonical.contains('.'), "{} is qualified but has no namespace", info.canonical),
        }
    }
}

#[test]
fn parser_table_has_no_duplicates_and_skips_only_literal_free_kinds() {
    for (kind, _) in PARSERS {
        assert_eq!(PARSERS.iter().filter(|(other, _)| other == kind).count(), 1);
    }
    let without_parser: Vec<PrimitiveKind> = PRIMITIVE_TYPES
        .iter()
        .map(|info| info.id)
        .filter(|&kind| parser_for(kind).is_none())
        .collect();
    assert_eq!(
        without_parser,
        vec![PrimitiveKind::Complex64, PrimitiveKind::Complex128, PrimitiveKind::Uintptr]
    );
}

#[test]
fn irregular_nouns_resolve_both_ways() {
    for &(singular, plural) in IRREGULARS {
        assert_eq!(irregulars::plural_of(singular), Some(plural));
        assert_eq!(irregulars::singular_of(plural), Some(singular));
        assert_eq!(singular, singular.to_lowercase(), "irregular entries must be lowercase");
    }
}
