//! Irregular English noun vocabulary.
//!
//! Nouns whose plural does not follow the suffix rules in [`crate::casing`]. Both directions are served from the
//! same table: [`plural_of`] for pluralization, [`singular_of`] for singularization.
//!
//! ## Notes
//! - Entries are lowercase; callers lowercase before lookup and re-apply the input's casing template afterwards.
//! - `status → statuses` is listed so it wins over the “already ends in `s`” shortcut.

/// Irregular singular → plural mappings, sorted by singular.
pub static IRREGULARS: &[(&str, &str)] = &[
    ("analysis", "analyses"),
    ("axis", "axes"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("index", "indices"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("status", "statuses"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("woman", "women"),
];

/// Look up the irregular plural of a lowercase singular noun.
pub fn plural_of(singular: &str) -> Option<&'static str> {
    IRREGULARS
        .binary_search_by_key(&singular, |&(s, _)| s)
        .ok()
        .map(|idx| IRREGULARS[idx].1)
}

/// Look up the singular of a lowercase irregular plural noun.
pub fn singular_of(plural: &str) -> Option<&'static str> {
    IRREGULARS.iter().find(|&&(_, p)| p == plural).map(|&(s, _)| s)
}

/// Check whether a lowercase word is already one of the irregular plurals.
pub fn is_irregular_plural(word: &str) -> bool {
    singular_of(word).is_some()
}
