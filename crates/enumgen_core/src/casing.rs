//! Identifier casing and pluralization.
//!
//! Source identifiers arrive as `snake_case`, `kebab-case`, `SHOUTING_CASE` or `CamelCase`, and the generated API
//! must read as natural English in the author's own convention. Every transform therefore extracts a
//! [`CasingPattern`] from its input and re-applies it to the output instead of normalizing to one case.
//!
//! ## Notes
//! - Pluralization treats any word already ending in `s` as plural. This keeps [`pluralize`] idempotent but is not
//!   grammatically exact (`bus` stays `bus`).
//! - Irregular nouns come from [`crate::lang::irregulars`] and are consulted before the suffix rules.

use crate::lang::irregulars;

/// Uppercase/lowercase template of an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasingPattern {
    /// Every cased character is uppercase: `DOG_HOUSE`.
    Upper,
    /// Every cased character is lowercase (or nothing is cased): `dog_house`.
    Lower,
    /// Uppercase first character, everything else lowercase: `Dog_house`.
    Capitalized,
    /// Anything else; one flag per character, `true` where it was uppercase.
    Mixed(Vec<bool>),
}

impl CasingPattern {
    pub fn detect(word: &str) -> Self {
        let any_upper = word.chars().any(char::is_uppercase);
        let any_lower = word.chars().any(char::is_lowercase);
        let first_upper = word.chars().next().is_some_and(char::is_uppercase);
        let rest_upper = word.chars().skip(1).any(char::is_uppercase);

        if any_upper && !any_lower {
            CasingPattern::Upper
        } else if !any_upper {
            CasingPattern::Lower
        } else if first_upper && !rest_upper {
            CasingPattern::Capitalized
        } else {
            CasingPattern::Mixed(word.chars().map(char::is_uppercase).collect())
        }
    }

    /// Re-case `word` to this template.
    ///
    /// A mixed template shorter than `word` extends with the case of its last character.
    pub fn apply(&self, word: &str) -> String {
        match self {
            CasingPattern::Upper => word.to_uppercase(),
            CasingPattern::Lower => word.to_lowercase(),
            CasingPattern::Capitalized => {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                    None => String::new(),
                }
            }
            CasingPattern::Mixed(flags) => {
                let fallback = flags.last().copied().unwrap_or(false);
                let mut out = String::with_capacity(word.len());
                for (i, c) in word.chars().enumerate() {
                    if flags.get(i).copied().unwrap_or(fallback) {
                        out.extend(c.to_uppercase());
                    } else {
                        out.extend(c.to_lowercase());
                    }
                }
                out
            }
        }
    }
}

/// Pluralize an identifier, keeping its casing template.
///
/// For `snake_case` input only the last segment is inflected.
///
/// ## Examples
/// ```rust
/// use enumgen_core::pluralize;
///
/// assert_eq!(pluralize("status"), "statuses");
/// assert_eq!(pluralize("dog_house"), "dog_houses");
/// assert_eq!(pluralize("DOG"), "DOGS");
/// assert_eq!(pluralize("city"), "cities");
/// assert_eq!(pluralize("Person"), "People");
/// ```
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    let pattern = CasingPattern::detect(word);
    let lower = word.to_lowercase();
    let (head, last) = match lower.rfind('_') {
        Some(idx) => lower.split_at(idx + 1),
        None => ("", lower.as_str()),
    };
    match plural_of(last) {
        Some(plural) => pattern.apply(&format!("{head}{plural}")),
        None => word.to_string(),
    }
}

/// Plural of one lowercase word, or `None` if it already reads as plural.
fn plural_of(word: &str) -> Option<String> {
    if let Some(plural) = irregulars::plural_of(word) {
        return Some(plural.to_string());
    }
    if word.is_empty() || word.ends_with('s') || irregulars::is_irregular_plural(word) {
        return None;
    }

    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(is_consonant) {
            return Some(format!("{stem}ies"));
        }
    }
    if ["x", "z", "o", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return Some(format!("{word}es"));
    }
    Some(format!("{word}s"))
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Singularize an identifier, keeping its casing template.
///
/// The input is split into camel-case sub-words and only the last one is inflected.
///
/// ## Examples
/// ```rust
/// use enumgen_core::singularize;
///
/// assert_eq!(singularize("dog_houses"), "dog_house");
/// assert_eq!(singularize("men"), "man");
/// assert_eq!(singularize("DogHouses"), "DogHouse");
/// ```
pub fn singularize(word: &str) -> String {
    let mut parts = split_camel(word);
    let last = parts.pop().unwrap_or_default();
    let mut out = parts.concat();
    out.push_str(&singular_of(last));
    out
}

/// Split at every uppercase character that is followed by a lowercase one (never at position 0).
fn split_camel(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut chars = word.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        let next_is_lower = chars.peek().is_some_and(|&(_, next)| next.is_lowercase());
        if idx > 0 && c.is_uppercase() && next_is_lower {
            parts.push(&word[start..idx]);
            start = idx;
        }
    }
    parts.push(&word[start..]);
    parts
}

fn singular_of(word: &str) -> String {
    let lower = word.to_lowercase();
    let singular = if let Some(singular) = irregulars::singular_of(&lower) {
        singular
    } else if is_regular_plural(&lower) {
        &lower[..lower.len() - 1]
    } else {
        return word.to_string();
    };
    CasingPattern::detect(word).apply(singular)
}

/// Ends in `s` after a non-empty stem, but not in `ss`, `us` or `is`.
fn is_regular_plural(word: &str) -> bool {
    word.len() > 1 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|suffix| word.ends_with(suffix))
}

/// Upper-case the first character of every `_`-separated segment and join them.
///
/// The rest of each segment keeps its case.
///
/// ## Examples
/// ```rust
/// use enumgen_core::camel_case;
///
/// assert_eq!(camel_case("dog_house"), "DogHouse");
/// assert_eq!(camel_case("http_URL"), "HttpURL");
/// assert_eq!(camel_case(""), "");
/// ```
pub fn camel_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for segment in word.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Naming variants of one identifier, derived once and reused by the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CasingForms {
    pub original: String,
    pub camel: String,
    pub lower: String,
    pub upper: String,
    pub plural_lower: String,
    pub plural_camel: String,
}

impl CasingForms {
    pub fn new(identifier: &str) -> Self {
        let lower = identifier.to_lowercase();
        Self {
            original: identifier.to_string(),
            camel: camel_case(identifier),
            upper: identifier.to_uppercase(),
            plural_lower: pluralize(&lower),
            plural_camel: camel_case(&pluralize(identifier)),
            lower,
        }
    }
}
