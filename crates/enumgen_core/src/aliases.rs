//! Alias list parsing.

use crate::convert::strip_quotes;

/// Parse a comma-separated alias list.
///
/// Each entry is trimmed and loses one enclosing pair of double quotes; blank entries are dropped. Input without a
/// comma is a single alias and is kept even when blank, so `""` yields `[""]` while `",,"` yields `[]`.
///
/// ## Examples
/// ```rust
/// use enumgen_core::parse_alias_list;
///
/// assert_eq!(parse_alias_list(r#"Mercury, "mercury", MERC"#), vec!["Mercury", "mercury", "MERC"]);
/// assert_eq!(parse_alias_list(""), vec![""]);
/// assert!(parse_alias_list(",,").is_empty());
/// ```
pub fn parse_alias_list(raw: &str) -> Vec<String> {
    if !raw.contains(',') {
        return vec![clean(raw).to_string()];
    }
    raw.split(',')
        .map(clean)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean(alias: &str) -> &str {
    strip_quotes(alias.trim())
}
