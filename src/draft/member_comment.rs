//! Splitting a member's trailing comment into its parts.
//!
//! A member comment reads `[invalid] <aliases><sep><values>`, where the separator follows the delimiter convention
//! detected on the type comment:
//!
//! - space: `Mercury 0.378,2439.7` or `"In Progress",wip 3`
//! - brackets: `Mercury[0.378,2439.7]`
//! - parens: `Mercury(0.378,2439.7)`

use enumgen_core::Delimiters;

/// The parts of one member comment, borrowed from the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberComment<'a> {
    pub valid: bool,
    pub aliases: &'a str,
    pub values: &'a str,
}

/// Split a member comment.
///
/// ## Parameters
/// - `comment`: the raw trailing comment, without the comment marker.
/// - `delimiters`: convention detected on the type comment.
/// - `invalid_marker`: leading word (ASCII case-insensitive) that marks the member invalid.
///
/// ## Notes
/// - With the space convention a comment holding a single token is all aliases.
/// - With bracket/paren conventions the values run to the *last* closer; a missing closer takes the rest.
pub fn split_member_comment<'a>(comment: &'a str, delimiters: Delimiters, invalid_marker: &str) -> MemberComment<'a> {
    let mut rest = comment.trim();
    let mut valid = true;

    if !invalid_marker.is_empty() {
        let (word, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        if word.eq_ignore_ascii_case(invalid_marker) {
            valid = false;
            rest = tail.trim_start();
        }
    }

    let (aliases, values) = match delimiters {
        Delimiters::Space => match find_unquoted_whitespace(rest) {
            Some(idx) => (&rest[..idx], rest[idx..].trim()),
            None => (rest, ""),
        },
        Delimiters::Brackets | Delimiters::Parens => match rest.find(delimiters.opener()) {
            Some(open) => {
                let inner = &rest[open + 1..];
                let values = match inner.rfind(delimiters.closer()) {
                    Some(close) => &inner[..close],
                    None => inner,
                };
                (rest[..open].trim(), values.trim())
            }
            None => (rest, ""),
        },
    };

    MemberComment { valid, aliases, values }
}

/// Byte offset of the first whitespace character outside double quotes.
fn find_unquoted_whitespace(s: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (idx, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => return Some(idx),
            _ => {}
        }
    }
    None
}
