//! Duration literal scanning.
//!
//! Grammar: an optional sign followed by one or more `<number><unit>` tokens, or the bare literal `0`.
//! A number is `digits`, `digits.digits`, `digits.` or `.digits`; units are `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m`
//! and `h`. The total must fit a signed 64-bit nanosecond count.

use chrono::TimeDelta;

use crate::errors::ParseCause;

/// Nanoseconds per unit spelling.
const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000), // U+00B5 micro sign
    ("μs", 1_000), // U+03BC Greek small letter mu
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Fraction digits beyond this cannot change a nanosecond count.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a compound duration literal such as `1h30m` or `-1.5s`.
pub fn parse_duration(literal: &str) -> Result<TimeDelta, ParseCause> {
    let (negative, mut rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(ParseCause::InvalidDuration("empty duration"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(tail) => split_digits(tail),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(ParseCause::InvalidDuration("expected a number"));
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, tail) = after_number.split_at(unit_len);
        if unit.is_empty() {
            return Err(ParseCause::InvalidDuration("missing unit"));
        }
        let scale = UNITS
            .iter()
            .find(|(spelling, _)| *spelling == unit)
            .map(|&(_, nanos)| nanos)
            .ok_or(ParseCause::InvalidDuration("unknown unit"))?;

        total = total
            .checked_add(token_nanos(whole, fraction, scale)?)
            .ok_or(ParseCause::InvalidDuration("duration out of range"))?;
        rest = tail;
    }

    // The negative range reaches one further than the positive one.
    let limit = i64::MAX as u128 + u128::from(negative);
    if total > limit {
        return Err(ParseCause::InvalidDuration("duration out of range"));
    }
    let signed = if negative { -(total as i128) } else { total as i128 };
    let nanos = i64::try_from(signed).map_err(|_| ParseCause::InvalidDuration("duration out of range"))?;
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Split a leading run of ASCII digits off `s`.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

/// Nanoseconds for one `<whole>.<fraction><unit>` token.
fn token_nanos(whole: &str, fraction: &str, scale: u128) -> Result<u128, ParseCause> {
    let out_of_range = ParseCause::InvalidDuration("duration out of range");

    // More than 39 digits cannot fit u128 anyway; anything that large overflows i64 nanoseconds.
    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| out_of_range.clone())?
    };
    let mut nanos = whole_value.checked_mul(scale).ok_or_else(|| out_of_range.clone())?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let digits: u128 = fraction.parse().map_err(|_| out_of_range.clone())?;
        let denominator = 10u128.pow(fraction.len() as u32);
        nanos = nanos.checked_add(digits * scale / denominator).ok_or(out_of_range)?;
    }
    Ok(nanos)
}
