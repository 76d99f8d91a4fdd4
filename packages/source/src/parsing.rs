//! Field-level parsing for raw source values.
//!
//! None of these functions fail: a value that cannot be interpreted becomes
//! `None` so the record survives normalization with an explicit marker.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses an incident date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` (optionally with fractional
/// seconds), and RFC 3339 timestamps.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.date());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Parses a latitude or longitude using leading-float semantics.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// decimal prefix (digits, an optional fraction, an optional exponent).
/// Anything after it is ignored, so `"13.1 N"` yields 13.1 and `".5"` yields
/// 0.5. `Infinity` is returned as-is; the validity gate rejects it. Returns
/// `None` when no number leads the value.
#[must_use]
pub fn parse_coordinate(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = digits_from(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Parses an age using leading-integer semantics.
///
/// Leading whitespace and an optional sign are accepted, then as many ASCII
/// digits as are present. Anything after the digits is ignored, so `"42 yrs"`
/// yields 42 and `"7.9"` yields 7. Returns `None` when no digits lead the
/// value or the number does not fit.
#[must_use]
pub fn parse_age(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value = rest[..end].parse::<i32>().ok()?;
    Some(if negative { -value } else { value })
}

/// Maps an empty passthrough column to `None`.
#[must_use]
pub fn optional_text(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
