//! Helpers that turn unstable upstream text into stable ids and clean titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing " - Publisher" attribution appended to headline titles.
static PUBLISHER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" - [^-]+$").expect("publisher suffix pattern is valid"));

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Deterministic 32-bit rolling hash rendered in base 36.
///
/// `h = h * 31 + code_point` with two's-complement wraparound, then the
/// magnitude in base 36. Not cryptographic; only used to make entry ids
/// stable across requests and process restarts.
pub fn hash_string(input: &str) -> String {
    let hash = input
        .chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));

    to_base36(hash.unsigned_abs())
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    String::from_utf8(digits).unwrap_or_default()
}

/// Strips a trailing " - Publisher" suffix and surrounding whitespace.
pub fn clean_title(title: &str) -> String {
    PUBLISHER_SUFFIX.replace(title, "").trim().to_string()
}
