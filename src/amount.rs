//! Amount conversion between human cooking notation and canonical decimals.
//!
//! The parse direction accepts integers, decimals with `.` or `,`, simple
//! fractions ("3/4"), mixed numbers ("1 1/4"), Unicode vulgar-fraction
//! glyphs ("½"), and glyph-adjacent mixed forms ("1½"). The format direction
//! renders a decimal back into the nearest "nice" cooking fraction for
//! display. Neither direction ever fails: malformed input degrades to `0.0`
//! when parsing and to a rounded decimal string when formatting.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::patterns::{fraction_for_glyph, glyph_for_fraction};

lazy_static! {
    // Simple fractions are tried first so "1/2" is not read as two integers.
    static ref AMOUNT_TOKEN: Regex = Regex::new(r"(?P<frac>\d+/\d+)|(?P<num>\d+(?:[.,]\d+)?)")
        .expect("amount token pattern should be valid");
}

/// Denominators a cook actually writes: halves through sixteenths.
const DENOMINATORS: [u32; 7] = [2, 3, 4, 6, 8, 12, 16];

/// Remainders closer to zero than this are treated as exact integers.
const INTEGER_SNAP: f64 = 1e-8;

/// Largest acceptable distance between the remainder and the chosen fraction.
const FRACTION_TOLERANCE: f64 = 0.03;

/// Left-to-right mark: pins the integer/glyph visual order inside RTL text.
const LRM: char = '\u{200E}';

/// Parse a user-entered quantity into its canonical decimal value.
///
/// Every numeric token in the input is extracted and summed, which is what
/// makes mixed numbers work ("1 1/2" is 1 + 1/2) and also tolerates glyphs
/// placed on either side of a leading integer. A single leading `-` applies
/// its sign to the whole sum, fractional part included. Unparseable input
/// yields `0.0`; this function never fails.
///
/// # Examples
///
/// ```rust
/// use recipe_import::parse_amount_to_decimal;
///
/// assert_eq!(parse_amount_to_decimal("1 1/4"), 1.25);
/// assert_eq!(parse_amount_to_decimal("½"), 0.5);
/// assert_eq!(parse_amount_to_decimal("1½"), 1.5);
/// assert_eq!(parse_amount_to_decimal("-1/2"), -0.5);
/// assert_eq!(parse_amount_to_decimal(""), 0.0);
/// ```
pub fn parse_amount_to_decimal(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let (sign, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed),
    };

    // Substitute each vulgar-fraction glyph with a spaced ASCII "n/d" token
    // so a glyph adjacent to a leading integer ("1½") becomes a mixed number.
    let mut substituted = String::with_capacity(body.len() + 8);
    for ch in body.chars() {
        match fraction_for_glyph(ch) {
            Some((num, den)) => {
                substituted.push(' ');
                substituted.push_str(&num.to_string());
                substituted.push('/');
                substituted.push_str(&den.to_string());
                substituted.push(' ');
            }
            None => substituted.push(ch),
        }
    }

    let mut sum = 0.0;
    for capture in AMOUNT_TOKEN.captures_iter(&substituted) {
        if let Some(frac) = capture.name("frac") {
            let mut parts = frac.as_str().splitn(2, '/');
            let numerator = parts.next().and_then(|p| p.parse::<f64>().ok());
            let denominator = parts.next().and_then(|p| p.parse::<f64>().ok());
            if let (Some(numerator), Some(denominator)) = (numerator, denominator) {
                if denominator != 0.0 {
                    sum += numerator / denominator;
                }
            }
        } else if let Some(num) = capture.name("num") {
            if let Ok(value) = num.as_str().replace(',', ".").parse::<f64>() {
                sum += value;
            }
        }
    }

    trace!("Parsed amount '{}' -> {}", input, sign * sum);
    sign * sum
}

/// Render a decimal as the nearest "nice" cooking fraction for display.
///
/// Searches halves, thirds, quarters, sixths, eighths, twelfths, and
/// sixteenths for the closest match; when none lands within a 3% tolerance
/// the decimal is shown rounded to two places instead. Reduced fractions
/// with a single-glyph Unicode form are rendered as that glyph, joined to
/// the integer part with a left-to-right mark so Hebrew text does not
/// visually reorder them.
///
/// This is a display heuristic, not a lossless encoding: parsing a
/// formatted value lands within the tolerance band of the original, not
/// necessarily on it.
///
/// # Examples
///
/// ```rust
/// use recipe_import::format_amount_to_fraction;
///
/// assert_eq!(format_amount_to_fraction(0.5), "½");
/// assert_eq!(format_amount_to_fraction(1.25), "1\u{200E}¼");
/// assert_eq!(format_amount_to_fraction(0.97), "0.97");
/// assert_eq!(format_amount_to_fraction(3.0), "3");
/// ```
pub fn format_amount_to_fraction(decimal: f64) -> String {
    if !decimal.is_finite() {
        return decimal.to_string();
    }

    let sign = if decimal < 0.0 { "-" } else { "" };
    let abs = decimal.abs();
    let integer_part = abs.floor() as u64;
    let remainder = abs - abs.floor();

    if remainder < INTEGER_SNAP {
        return format!("{}{}", sign, integer_part);
    }

    let mut best: Option<(u32, u32, f64)> = None;
    for &den in &DENOMINATORS {
        let num = (remainder * f64::from(den)).round() as u32;
        if num > den {
            continue;
        }
        let delta = (remainder - f64::from(num) / f64::from(den)).abs();
        if best.map_or(true, |(_, _, best_delta)| delta < best_delta) {
            best = Some((num, den, delta));
        }
    }
    let (num, den, delta) = best.expect("denominator table is non-empty");

    // No fraction fits well enough: show the decimal rounded to 2 places.
    if delta > FRACTION_TOLERANCE || num == 0 {
        let rounded = (decimal * 100.0).round() / 100.0;
        return rounded.to_string();
    }

    // Rounding pushed the remainder to a whole unit.
    if num == den {
        return format!("{}{}", sign, integer_part + 1);
    }

    let divisor = gcd(num, den);
    let (num, den) = (num / divisor, den / divisor);

    match glyph_for_fraction(num, den) {
        Some(glyph) if integer_part > 0 => format!("{}{}{}{}", sign, integer_part, LRM, glyph),
        Some(glyph) => format!("{}{}", sign, glyph),
        None if integer_part > 0 => format!("{}{} {}/{}", sign, integer_part, num, den),
        None => format!("{}{}/{}", sign, num, den),
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(4, 8), 4);
        assert_eq!(gcd(9, 6), 3);
        assert_eq!(gcd(7, 16), 1);
    }

    #[test]
    fn test_non_finite_input_coerces_to_string() {
        assert_eq!(format_amount_to_fraction(f64::NAN), "NaN");
        assert_eq!(format_amount_to_fraction(f64::INFINITY), "inf");
    }
}
