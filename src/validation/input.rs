use rust_decimal::Decimal;

use crate::decimal::Money;

/// strip everything but ascii digits, '.' and ',' then turn the first ',' into '.'
///
/// Mirrors what a keystroke-level input filter does before the text reaches
/// the validators. A leading '-' is removed too, so negative detection must
/// run on the raw text.
pub fn normalize_numeric_input(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    cleaned.replacen(',', ".", 1)
}

/// parse the longest leading number in the text, None when there is none.
///
/// Like a browser's `parseFloat`: leading whitespace is skipped and anything
/// after the numeric prefix is ignored, so `12abc` reads as 12. Finite values
/// beyond the decimal range saturate to the signed maximum so they fail range
/// checks instead of the numeric check; nonzero values below the smallest
/// decimal step saturate to that step with their sign.
pub(crate) fn parse_number(raw: &str) -> Option<Decimal> {
    let prefix = numeric_prefix(raw.trim())?;
    let approx: f64 = prefix.parse().ok()?;
    if !approx.is_finite() {
        return None;
    }

    let exact = Money::from_str_exact(prefix)
        .map(|money| money.as_decimal())
        .or_else(|_| Decimal::from_scientific(prefix))
        .or_else(|_| Decimal::try_from(approx));

    Some(match exact {
        Ok(value) if value.is_zero() && approx != 0.0 => smallest_step(approx),
        Ok(value) => value,
        Err(_) if approx.abs() < 1.0 => smallest_step(approx),
        Err(_) if approx.is_sign_negative() => Decimal::MIN,
        Err(_) => Decimal::MAX,
    })
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` at the start of the text; the
/// exponent only counts when digits follow it
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole = leading_digits(&bytes[end..]);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = leading_digits(&bytes[end + 1..]);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let digits = leading_digits(&bytes[exp..]);
        if digits > 0 {
            end = exp + digits;
        }
    }

    Some(&text[..end])
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn smallest_step(approx: f64) -> Decimal {
    let step = Decimal::new(1, 28);
    if approx.is_sign_negative() {
        -step
    } else {
        step
    }
}

/// parse a whole number of months; signed so negatives reach the range check
pub(crate) fn parse_whole_months(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
