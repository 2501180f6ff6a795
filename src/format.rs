//! Price formatting and discount math for decimal-comma price strings
//! (Danish/Norwegian convention). Malformed input degrades to "no
//! discount" — nothing here panics or returns an error.

/// Parse a decimal-comma price string ("129,99") as a float.
///
/// Only the first comma is treated as the separator. Returns `NaN` for
/// empty or non-numeric input; callers are expected to guard on presence
/// first, and the discount helpers below reject non-finite results.
pub fn parse_locale_price(s: &str) -> f64 {
    s.trim().replacen(',', ".", 1).parse().unwrap_or(f64::NAN)
}

/// Append the currency suffix, preserving the original string verbatim
/// (no rounding, no normalization). Empty in, empty out.
pub fn format_price(s: &str) -> String {
    if s.trim().is_empty() {
        String::new()
    } else {
        format!("{s} kr.")
    }
}

/// Rounded percentage discount, or 0 when either price is missing or
/// unparsable. Negative when the "discounted" price is higher; callers
/// only render the ribbon for values > 0.
pub fn discount_percent(original: &str, discounted: &str) -> i32 {
    if original.trim().is_empty() || discounted.trim().is_empty() {
        return 0;
    }
    let orig = parse_locale_price(original);
    let disc = parse_locale_price(discounted);
    if !orig.is_finite() || !disc.is_finite() || orig <= 0.0 {
        return 0;
    }
    (((orig - disc) / orig) * 100.0).round() as i32
}

/// Absolute savings, fixed to two decimals with the comma separator
/// restored ("40,00"). `None` unless both prices parse and the discounted
/// value is strictly below the original.
pub fn savings_amount(original: &str, discounted: &str) -> Option<String> {
    if original.trim().is_empty() || discounted.trim().is_empty() {
        return None;
    }
    let orig = parse_locale_price(original);
    let disc = parse_locale_price(discounted);
    if !orig.is_finite() || !disc.is_finite() || orig <= disc {
        return None;
    }
    Some(format!("{:.2}", orig - disc).replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_separator() {
        assert_eq!(parse_locale_price("129,99"), 129.99);
        assert_eq!(parse_locale_price("7499"), 7499.0);
        assert_eq!(parse_locale_price(" 50,00 "), 50.0);
    }

    #[test]
    fn parse_garbage_is_nan() {
        assert!(parse_locale_price("").is_nan());
        assert!(parse_locale_price("gratis").is_nan());
    }

    #[test]
    fn format_price_appends_suffix_verbatim() {
        assert_eq!(format_price("129,99"), "129,99 kr.");
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("  "), "");
    }

    #[test]
    fn discount_quarter_off() {
        assert_eq!(discount_percent("100,00", "75,00"), 25);
    }

    #[test]
    fn discount_rounds_half_up() {
        // (129,99 - 89,99) / 129,99 = 30.77...% -> 31
        assert_eq!(discount_percent("129,99", "89,99"), 31);
    }

    #[test]
    fn discount_missing_or_bad_input_is_zero() {
        assert_eq!(discount_percent("", "75,00"), 0);
        assert_eq!(discount_percent("100,00", ""), 0);
        assert_eq!(discount_percent("abc", "75,00"), 0);
        assert_eq!(discount_percent("0", "75,00"), 0);
    }

    #[test]
    fn savings_known_pair() {
        assert_eq!(
            savings_amount("129,99", "89,99"),
            Some("40,00".to_string())
        );
    }

    #[test]
    fn savings_none_when_discounted_higher() {
        assert_eq!(savings_amount("50,00", "60,00"), None);
    }

    #[test]
    fn savings_none_when_equal_or_missing() {
        assert_eq!(savings_amount("50,00", "50,00"), None);
        assert_eq!(savings_amount("", "50,00"), None);
        assert_eq!(savings_amount("50,00", ""), None);
    }
}
