//! French-locale euro amounts.

/// Thousands separator used by fr-FR (narrow no-break space)
const THOUSANDS_SEP: char = '\u{202f}';
/// Space between amount and currency sign (no-break space)
const CURRENCY_SEP: char = '\u{a0}';

/// Format an amount the way fr-FR does: `2 847,50 €`.
pub fn format_eur(amount: f64) -> String {
    format!("{}{}€", format_decimal(amount, 2), CURRENCY_SEP)
}

/// Format an integer with fr-FR grouping: `12 450`.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format with a fixed number of decimals and a decimal comma.
pub fn format_decimal(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    let mut out = String::new();
    // "-0,00" reads oddly; only sign non-zero amounts
    if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEP);
        }
        out.push(c);
    }
    out
}

/// Parse a user-typed amount: `20`, `20.5`, `20,50`, `20,50 €`.
///
/// Returns `None` for blank or unparsable input.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .trim_end_matches('€')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != THOUSANDS_SEP && *c != CURRENCY_SEP)
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(2847.5), "2\u{202f}847,50\u{a0}€");
        assert_eq!(format_eur(20.0), "20,00\u{a0}€");
        assert_eq!(format_eur(0.0), "0,00\u{a0}€");
        assert_eq!(format_eur(1_234_567.891), "1\u{202f}234\u{202f}567,89\u{a0}€");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_decimal(-12.5, 1), "-12,5");
        assert_eq!(format_decimal(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12450), "12\u{202f}450");
        assert_eq!(format_count(156), "156");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("20"), Some(20.0));
        assert_eq!(parse_amount(" 20,50 € "), Some(20.5));
        assert_eq!(parse_amount("54.99"), Some(54.99));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("vingt"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
