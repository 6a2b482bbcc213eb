//! Amount formatting shared by record projections

use rust_decimal::Decimal;

/// Format an amount with `,` thousands separators and no trailing zeros.
///
/// At most three fractional digits are kept: `25000` -> `25,000`,
/// `1234.5` -> `1,234.5`, `0.12345` -> `0.123`.
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(Decimal::new(25000, 0)), "25,000");
        assert_eq!(group_thousands(Decimal::new(999, 0)), "999");
        assert_eq!(group_thousands(Decimal::new(1234567, 0)), "1,234,567");
        assert_eq!(group_thousands(Decimal::new(123450, 2)), "1,234.5");
        assert_eq!(group_thousands(Decimal::new(12345, 5)), "0.123");
        assert_eq!(group_thousands(Decimal::new(-150000, 2)), "-1,500");
        assert_eq!(group_thousands(Decimal::ZERO), "0");
    }
}
