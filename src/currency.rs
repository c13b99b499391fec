//! Currency formatting for amounts displayed in HTML views.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format an amount as a currency string, e.g. `1234.5` -> "$1,234.50" and
/// `-5.0` -> "-$5.00".
pub(crate) fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

#[cfg(test)]
mod format_currency_tests {
    use super::format_currency;

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn formats_positive_amount_with_thousands_separator() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
    }

    #[test]
    fn formats_negative_amount() {
        assert_eq!(format_currency(-5.0), "-$5.00");
    }

    #[test]
    fn keeps_both_decimal_places() {
        assert_eq!(format_currency(12.3), "$12.30");
        assert_eq!(format_currency(12.34), "$12.34");
    }
}
