//! Display formatting for financial figures

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Insert thousands separators into an unsigned integer string
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Whole-unit currency string, e.g. `$1,234,568` or `-$1,235`
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_thousands(&rounded.abs().trunc().to_string());
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}"),
        None => format!("{sign}{currency} {grouped}"),
    }
}

/// Percentage with a fixed number of decimals, e.g. `12.3%`
pub fn format_percentage(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", decimals as usize, rounded)
}

/// Compact magnitude string, e.g. `1.5B`, `250.0M`, `12.3K`
pub fn format_large_number(value: Decimal) -> String {
    let compact = |divisor: Decimal, suffix: &str| {
        let scaled = (value / divisor).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{scaled:.1}{suffix}")
    };

    if value >= dec!(1000000000) {
        compact(dec!(1000000000), "B")
    } else if value >= dec!(1000000) {
        compact(dec!(1000000), "M")
    } else if value >= dec!(1000) {
        compact(dec!(1000), "K")
    } else {
        value.normalize().to_string()
    }
}
