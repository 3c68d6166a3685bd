//! Display formatting for portfolio values, balances and timings.

use alloy::primitives::Address;
use chrono::{DateTime, Local};

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Formats `value` with a fixed number of decimals, rounding exact ties away
/// from zero instead of to even.
///
/// Only values whose scaled product is exact count as ties. `0.015` is stored
/// just below the midpoint and rounds down to `0.01`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    let exact = value.mul_add(scale, -scaled) == 0.0;

    if exact && (scaled - scaled.trunc()).abs() == 0.5 {
        format!("{:.*}", decimals, scaled.round() / scale)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// `$2.50M`, `$1.50K` or `$999.00`.
pub fn format_usd(value: f64) -> String {
    if value >= MILLION {
        format!("${}M", to_fixed(value / MILLION, 2))
    } else if value >= THOUSAND {
        format!("${}K", to_fixed(value / THOUSAND, 2))
    } else {
        format!("${}", to_fixed(value, 2))
    }
}

/// `500ms` below one second, `1.50s` otherwise.
pub fn format_duration_ms(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{}ms", to_fixed(ms, 0))
    } else {
        format!("{}s", to_fixed(ms / 1000.0, 2))
    }
}

/// Token quantity with its symbol. Small amounts keep six decimals.
pub fn format_balance(balance: f64, symbol: &str) -> String {
    if balance >= MILLION {
        format!("{}M {symbol}", to_fixed(balance / MILLION, 2))
    } else if balance >= THOUSAND {
        format!("{}K {symbol}", to_fixed(balance / THOUSAND, 2))
    } else {
        format!("{} {symbol}", to_fixed(balance, 6))
    }
}

/// Same as [`format_balance`] but for the decimal string stored on a token
/// record. Unparseable input is shown as zero.
pub fn format_balance_str(balance: &str, symbol: &str) -> String {
    format_balance(balance.parse::<f64>().unwrap_or_default(), symbol)
}

pub fn format_price(price: f64) -> String {
    format!("${}", to_fixed(price, 2))
}

pub fn format_percent(percent: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(percent, decimals))
}

/// `0x1234...abcd`
pub fn shorten_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

pub fn format_local_time(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn usd_abbreviations() {
        assert_eq!(format_usd(999.0), "$999.00");
        assert_eq!(format_usd(1500.0), "$1.50K");
        assert_eq!(format_usd(2_500_000.0), "$2.50M");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(1000.0), "$1.00K");
        assert_eq!(format_usd(1_000_000.0), "$1.00M");
    }

    #[test]
    fn usd_rounds_ties_up() {
        assert_eq!(format_usd(1.125), "$1.13");
        assert_eq!(format_usd(0.375), "$0.38");
    }

    #[test]
    fn usd_near_ties_follow_stored_value() {
        assert_eq!(format_usd(0.015), "$0.01");
        assert_eq!(format_usd(0.045), "$0.04");
        assert_eq!(format_usd(0.075), "$0.07");
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration_ms(500.0), "500ms");
        assert_eq!(format_duration_ms(1500.0), "1.50s");
        assert_eq!(format_duration_ms(123.4), "123ms");
        assert_eq!(format_duration_ms(0.5), "1ms");
        assert_eq!(format_duration_ms(1000.0), "1.00s");
    }

    #[test]
    fn balances_keep_six_decimals_below_a_thousand() {
        assert_eq!(format_balance(100.0, "USDC"), "100.000000 USDC");
        assert_eq!(format_balance(1.5, "ETH"), "1.500000 ETH");
        assert_eq!(format_balance(2500.0, "ARB"), "2.50K ARB");
        assert_eq!(format_balance(3_000_000.0, "ARB"), "3.00M ARB");
        assert_eq!(format_balance_str("0", "ETH"), "0.000000 ETH");
        assert_eq!(format_balance_str("garbage", "ETH"), "0.000000 ETH");
    }

    #[test]
    fn percent_and_price() {
        assert_eq!(format_percent(67.25, 1), "67.3%");
        assert_eq!(format_percent(12.0, 0), "12%");
        assert_eq!(format_price(0.85), "$0.85");
        assert_eq!(format_price(95000.0), "$95000.00");
    }

    #[test]
    fn short_address() {
        let addr = address!("0x1234567890123456789012345678901234567890");
        assert_eq!(shorten_address(&addr), "0x1234...7890");
    }
}
