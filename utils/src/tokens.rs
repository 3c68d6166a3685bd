use std::fmt::{Display, Formatter};

use alloy::primitives::{address, Address};
use serde::{Deserialize, Serialize};

/// Display tag used to colour a token in the allocation bar and its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenColor {
    Blue,
    Green,
    Orange,
    Purple,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TokenSpec {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: Address,
    pub decimals: u8,
    /// Fixed USD price, this is not a live feed
    pub price: f64,
    pub color: TokenColor,
}

impl TokenSpec {
    pub fn is_native(&self) -> bool {
        self.address == Address::ZERO
    }
}

pub const NATIVE_TOKEN: TokenSpec = TokenSpec {
    symbol: "ETH",
    name: "Ethereum",
    address: Address::ZERO,
    decimals: 18,
    price: 3200.0,
    color: TokenColor::Blue,
};

/// Tokens shown on the dashboard. The native asset is always first.
pub const TOKEN_CATALOG: [TokenSpec; 4] = [
    NATIVE_TOKEN,
    TokenSpec {
        symbol: "USDC",
        name: "USD Coin",
        address: address!("0x1234567890123456789012345678901234567890"),
        decimals: 6,
        price: 1.0,
        color: TokenColor::Green,
    },
    TokenSpec {
        symbol: "WBTC",
        name: "Wrapped Bitcoin",
        address: address!("0x2345678901234567890123456789012345678901"),
        decimals: 8,
        price: 95000.0,
        color: TokenColor::Orange,
    },
    TokenSpec {
        symbol: "ARB",
        name: "Arbitrum",
        address: address!("0x3456789012345678901234567890123456789012"),
        decimals: 18,
        price: 0.85,
        color: TokenColor::Purple,
    },
];

/// A token balance as shown on screen. Rebuilt from scratch on every refresh.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub symbol: String,
    pub name: String,
    pub address: Address,
    /// Human readable decimal amount, already scaled by `decimals`
    pub balance: String,
    pub usd_value: f64,
    pub price: f64,
    pub decimals: u8,
    pub color: TokenColor,
}

impl TokenRecord {
    pub fn new(spec: &TokenSpec, balance: String) -> crate::Result<Self> {
        let usd_value = balance.parse::<f64>()? * spec.price;

        Ok(Self {
            symbol: spec.symbol.to_string(),
            name: spec.name.to_string(),
            address: spec.address,
            balance,
            usd_value,
            price: spec.price,
            decimals: spec.decimals,
            color: spec.color,
        })
    }
}

impl Display for TokenRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.balance, self.symbol)
    }
}

pub fn total_value(tokens: &[TokenRecord]) -> f64 {
    tokens.iter().map(|token| token.usd_value).sum()
}

/// Token with the highest USD value; the earliest one wins a tie.
pub fn largest_holding(tokens: &[TokenRecord]) -> Option<&TokenRecord> {
    tokens.iter().reduce(|max, token| {
        if token.usd_value > max.usd_value {
            token
        } else {
            max
        }
    })
}

/// Share of the largest holding in percent. Only defined for a positive total.
pub fn concentration(tokens: &[TokenRecord]) -> Option<f64> {
    let total = total_value(tokens);
    if total > 0.0 {
        largest_holding(tokens).map(|largest| largest.usd_value / total * 100.0)
    } else {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AllocationSlice {
    pub symbol: String,
    pub color: TokenColor,
    pub percent: f64,
}

pub fn allocation(tokens: &[TokenRecord]) -> Vec<AllocationSlice> {
    let total = total_value(tokens);
    tokens
        .iter()
        .map(|token| AllocationSlice {
            symbol: token.symbol.clone(),
            color: token.color,
            percent: if total > 0.0 {
                token.usd_value / total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: usize, balance: &str) -> TokenRecord {
        TokenRecord::new(&TOKEN_CATALOG[index], balance.to_string()).unwrap()
    }

    #[test]
    fn usd_value_is_balance_times_price() {
        let eth = record(0, "1.5");
        assert_eq!(eth.usd_value, 4800.0);
        let arb = record(3, "100");
        assert_eq!(arb.usd_value, 85.0);
        assert!(TokenRecord::new(&TOKEN_CATALOG[1], "abc".to_string()).is_err());
    }

    #[test]
    fn catalog_starts_with_native_asset() {
        assert!(TOKEN_CATALOG[0].is_native());
        assert!(TOKEN_CATALOG[1..].iter().all(|t| !t.is_native()));
    }

    #[test]
    fn summary_figures() {
        let tokens = vec![record(0, "1"), record(1, "100"), record(2, "0.01")];
        assert!((total_value(&tokens) - 4250.0).abs() < 1e-9);
        assert_eq!(largest_holding(&tokens).map(|t| t.symbol.as_str()), Some("ETH"));

        let concentration = concentration(&tokens).unwrap();
        assert!((concentration - 3200.0 / 4250.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn largest_holding_prefers_first_on_tie() {
        let tokens = vec![record(1, "100"), record(1, "100")];
        let largest = largest_holding(&tokens).unwrap();
        assert!(std::ptr::eq(largest, &tokens[0]));
        assert!(largest_holding(&[]).is_none());
    }

    #[test]
    fn allocation_sums_to_hundred() {
        let tokens = vec![record(0, "2"), record(1, "100"), record(3, "100")];
        let slices = allocation(&tokens);
        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn allocation_is_zero_without_value() {
        let tokens = vec![record(0, "0")];
        assert_eq!(allocation(&tokens)[0].percent, 0.0);
        assert_eq!(concentration(&tokens), None);
    }
}
