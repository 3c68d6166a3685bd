//! Assembles the token list shown on the dashboard.
//!
//! Only the native balance is read from chain. Other tokens come from a
//! [`TokenBalanceSource`], which by default answers with a fixed placeholder.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    sync::Arc,
};

use alloy::{
    primitives::{utils::format_units, Address, U256},
    providers::Provider,
};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::{
    alloy::StringExt,
    tokens::{TokenRecord, TokenSpec, NATIVE_TOKEN, TOKEN_CATALOG},
};

pub const PLACEHOLDER_BALANCE: &str = "100";

/// How non-native balances are requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    #[default]
    Batched,
    Individual,
}

impl FetchMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Batched => Self::Individual,
            Self::Individual => Self::Batched,
        }
    }
}

impl Display for FetchMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Batched => write!(f, "Batched"),
            Self::Individual => write!(f, "Individual"),
        }
    }
}

/// Native asset balance of a wallet, in base units.
#[async_trait]
pub trait BalanceOracle: Send + Sync {
    async fn native_balance(&self, owner: Address) -> crate::Result<Option<U256>>;
}

/// Balances of the non-native tokens, one decimal string per token in order.
#[async_trait]
pub trait TokenBalanceSource: Send + Sync {
    async fn balances(
        &self,
        owner: Address,
        tokens: &[TokenSpec],
        mode: FetchMode,
    ) -> crate::Result<Vec<String>>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeployedContract {
    pub name: String,
    pub address: Address,
}

pub trait ContractRegistry: Send + Sync {
    fn deployed_contract(&self, name: &str) -> Option<DeployedContract>;
}

/// Reads the native balance with `eth_getBalance` over HTTP.
pub struct RpcBalanceOracle {
    rpc_url: String,
}

impl RpcBalanceOracle {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
        }
    }
}

#[async_trait]
impl BalanceOracle for RpcBalanceOracle {
    async fn native_balance(&self, owner: Address) -> crate::Result<Option<U256>> {
        let provider = self.rpc_url.to_alloy_provider()?;
        let balance = provider.get_balance(owner).await.map_err(|error| {
            crate::Error::NativeBalanceFetchFailed {
                address: owner,
                rpc_url: self.rpc_url.clone(),
                error: Box::new(error),
            }
        })?;
        Ok(Some(balance))
    }
}

/// Answers [`PLACEHOLDER_BALANCE`] for every token.
#[derive(Default)]
pub struct PlaceholderBalances;

#[async_trait]
impl TokenBalanceSource for PlaceholderBalances {
    async fn balances(
        &self,
        _owner: Address,
        tokens: &[TokenSpec],
        _mode: FetchMode,
    ) -> crate::Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|_| PLACEHOLDER_BALANCE.to_string())
            .collect())
    }
}

/// Contract registry backed by the `contracts` table of the config file.
#[derive(Clone, Debug, Default)]
pub struct ConfigContracts {
    contracts: BTreeMap<String, Address>,
}

impl ConfigContracts {
    pub fn new(contracts: BTreeMap<String, Address>) -> Self {
        Self { contracts }
    }
}

impl ContractRegistry for ConfigContracts {
    fn deployed_contract(&self, name: &str) -> Option<DeployedContract> {
        self.contracts.get(name).map(|address| DeployedContract {
            name: name.to_string(),
            address: *address,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoAddress,
    ContractUnresolved,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoAddress => write!(f, "no wallet address connected"),
            Self::ContractUnresolved => write!(f, "contract info not resolved"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Skipped(SkipReason),
    Fetched(Vec<TokenRecord>),
}

#[derive(Clone)]
pub struct BalanceFetcher {
    oracle: Arc<dyn BalanceOracle>,
    registry: Arc<dyn ContractRegistry>,
    token_balances: Arc<dyn TokenBalanceSource>,
    contract_name: String,
}

impl BalanceFetcher {
    pub fn new(
        oracle: Arc<dyn BalanceOracle>,
        registry: Arc<dyn ContractRegistry>,
        contract_name: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            registry,
            token_balances: Arc::new(PlaceholderBalances),
            contract_name: contract_name.into(),
        }
    }

    pub fn with_token_balances(mut self, token_balances: Arc<dyn TokenBalanceSource>) -> Self {
        self.token_balances = token_balances;
        self
    }

    pub fn contract(&self) -> Option<DeployedContract> {
        self.registry.deployed_contract(&self.contract_name)
    }

    pub async fn fetch(
        &self,
        address: Option<Address>,
        mode: FetchMode,
    ) -> crate::Result<FetchOutcome> {
        let Some(owner) = address else {
            info!("skipping balance fetch: {}", SkipReason::NoAddress);
            return Ok(FetchOutcome::Skipped(SkipReason::NoAddress));
        };

        if self.contract().is_none() {
            info!(
                contract = %self.contract_name,
                "skipping balance fetch: {}",
                SkipReason::ContractUnresolved
            );
            return Ok(FetchOutcome::Skipped(SkipReason::ContractUnresolved));
        }

        let mut tokens = Vec::with_capacity(TOKEN_CATALOG.len());

        let native = match self.oracle.native_balance(owner).await? {
            Some(value) => format_base_units(value, NATIVE_TOKEN.decimals)?,
            None => "0".to_string(),
        };
        tokens.push(TokenRecord::new(&NATIVE_TOKEN, native)?);

        let others: Vec<TokenSpec> = TOKEN_CATALOG
            .iter()
            .filter(|spec| !spec.is_native())
            .copied()
            .collect();
        let balances = self.token_balances.balances(owner, &others, mode).await?;
        if balances.len() != others.len() {
            return Err(crate::Error::TokenBalanceCountMismatch {
                expected: others.len(),
                got: balances.len(),
            });
        }
        for (spec, balance) in others.iter().zip(balances) {
            tokens.push(TokenRecord::new(spec, balance)?);
        }

        debug!(%owner, %mode, count = tokens.len(), "fetched token balances");

        Ok(FetchOutcome::Fetched(tokens))
    }
}

/// Converts base units to a decimal string without trailing zeros, `1.5`
/// rather than `1.500000000000000000`.
pub fn format_base_units(value: U256, decimals: u8) -> crate::Result<String> {
    let formatted =
        format_units(value, decimals).map_err(|error| crate::Error::UnitsConversion {
            value: value.to_string(),
            decimals,
            error,
        })?;

    if formatted.contains('.') {
        Ok(formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string())
    } else {
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use alloy::primitives::address;

    use super::*;

    const OWNER: Address = address!("0x00000000000000000000000000000000000000aa");
    const CONTRACT: Address = address!("0x00000000000000000000000000000000000000bb");

    struct FixedOracle {
        balance: Option<U256>,
        calls: AtomicUsize,
    }

    impl FixedOracle {
        fn new(balance: Option<U256>) -> Arc<Self> {
            Arc::new(Self {
                balance,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl BalanceOracle for FixedOracle {
        async fn native_balance(&self, _owner: Address) -> crate::Result<Option<U256>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.balance)
        }
    }

    struct ShortSource;

    #[async_trait]
    impl TokenBalanceSource for ShortSource {
        async fn balances(
            &self,
            _owner: Address,
            _tokens: &[TokenSpec],
            _mode: FetchMode,
        ) -> crate::Result<Vec<String>> {
            Ok(vec!["1".to_string()])
        }
    }

    fn registry() -> Arc<ConfigContracts> {
        Arc::new(ConfigContracts::new(BTreeMap::from([(
            "your-contract".to_string(),
            CONTRACT,
        )])))
    }

    fn eth(amount_wei: u128) -> Option<U256> {
        Some(U256::from(amount_wei))
    }

    #[tokio::test]
    async fn skips_without_address() {
        let oracle = FixedOracle::new(eth(1));
        let fetcher = BalanceFetcher::new(oracle.clone(), registry(), "your-contract");

        let outcome = fetcher.fetch(None, FetchMode::Batched).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Skipped(SkipReason::NoAddress));
        assert_eq!(oracle.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn skips_when_contract_unresolved() {
        let oracle = FixedOracle::new(eth(1));
        let fetcher = BalanceFetcher::new(oracle.clone(), registry(), "other-contract");

        let outcome = fetcher.fetch(Some(OWNER), FetchMode::Batched).await.unwrap();

        assert_eq!(outcome, FetchOutcome::Skipped(SkipReason::ContractUnresolved));
        assert_eq!(oracle.calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn builds_native_and_placeholder_records() {
        let fetcher = BalanceFetcher::new(
            FixedOracle::new(eth(1_500_000_000_000_000_000)),
            registry(),
            "your-contract",
        );

        let FetchOutcome::Fetched(tokens) =
            fetcher.fetch(Some(OWNER), FetchMode::Batched).await.unwrap()
        else {
            panic!("expected fetched tokens");
        };

        let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "USDC", "WBTC", "ARB"]);

        assert_eq!(tokens[0].balance, "1.5");
        assert_eq!(tokens[0].usd_value, 4800.0);
        assert_eq!(tokens[0].address, Address::ZERO);

        for token in &tokens[1..] {
            assert_eq!(token.balance, PLACEHOLDER_BALANCE);
            assert_eq!(token.usd_value, 100.0 * token.price);
        }
    }

    #[tokio::test]
    async fn missing_native_balance_is_zero() {
        let fetcher =
            BalanceFetcher::new(FixedOracle::new(None), registry(), "your-contract");

        let FetchOutcome::Fetched(tokens) =
            fetcher.fetch(Some(OWNER), FetchMode::Individual).await.unwrap()
        else {
            panic!("expected fetched tokens");
        };

        assert_eq!(tokens[0].balance, "0");
        assert_eq!(tokens[0].usd_value, 0.0);
    }

    #[tokio::test]
    async fn mismatched_balance_count_is_an_error() {
        let fetcher = BalanceFetcher::new(FixedOracle::new(eth(0)), registry(), "your-contract")
            .with_token_balances(Arc::new(ShortSource));

        let result = fetcher.fetch(Some(OWNER), FetchMode::Batched).await;

        assert!(matches!(
            result,
            Err(crate::Error::TokenBalanceCountMismatch {
                expected: 3,
                got: 1
            })
        ));
    }

    #[test]
    fn base_units_drop_trailing_zeros() {
        assert_eq!(format_base_units(U256::from(0u8), 18).unwrap(), "0");
        assert_eq!(
            format_base_units(U256::from(2_000_000_000_000_000_000u128), 18).unwrap(),
            "2"
        );
        assert_eq!(format_base_units(U256::from(1_250_000u64), 6).unwrap(), "1.25");
    }
}
