use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, UtilsError>;

#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    #[error(transparent)]
    ParseFloatError(#[from] std::num::ParseFloatError),

    #[error("Address '{0}' is not a valid Ethereum address.")]
    InvalidAddress(String),

    #[error("Failed to parse URL: {0}. (Error: {1:?})")]
    UrlParsingFailed(String, url::ParseError),

    #[error("Current account is not set. Pass --address or set current_account in the config.")]
    CurrentAccountNotSet,

    #[error("Failed to get base directories.")]
    BaseDirsFailed,

    #[error("Failed to create directory: {0:?}. (Error: {1:?})")]
    CreateDirAllFailed(PathBuf, std::io::Error),

    #[error("Failed to read the file: {0}. (Error: {1:?})")]
    FileReadFailed(PathBuf, std::io::Error),

    #[error("Failed to write to the file: {0}. (Error: {1:?})")]
    FileWriteFailed(PathBuf, std::io::Error),

    #[error("Failed to open the log file: {0}. (Error: {1:?})")]
    LogFileOpenFailed(PathBuf, std::io::Error),

    #[error("Parsing the toml file failed: {0}. (Error: {1:?})")]
    TomlParsingFailed(PathBuf, toml::de::Error),

    #[error("Formatting to toml format failed: {0}. (Error: {1:?})")]
    TomlFormattingFailed(String, toml::ser::Error),

    #[error("Refresh interval of {0} seconds is not supported. Use one of 5, 10, 30, 60, 300.")]
    UnsupportedRefreshInterval(u64),

    #[error("Failed to convert {value} base units with {decimals} decimals. (Error: {error})")]
    UnitsConversion {
        value: String,
        decimals: u8,
        error: alloy::primitives::utils::UnitsError,
    },

    #[error("Failed to fetch native balance for {address} from {rpc_url}. (Error: {error})")]
    NativeBalanceFetchFailed {
        address: alloy::primitives::Address,
        rpc_url: String,
        error: Box<alloy::transports::RpcError<alloy::transports::TransportErrorKind>>,
    },

    #[error("Token balance source returned {got} balances for {expected} tokens.")]
    TokenBalanceCountMismatch { expected: usize, got: usize },

    #[error("Comparison strategy '{0}' is unknown. Use 'range' or 'delay'.")]
    UnknownComparisonStrategy(String),

    #[error("Failed to install the log subscriber. (Error: {0})")]
    LogInitFailed(String),
}

impl UtilsError {
    pub fn is_connect(&self) -> bool {
        match self {
            Self::NativeBalanceFetchFailed { error, .. } => error.is_transport_error(),
            _ => false,
        }
    }
}
