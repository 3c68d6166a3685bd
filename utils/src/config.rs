use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{disk_storage::DiskStorageInterface, scheduler::RefreshInterval};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8547";
pub const DEFAULT_CONTRACT_NAME: &str = "your-contract";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub current_account: Option<Address>,
    pub rpc_url: String,
    /// Contract that must be deployed before balances are fetched
    pub contract_name: String,
    /// Interval preselected when auto-refresh is switched on
    pub default_refresh_interval: RefreshInterval,
    pub theme_name: String,
    /// Deployed contracts by name
    pub contracts: BTreeMap<String, Address>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_account: None,
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_name: DEFAULT_CONTRACT_NAME.to_string(),
            default_refresh_interval: RefreshInterval::default(),
            theme_name: default_theme_name(),
            contracts: BTreeMap::new(),
        }
    }
}

fn default_theme_name() -> String {
    "Monochrome".to_string()
}

impl DiskStorageInterface for Config {
    const FILE_NAME: &'static str = "config";
}

impl Config {
    pub fn get_current_account(&self) -> crate::Result<Address> {
        self.current_account.ok_or(crate::Error::CurrentAccountNotSet)
    }

    pub fn get_theme_name(&self) -> &str {
        &self.theme_name
    }

    /// Command line values take precedence over the file.
    pub fn with_overrides(mut self, address: Option<Address>, rpc_url: Option<String>) -> Self {
        if address.is_some() {
            self.current_account = address;
        }
        if let Some(rpc_url) = rpc_url {
            self.rpc_url = rpc_url;
        }
        self
    }
}
