//! Test configuration: the node endpoint and the named test accounts.
use auction_testkit_micheline::Address;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// Endpoint of a local sandbox node.
pub const SANDBOX_ENDPOINT: &str = "http://localhost:8732";

/// Whether `endpoint` is the local sandbox node.
///
/// Exact comparison: `http://localhost:8732/` or `http://127.0.0.1:8732`
/// are not considered sandboxes.
pub fn is_sandbox(endpoint: &str) -> bool {
    endpoint == SANDBOX_ENDPOINT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub pkh: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accounts(pub Vec<Account>);

impl Accounts {
    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.0.iter().find(|a| &a.pkh == address)
    }

    /// Name of the account owning `address`, or the address itself if no
    /// configured account matches.
    pub fn display_name(&self, address: &Address) -> String {
        self.get(address)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| address.to_string())
    }
}

impl From<Vec<Account>> for Accounts {
    fn from(accounts: Vec<Account>) -> Self {
        Self(accounts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Node RPC endpoint, kept as written.
    pub endpoint: String,
    #[serde(default)]
    pub accounts: Accounts,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            endpoint: SANDBOX_ENDPOINT.to_string(),
            accounts: Accounts::default(),
        }
    }
}

impl TestConfig {
    /// Loads the configuration from a JSON file.
    pub fn from_json(path: &Utf8Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;

        config.endpoint_url()?;
        tracing::debug!(
            "Test configuration loaded from {path}: endpoint {}, {} accounts",
            config.endpoint,
            config.accounts.0.len()
        );

        Ok(config)
    }

    pub fn is_sandbox(&self) -> bool {
        is_sandbox(&self.endpoint)
    }

    /// The endpoint, parsed.
    pub fn endpoint_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.endpoint)?)
    }
}
