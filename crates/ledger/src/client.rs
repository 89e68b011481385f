//! Seams towards the blockchain client.
//!
//! The test suites run against a node through an external client library.
//! These traits describe the few calls the ledger helpers need from it.
use async_trait::async_trait;
use auction_testkit_micheline::{Address, Micheline, Ty};
use auction_testkit_micheline_derive::ToMicheline;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Identifier of a big map, as found in a contract's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BigMapId(pub i64);

impl std::fmt::Display for BigMapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[async_trait]
pub trait BigMapProvider: Send + Sync {
    /// Looks up `key` in the big map `id`.
    ///
    /// The key is packed with `key_type` to compute its hash, so the type
    /// must match the big map's key type. A missing key is `Ok(None)`.
    async fn big_map_get(
        &self,
        id: BigMapId,
        key: &Micheline,
        key_type: &Ty,
    ) -> Result<Option<Micheline>>;
}

/// A token contract whose storage holds a `ledger` big map.
#[async_trait]
pub trait LedgerContract: Send + Sync {
    fn address(&self) -> &Address;

    /// Reads the storage and returns the id of its `ledger` big map.
    async fn ledger(&self) -> Result<BigMapId>;
}

/// Argument of the `balance_of` entry point of a balance view contract.
///
/// Encoded as `Pair "<fa2>" (Pair "<owner>" <token_id>)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToMicheline)]
pub struct BalanceOfRequest {
    pub fa2: Address,
    pub owner: Address,
    pub token_id: u64,
}

/// A proxy contract that queries an FA2 `balance_of` and stores the answer.
#[async_trait]
pub trait BalanceOfView: Send + Sync {
    async fn exec_balance_of(&self, request: &BalanceOfRequest) -> Result<()>;

    /// The balance stored by the last `balance_of` call.
    async fn stored_balance(&self) -> Result<BigInt>;
}
