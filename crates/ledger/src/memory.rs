//! In-memory client, standing in for a node in tests.
//!
//! Big map entries are indexed by the packed key, like a node indexes them by
//! the key's hash, so a lookup with the wrong key type misses.
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auction_testkit_micheline::{pack, Address, Micheline, Ty};
use num_bigint::BigInt;
use tokio::sync::RwLock;

use crate::balance::fa2_balance;
use crate::client::{BalanceOfRequest, BalanceOfView, BigMapId, BigMapProvider, LedgerContract};
use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct MemoryProvider {
    big_maps: RwLock<HashMap<(BigMapId, Vec<u8>), Micheline>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(
        &self,
        id: BigMapId,
        key: &Micheline,
        key_type: &Ty,
        value: Micheline,
    ) -> Result<()> {
        let packed = pack(key, key_type)?;
        self.big_maps.write().await.insert((id, packed), value);
        Ok(())
    }

    pub async fn remove(
        &self,
        id: BigMapId,
        key: &Micheline,
        key_type: &Ty,
    ) -> Result<Option<Micheline>> {
        let packed = pack(key, key_type)?;
        Ok(self.big_maps.write().await.remove(&(id, packed)))
    }

    /// Adds `amount` to the integer stored at `key`, a missing entry
    /// counting as zero.
    pub async fn credit(
        &self,
        id: BigMapId,
        key: &Micheline,
        key_type: &Ty,
        amount: impl Into<BigInt>,
    ) -> Result<BigInt> {
        let packed = pack(key, key_type)?;
        let mut big_maps = self.big_maps.write().await;

        let current = match big_maps.get(&(id, packed.clone())) {
            None => BigInt::default(),
            Some(Micheline::Int(v)) => v.clone(),
            Some(other) => return Err(Error::UnexpectedValue(other.to_string())),
        };

        let amount: BigInt = amount.into();
        let balance = current + amount;
        big_maps.insert((id, packed), Micheline::Int(balance.clone()));

        Ok(balance)
    }
}

#[async_trait]
impl BigMapProvider for MemoryProvider {
    async fn big_map_get(
        &self,
        id: BigMapId,
        key: &Micheline,
        key_type: &Ty,
    ) -> Result<Option<Micheline>> {
        let packed = pack(key, key_type)?;
        Ok(self.big_maps.read().await.get(&(id, packed)).cloned())
    }
}

/// A token contract whose ledger lives in a [`MemoryProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryContract {
    pub address: Address,
    pub ledger: BigMapId,
}

impl MemoryContract {
    pub fn new(address: impl Into<Address>, ledger: BigMapId) -> Self {
        Self {
            address: address.into(),
            ledger,
        }
    }
}

#[async_trait]
impl LedgerContract for MemoryContract {
    fn address(&self) -> &Address {
        &self.address
    }

    async fn ledger(&self) -> Result<BigMapId> {
        Ok(self.ledger)
    }
}

/// Balance view answering from the FA2 ledgers of a [`MemoryProvider`].
#[derive(Debug)]
pub struct MemoryBalanceView {
    provider: Arc<MemoryProvider>,
    contracts: Vec<MemoryContract>,
    stored: RwLock<BigInt>,
}

impl MemoryBalanceView {
    pub fn new(provider: Arc<MemoryProvider>, contracts: Vec<MemoryContract>) -> Self {
        Self {
            provider,
            contracts,
            stored: RwLock::new(BigInt::default()),
        }
    }
}

#[async_trait]
impl BalanceOfView for MemoryBalanceView {
    async fn exec_balance_of(&self, request: &BalanceOfRequest) -> Result<()> {
        let contract = self
            .contracts
            .iter()
            .find(|c| c.address() == &request.fa2)
            .ok_or_else(|| {
                Error::Provider(format!("Unknown FA2 contract {}", request.fa2).into())
            })?;

        let balance = fa2_balance(
            self.provider.as_ref(),
            contract,
            request.token_id,
            &request.owner,
        )
        .await?;

        *self.stored.write().await = balance;
        Ok(())
    }

    async fn stored_balance(&self) -> Result<BigInt> {
        Ok(self.stored.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_testkit_micheline::{int, string};

    const ALICE: &str = "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK";

    #[tokio::test]
    async fn test_insert_get_remove() {
        let provider = MemoryProvider::new();
        let key = string(ALICE);

        provider
            .insert(BigMapId(1), &key, &Ty::Address, int(10))
            .await
            .unwrap();

        assert_eq!(
            provider
                .big_map_get(BigMapId(1), &key, &Ty::Address)
                .await
                .unwrap(),
            Some(int(10))
        );
        assert_eq!(
            provider
                .big_map_get(BigMapId(2), &key, &Ty::Address)
                .await
                .unwrap(),
            None
        );

        // Packed as a string, the key does not match the address entry.
        assert_eq!(
            provider
                .big_map_get(BigMapId(1), &key, &Ty::String)
                .await
                .unwrap(),
            None
        );

        assert_eq!(
            provider
                .remove(BigMapId(1), &key, &Ty::Address)
                .await
                .unwrap(),
            Some(int(10))
        );
        assert_eq!(
            provider
                .big_map_get(BigMapId(1), &key, &Ty::Address)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_credit() {
        let provider = MemoryProvider::new();
        let key = string(ALICE);

        assert_eq!(
            provider
                .credit(BigMapId(0), &key, &Ty::Address, 5)
                .await
                .unwrap(),
            BigInt::from(5)
        );
        assert_eq!(
            provider
                .credit(BigMapId(0), &key, &Ty::Address, -2)
                .await
                .unwrap(),
            BigInt::from(3)
        );
    }

    #[tokio::test]
    async fn test_invalid_key() {
        let provider = MemoryProvider::new();
        let result = provider
            .big_map_get(BigMapId(0), &string("tz1-nope"), &Ty::Address)
            .await;

        assert!(matches!(result, Err(Error::Micheline(_))));
    }
}
