//! Ledger balance reads and balance-delta assertions.
use std::future::Future;

use auction_testkit_micheline::{int, pair, Address, Micheline, ToMicheline, Ty};
use num_bigint::BigInt;

use crate::client::{BalanceOfRequest, BalanceOfView, BigMapId, BigMapProvider, LedgerContract};
use crate::config::Accounts;
use crate::{Error, Result};

/// Reads an integer entry of a big map. A missing entry is a zero balance.
pub async fn big_map_balance<P>(
    provider: &P,
    id: BigMapId,
    key: &Micheline,
    key_type: &Ty,
) -> Result<BigInt>
where
    P: BigMapProvider + ?Sized,
{
    let balance = match provider.big_map_get(id, key, key_type).await? {
        None => BigInt::default(),
        Some(value) => value
            .as_int()
            .cloned()
            .ok_or_else(|| Error::UnexpectedValue(value.to_string()))?,
    };

    tracing::debug!("Big map {id} at {key}: {balance}");

    Ok(balance)
}

/// Balance of `holder` in an FA1.2 ledger, keyed by `address`.
pub async fn fa12_balance<P, C>(provider: &P, contract: &C, holder: &Address) -> Result<BigInt>
where
    P: BigMapProvider + ?Sized,
    C: LedgerContract + ?Sized,
{
    let id = contract.ledger().await?;
    big_map_balance(provider, id, &holder.to_micheline(), &Ty::Address).await
}

/// Balance of `holder` for `token_id` in an FA2 ledger, keyed by
/// `pair nat address`.
pub async fn fa2_balance<P, C>(
    provider: &P,
    contract: &C,
    token_id: u64,
    holder: &Address,
) -> Result<BigInt>
where
    P: BigMapProvider + ?Sized,
    C: LedgerContract + ?Sized,
{
    let id = contract.ledger().await?;
    let key = pair(int(token_id), holder.to_micheline());

    big_map_balance(provider, id, &key, &Ty::pair(Ty::Nat, Ty::Address)).await
}

/// Checks ledger balance changes around an action.
///
/// Each check reads the balance, runs the action, reads the balance again
/// and compares the difference with the expected delta. Holders are named
/// after the configured accounts in failure messages.
pub struct BalanceChecker<'a, P: ?Sized> {
    provider: &'a P,
    accounts: &'a Accounts,
}

impl<'a, P> BalanceChecker<'a, P>
where
    P: BigMapProvider + ?Sized,
{
    pub fn new(provider: &'a P, accounts: &'a Accounts) -> Self {
        Self { provider, accounts }
    }

    /// Runs `action` and checks that the FA1.2 balance of `holder` changed
    /// by `expected`. Returns the action's output.
    pub async fn check_fa12_balance<C, F, Fut, T, E>(
        &self,
        contract: &C,
        holder: &Address,
        expected: impl Into<BigInt>,
        action: F,
    ) -> Result<T>
    where
        C: LedgerContract + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = core::result::Result<T, E>>,
        Error: From<E>,
    {
        let expected = expected.into();

        let before = fa12_balance(self.provider, contract, holder).await?;
        let output = action().await?;
        let after = fa12_balance(self.provider, contract, holder).await?;

        let delta = after - before;
        if delta != expected {
            return Err(Error::InvalidDelta {
                delta,
                holder: self.accounts.display_name(holder),
            });
        }

        Ok(output)
    }

    /// Runs `action` and checks that the FA2 balance of `holder` for
    /// `token_id` changed by `expected`. Returns the action's output.
    pub async fn check_fa2_balance<C, F, Fut, T, E>(
        &self,
        contract: &C,
        token_id: u64,
        holder: &Address,
        expected: impl Into<BigInt>,
        action: F,
    ) -> Result<T>
    where
        C: LedgerContract + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future<Output = core::result::Result<T, E>>,
        Error: From<E>,
    {
        let expected = expected.into();

        let before = fa2_balance(self.provider, contract, token_id, holder).await?;
        let output = action().await?;
        let after = fa2_balance(self.provider, contract, token_id, holder).await?;

        let delta = after - before;
        if delta != expected {
            return Err(Error::InvalidTokenDelta {
                delta,
                token: token_id,
                holder: self.accounts.display_name(holder),
            });
        }

        Ok(output)
    }
}

/// Asks the balance view for the FA2 balance of `owner` and checks it
/// equals `expected`.
pub async fn check_fa2_balance_via_view<V>(
    view: &V,
    fa2: &Address,
    owner: &Address,
    token_id: u64,
    expected: impl Into<BigInt>,
) -> Result<()>
where
    V: BalanceOfView + ?Sized,
{
    let expected = expected.into();
    let request = BalanceOfRequest {
        fa2: fa2.clone(),
        owner: owner.clone(),
        token_id,
    };

    tracing::trace!("balance_of request: {}", request.to_micheline());

    view.exec_balance_of(&request).await?;
    let got = view.stored_balance().await?;

    if got != expected {
        return Err(Error::InvalidBalance { expected, got });
    }

    Ok(())
}
