//! Ledger balance readers and balance-delta assertions.
//!
//! The blockchain client is abstracted behind [`BigMapProvider`],
//! [`LedgerContract`] and [`BalanceOfView`]. [`memory`] provides an
//! in-memory implementation for tests.
mod error;
pub use error::{Error, Result};

pub mod balance;
pub mod client;
pub mod config;
pub mod memory;

pub use balance::{
    big_map_balance, check_fa2_balance_via_view, fa12_balance, fa2_balance, BalanceChecker,
};
pub use client::{BalanceOfRequest, BalanceOfView, BigMapId, BigMapProvider, LedgerContract};
pub use config::{is_sandbox, Account, Accounts, TestConfig, SANDBOX_ENDPOINT};
