//! Auction testkit crate.
//!
//! Parameter builders and ledger assertions used by the test suites of the
//! Tezos auction contracts.

pub mod micheline {
    pub use auction_testkit_micheline::*;
}

pub mod micheline_derive;

pub mod params {
    pub use auction_testkit_params::*;
}

pub mod ledger {
    pub use auction_testkit_ledger::*;
}

pub mod contract_errors;
