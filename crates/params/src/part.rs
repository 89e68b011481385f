//! Payout and origin-fee shares.
use auction_testkit_micheline::{Address, Micheline, ToMicheline};
use auction_testkit_micheline_derive::ToMicheline;
use serde::{Deserialize, Serialize};

/// A share of an amount owed to an account, in basis points of the total.
///
/// Encoded as `Pair "<account>" <value>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToMicheline)]
pub struct Part {
    pub account: Address,
    pub value: u64,
}

impl Part {
    pub fn new(account: impl Into<Address>, value: u64) -> Self {
        Self {
            account: account.into(),
            value,
        }
    }
}

pub fn mk_part(account: &Address, value: u64) -> Micheline {
    (account, value).to_micheline()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_testkit_micheline::{int, pair, seq, string};

    const ALICE: &str = "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK";

    #[test]
    fn test_mk_part() {
        assert_eq!(
            mk_part(&Address::new(ALICE), 250),
            pair(string(ALICE), int(250))
        );
    }

    #[test]
    fn test_part_list() {
        let parts = vec![Part::new(ALICE, 100), Part::new(ALICE, 50)];
        assert_eq!(
            parts.to_micheline(),
            seq(vec![
                pair(string(ALICE), int(100)),
                pair(string(ALICE), int(50)),
            ])
        );
    }
}
