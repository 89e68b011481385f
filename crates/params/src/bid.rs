//! Bid placement parameters.
use auction_testkit_micheline::{Address, Micheline, ToMicheline};
use auction_testkit_micheline_derive::ToMicheline;
use serde::{Deserialize, Serialize};

use crate::Part;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub asset_contract: Address,
    pub asset_id: u64,
    #[serde(default)]
    pub payouts: Vec<Part>,
    #[serde(default)]
    pub origin_fees: Vec<Part>,
    pub amount: u128,
    pub bidder: Address,
}

#[derive(ToMicheline)]
struct BidParameter<'a> {
    asset_contract: &'a Address,
    asset_id: u64,
    payouts: &'a [Part],
    origin_fees: &'a [Part],
    amount: u128,
    bidder: &'a Address,
    data_type: Option<Micheline>,
    data: Option<Micheline>,
}

/// Parameter of the auction contracts' `put_bid` entry point.
pub fn mk_bid(bid: &Bid) -> Micheline {
    let parameter = BidParameter {
        asset_contract: &bid.asset_contract,
        asset_id: bid.asset_id,
        payouts: &bid.payouts,
        origin_fees: &bid.origin_fees,
        amount: bid.amount,
        bidder: &bid.bidder,
        data_type: None,
        data: None,
    }
    .to_micheline();

    tracing::trace!("Bid parameter: {}", parameter);

    parameter
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_testkit_micheline::{int, none, pair, seq, string};

    const ALICE: &str = "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK";
    const CAROL: &str = "tz3bykpM4bNiuPf1SFrAjpUAji8DhAPKtwyG";
    const NFT: &str = "KT1HjccLxwDJL9b5xUtX71QtRRo8eUkYUKkw";

    #[test]
    fn test_mk_bid() {
        let bid = Bid {
            asset_contract: Address::new(NFT),
            asset_id: 7,
            payouts: vec![Part::new(CAROL, 10_000)],
            origin_fees: vec![],
            amount: 250,
            bidder: Address::new(CAROL),
        };

        assert_eq!(
            mk_bid(&bid),
            pair(
                string(NFT),
                pair(
                    int(7),
                    pair(
                        seq(vec![pair(string(CAROL), int(10_000))]),
                        pair(
                            seq(vec![]),
                            pair(int(250), pair(string(CAROL), pair(none(), none())))
                        )
                    )
                )
            )
        );
    }

    #[test]
    fn test_bid_json() {
        let bid: Bid = serde_json::from_str(
            r#"{
                "asset_contract": "KT1HjccLxwDJL9b5xUtX71QtRRo8eUkYUKkw",
                "asset_id": 1,
                "amount": 340282366920938463463374607431768211455,
                "bidder": "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK"
            }"#,
        )
        .unwrap();

        assert_eq!(bid.amount, u128::MAX);
        assert!(bid.payouts.is_empty());

        let items = mk_bid(&bid).comb_items().into_iter().cloned().collect::<Vec<_>>();
        assert_eq!(items.len(), 8);
        assert_eq!(items[4], int(u128::MAX));
        assert_eq!(items[5], string(ALICE));
    }
}
