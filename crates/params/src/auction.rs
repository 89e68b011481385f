//! Auction creation parameters.
//!
//! Two layouts exist. The general auction contract takes the sold token as a
//! contract and an id, and the accepted asset as a kind code plus packed
//! bytes. The sell-side contracts take both assets as descriptors.
//! Both layouts end with the same terms, followed by two `None` placeholders
//! for the optional extra data.
use auction_testkit_micheline::{Address, Bytes, Micheline, ToMicheline};
use auction_testkit_micheline_derive::ToMicheline;
use serde::{Deserialize, Serialize};

use crate::asset::{
    mk_fa12_asset, mk_fungible_fa2_asset, mk_non_fungible_fa2_asset,
    mk_non_fungible_fa2_asset_missing_contract, mk_non_fungible_fa2_asset_missing_contract_and_id,
    mk_non_fungible_fa2_asset_missing_id, mk_xtz_asset, AssetDescriptor, AssetKind, BuyAsset,
};
use crate::{Part, Result, StartDate};

/// Terms shared by every auction layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionTerms {
    pub asset_qty: u128,
    pub seller: Address,
    #[serde(default)]
    pub start_date: StartDate,
    /// In seconds.
    pub duration: u64,
    pub min_price: u128,
    pub buy_out_price: u128,
    pub min_step: u128,
    #[serde(default)]
    pub payouts: Vec<Part>,
    #[serde(default)]
    pub origin_fees: Vec<Part>,
}

/// Auction on the general auction contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    pub sell_asset_contract: Address,
    pub sell_asset_id: u64,
    pub buy_asset: BuyAsset,
    pub terms: AuctionTerms,
}

/// Asset sold through a sell-side auction contract.
///
/// The `Missing*` variants produce incomplete descriptors, for checking
/// that the contracts reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SellAsset {
    Xtz,
    Fa12 { contract: Address },
    FungibleFa2 { contract: Address, token_id: u64 },
    NonFungibleFa2 { contract: Address, token_id: u64 },
    MissingFa2Contract { token_id: u64 },
    MissingFa2Id { contract: Address },
    MissingFa2ContractAndId,
}

impl SellAsset {
    pub fn descriptor(&self) -> Result<AssetDescriptor> {
        match self {
            SellAsset::Xtz => Ok(mk_xtz_asset()),
            SellAsset::Fa12 { contract } => mk_fa12_asset(contract),
            SellAsset::FungibleFa2 { contract, token_id } => {
                mk_fungible_fa2_asset(contract, *token_id)
            }
            SellAsset::NonFungibleFa2 { contract, token_id } => {
                Ok(mk_non_fungible_fa2_asset(contract, *token_id))
            }
            SellAsset::MissingFa2Contract { token_id } => {
                mk_non_fungible_fa2_asset_missing_contract(*token_id)
            }
            SellAsset::MissingFa2Id { contract } => mk_non_fungible_fa2_asset_missing_id(contract),
            SellAsset::MissingFa2ContractAndId => {
                mk_non_fungible_fa2_asset_missing_contract_and_id()
            }
        }
    }
}

/// Auction on one of the sell-side auction contracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellSideAuction {
    pub sell_asset: SellAsset,
    pub buy_asset: BuyAsset,
    pub terms: AuctionTerms,
}

/// Common tail of both layouts, from the seller onwards.
///
/// Always the last field of its parent, so its comb extends the parent's.
#[derive(ToMicheline)]
struct TermsTail<'a> {
    seller: &'a Address,
    start_date: StartDate,
    duration: u64,
    min_price: u128,
    buy_out_price: u128,
    min_step: u128,
    payouts: &'a [Part],
    origin_fees: &'a [Part],
    data_type: Option<Micheline>,
    data: Option<Micheline>,
}

impl<'a> From<&'a AuctionTerms> for TermsTail<'a> {
    fn from(terms: &'a AuctionTerms) -> Self {
        Self {
            seller: &terms.seller,
            start_date: terms.start_date,
            duration: terms.duration,
            min_price: terms.min_price,
            buy_out_price: terms.buy_out_price,
            min_step: terms.min_step,
            payouts: &terms.payouts,
            origin_fees: &terms.origin_fees,
            data_type: None,
            data: None,
        }
    }
}

#[derive(ToMicheline)]
struct AuctionParameter<'a> {
    sell_asset_contract: &'a Address,
    sell_asset_id: u64,
    asset_qty: u128,
    buy_asset_type: AssetKind,
    buy_asset: Bytes,
    tail: TermsTail<'a>,
}

#[derive(ToMicheline)]
struct SellSideAuctionParameter<'a> {
    sell_asset: AssetDescriptor,
    asset_qty: u128,
    buy_asset: AssetDescriptor,
    tail: TermsTail<'a>,
}

/// Parameter of the general auction contract's `auction` entry point.
pub fn mk_auction(auction: &Auction) -> Result<Micheline> {
    let parameter = AuctionParameter {
        sell_asset_contract: &auction.sell_asset_contract,
        sell_asset_id: auction.sell_asset_id,
        asset_qty: auction.terms.asset_qty,
        buy_asset_type: auction.buy_asset.kind(),
        buy_asset: Bytes(auction.buy_asset.descriptor()?.to_bytes()),
        tail: TermsTail::from(&auction.terms),
    }
    .to_micheline();

    tracing::trace!("Auction parameter: {}", parameter);

    Ok(parameter)
}

/// Parameter of a sell-side auction contract's `auction` entry point.
pub fn mk_sell_side_auction(auction: &SellSideAuction) -> Result<Micheline> {
    let parameter = SellSideAuctionParameter {
        sell_asset: auction.sell_asset.descriptor()?,
        asset_qty: auction.terms.asset_qty,
        buy_asset: auction.buy_asset.descriptor()?,
        tail: TermsTail::from(&auction.terms),
    }
    .to_micheline();

    tracing::trace!(
        "Sell-side auction parameter ({:?}): {}",
        auction.sell_asset,
        parameter
    );

    Ok(parameter)
}

fn sell_side(
    sell_asset: SellAsset,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    mk_sell_side_auction(&SellSideAuction {
        sell_asset,
        buy_asset: buy_asset.clone(),
        terms: terms.clone(),
    })
}

pub fn mk_xtz_auction(buy_asset: &BuyAsset, terms: &AuctionTerms) -> Result<Micheline> {
    sell_side(SellAsset::Xtz, buy_asset, terms)
}

pub fn mk_fa12_auction(
    sell_contract: &Address,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(
        SellAsset::Fa12 {
            contract: sell_contract.clone(),
        },
        buy_asset,
        terms,
    )
}

pub fn mk_fungible_fa2_auction(
    sell_contract: &Address,
    sell_token_id: u64,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(
        SellAsset::FungibleFa2 {
            contract: sell_contract.clone(),
            token_id: sell_token_id,
        },
        buy_asset,
        terms,
    )
}

pub fn mk_non_fungible_fa2_auction(
    sell_contract: &Address,
    sell_token_id: u64,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(
        SellAsset::NonFungibleFa2 {
            contract: sell_contract.clone(),
            token_id: sell_token_id,
        },
        buy_asset,
        terms,
    )
}

pub fn mk_auction_with_missing_fa2_asset_contract(
    sell_token_id: u64,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(
        SellAsset::MissingFa2Contract {
            token_id: sell_token_id,
        },
        buy_asset,
        terms,
    )
}

pub fn mk_auction_with_missing_fa2_asset_id(
    sell_contract: &Address,
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(
        SellAsset::MissingFa2Id {
            contract: sell_contract.clone(),
        },
        buy_asset,
        terms,
    )
}

pub fn mk_auction_with_missing_fa2_asset_contract_and_id(
    buy_asset: &BuyAsset,
    terms: &AuctionTerms,
) -> Result<Micheline> {
    sell_side(SellAsset::MissingFa2ContractAndId, buy_asset, terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_testkit_micheline::{bytes, int, none, pair, seq, some, string};

    const ALICE: &str = "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK";
    const BOB: &str = "tz2AEjKDh1WmsYQF4Cpm2GyChY99rXevCmtN";
    const NFT: &str = "KT1HjccLxwDJL9b5xUtX71QtRRo8eUkYUKkw";
    const FT: &str = "KT1Ed7YAp53vtm5voz2FDGtSomt3gNXv1aPL";

    fn terms() -> AuctionTerms {
        AuctionTerms {
            asset_qty: 1,
            seller: Address::new(ALICE),
            start_date: StartDate::Unset,
            duration: 3600,
            min_price: 100,
            buy_out_price: 1_000,
            min_step: 10,
            payouts: vec![Part::new(ALICE, 10_000)],
            origin_fees: vec![Part::new(BOB, 100)],
        }
    }

    fn ft_buy_asset() -> BuyAsset {
        BuyAsset::Fa2Ft {
            contract: Address::new(FT),
            token_id: 3,
        }
    }

    #[test]
    fn test_mk_auction_layout() {
        let auction = Auction {
            sell_asset_contract: Address::new(NFT),
            sell_asset_id: 7,
            buy_asset: BuyAsset::Xtz,
            terms: terms(),
        };

        let parameter = mk_auction(&auction).unwrap();
        let items = parameter.comb_items();

        assert_eq!(items.len(), 15);
        assert_eq!(*items[0], string(NFT));
        assert_eq!(*items[1], int(7));
        assert_eq!(*items[2], int(1));
        assert_eq!(*items[3], int(0));
        assert_eq!(*items[4], bytes(vec![0x00]));
        assert_eq!(*items[5], string(ALICE));
        assert_eq!(*items[6], none());
        assert_eq!(*items[7], int(3600));
        assert_eq!(*items[8], int(100));
        assert_eq!(*items[9], int(1_000));
        assert_eq!(*items[10], int(10));
        assert_eq!(*items[11], seq(vec![pair(string(ALICE), int(10_000))]));
        assert_eq!(*items[12], seq(vec![pair(string(BOB), int(100))]));
        assert_eq!(*items[13], none());
        assert_eq!(*items[14], none());
    }

    #[test]
    fn test_mk_auction_buy_asset_bytes() {
        let auction = Auction {
            sell_asset_contract: Address::new(NFT),
            sell_asset_id: 7,
            buy_asset: ft_buy_asset(),
            terms: AuctionTerms {
                start_date: StartDate::At(1_700_000_000),
                ..terms()
            },
        };

        let parameter = mk_auction(&auction).unwrap();
        let items = parameter.comb_items();

        assert_eq!(*items[3], int(3));
        assert_eq!(
            *items[4],
            ft_buy_asset().descriptor().unwrap().to_micheline()
        );
        assert_eq!(*items[6], some(int(1_700_000_000)));
    }

    #[test]
    fn test_mk_xtz_auction() {
        let parameter = mk_xtz_auction(&ft_buy_asset(), &terms()).unwrap();
        let items = parameter.comb_items();

        assert_eq!(items.len(), 13);
        assert_eq!(*items[0], bytes(vec![0x00]));
        assert_eq!(*items[1], int(1));
        assert_eq!(
            *items[2],
            ft_buy_asset().descriptor().unwrap().to_micheline()
        );
        assert_eq!(*items[3], string(ALICE));
        assert_eq!(*items[11], none());
        assert_eq!(*items[12], none());
    }

    #[test]
    fn test_sell_side_descriptors() {
        let nft = Address::new(NFT);
        let buy = BuyAsset::Xtz;

        let fa12 = mk_fa12_auction(&nft, &buy, &terms()).unwrap();
        assert_eq!(
            *fa12.comb_items()[0],
            mk_fa12_asset(&nft).unwrap().to_micheline()
        );

        let ft = mk_fungible_fa2_auction(&nft, 4, &buy, &terms()).unwrap();
        assert_eq!(
            *ft.comb_items()[0],
            mk_fungible_fa2_asset(&nft, 4).unwrap().to_micheline()
        );

        let non_fungible = mk_non_fungible_fa2_auction(&nft, 4, &buy, &terms()).unwrap();
        assert_eq!(
            *non_fungible.comb_items()[0],
            mk_non_fungible_fa2_asset(&nft, 4).to_micheline()
        );
    }

    #[test]
    fn test_missing_fields_only_change_sell_asset() {
        let nft = Address::new(NFT);
        let buy = ft_buy_asset();

        let full = mk_non_fungible_fa2_auction(&nft, 4, &buy, &terms()).unwrap();
        let variants = [
            mk_auction_with_missing_fa2_asset_contract(4, &buy, &terms()).unwrap(),
            mk_auction_with_missing_fa2_asset_id(&nft, &buy, &terms()).unwrap(),
            mk_auction_with_missing_fa2_asset_contract_and_id(&buy, &terms()).unwrap(),
        ];

        let full_items = full.comb_items();
        for variant in &variants {
            let items = variant.comb_items();
            assert_eq!(items.len(), full_items.len());
            assert_ne!(items[0], full_items[0]);
            assert_eq!(items[1..], full_items[1..]);
        }
    }

    #[test]
    fn test_invalid_buy_asset_contract() {
        let buy = BuyAsset::Fa12 {
            contract: Address::new("not-an-address"),
        };
        assert!(mk_xtz_auction(&buy, &terms()).is_err());
    }

    #[test]
    fn test_auction_json() {
        let auction: Auction = serde_json::from_str(
            r#"{
                "sell_asset_contract": "KT1HjccLxwDJL9b5xUtX71QtRRo8eUkYUKkw",
                "sell_asset_id": 7,
                "buy_asset": {"kind": "XTZ"},
                "terms": {
                    "asset_qty": 1,
                    "seller": "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK",
                    "start_date": null,
                    "duration": 3600,
                    "min_price": 100,
                    "buy_out_price": 1000,
                    "min_step": 10,
                    "payouts": [{"account": "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK", "value": 10000}],
                    "origin_fees": [{"account": "tz2AEjKDh1WmsYQF4Cpm2GyChY99rXevCmtN", "value": 100}]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(auction.terms, terms());
        assert_eq!(auction.buy_asset, BuyAsset::Xtz);

        let json = serde_json::to_value(mk_auction(&auction).unwrap()).unwrap();
        assert_eq!(json["prim"], "Pair");
        assert_eq!(json["args"][0]["string"], NFT);
        assert_eq!(json["args"][1]["args"][0]["int"], "7");
    }

    #[test]
    fn test_sell_side_auction_json() {
        let auction: SellSideAuction = serde_json::from_str(
            r#"{
                "sell_asset": {"kind": "missing_fa2_contract", "token_id": 4},
                "buy_asset": {"kind": "FA_2_FT", "contract": "KT1Ed7YAp53vtm5voz2FDGtSomt3gNXv1aPL", "token_id": 3},
                "terms": {
                    "asset_qty": 1,
                    "seller": "tz1KjMn6Hb23eu1rNemou6ytAzzNxzvaYHyK",
                    "duration": 3600,
                    "min_price": 100,
                    "buy_out_price": 1000,
                    "min_step": 10
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            auction.sell_asset,
            SellAsset::MissingFa2Contract { token_id: 4 }
        );
        assert_eq!(auction.terms.start_date, StartDate::Unset);
        assert!(auction.terms.payouts.is_empty());

        let parameter = mk_sell_side_auction(&auction).unwrap();
        assert_eq!(
            parameter,
            mk_auction_with_missing_fa2_asset_contract(4, &ft_buy_asset(), &auction.terms).unwrap()
        );
    }
}
