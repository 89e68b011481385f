//! Asset descriptors.
//!
//! The auction contracts identify the sold and the accepted assets by a kind
//! and an encoded locator. Depending on the kind, the locator is a raw tag
//! byte, a packed Michelson value, or a plain tree:
//!
//! | kind       | descriptor                                               |
//! |------------|----------------------------------------------------------|
//! | `XTZ`      | tag byte `0x00`                                          |
//! | `FA_1_2`   | `PACK (contract : address)`                              |
//! | `FA_2_NFT` | `Pair (Right (Right (Left 1))) (Pair (Some "KT1..") (Some id))` |
//! | `FA_2_FT`  | `PACK (Pair contract id : pair address nat)`             |
use std::fmt;
use std::str::FromStr;

use auction_testkit_micheline::{
    encode, int, left, pack, pair, right, some, Address, Micheline, ToMicheline, Ty,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const XTZ: &str = "XTZ";
pub const FA_1_2: &str = "FA_1_2";
pub const FA_2_NFT: &str = "FA_2_NFT";
pub const FA_2_FT: &str = "FA_2_FT";

/// Tag byte of the native currency descriptor.
pub const XTZ_ASSET_TAG: u8 = 0x00;

/// Kind marker carried by the non-fungible descriptor tree.
const NFT_KIND_MARKER: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "XTZ")]
    Xtz,
    #[serde(rename = "FA_1_2")]
    Fa12,
    #[serde(rename = "FA_2_NFT")]
    Fa2Nft,
    #[serde(rename = "FA_2_FT")]
    Fa2Ft,
}

impl AssetKind {
    pub fn tag(&self) -> &'static str {
        match self {
            AssetKind::Xtz => XTZ,
            AssetKind::Fa12 => FA_1_2,
            AssetKind::Fa2Nft => FA_2_NFT,
            AssetKind::Fa2Ft => FA_2_FT,
        }
    }

    /// Numeric code used by the `buy_asset_type` field of the general
    /// auction parameter.
    pub fn code(&self) -> u8 {
        match self {
            AssetKind::Xtz => 0,
            AssetKind::Fa12 => 1,
            AssetKind::Fa2Nft => 2,
            AssetKind::Fa2Ft => 3,
        }
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            XTZ => Ok(AssetKind::Xtz),
            FA_1_2 => Ok(AssetKind::Fa12),
            FA_2_NFT => Ok(AssetKind::Fa2Nft),
            FA_2_FT => Ok(AssetKind::Fa2Ft),
            _ => Err(Error::UnknownAssetKind(input.to_string())),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl ToMicheline for AssetKind {
    fn to_micheline(&self) -> Micheline {
        self.code().to_micheline()
    }
}

/// An encoded asset locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDescriptor {
    /// A single tag byte.
    Tag(u8),
    /// Output of `PACK`.
    Packed(Vec<u8>),
    /// A Micheline value passed as is.
    Tree(Micheline),
    /// No payload, produced for asset tags this crate does not know.
    Empty,
}

impl AssetDescriptor {
    pub fn is_empty(&self) -> bool {
        matches!(self, AssetDescriptor::Empty)
    }

    /// Byte form, for parameter fields typed as `bytes`.
    ///
    /// Trees are encoded with the untyped `PACK` layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            AssetDescriptor::Tag(tag) => vec![*tag],
            AssetDescriptor::Packed(bytes) => bytes.clone(),
            AssetDescriptor::Tree(tree) => encode(tree),
            AssetDescriptor::Empty => vec![],
        }
    }
}

impl ToMicheline for AssetDescriptor {
    fn to_micheline(&self) -> Micheline {
        match self {
            AssetDescriptor::Tree(tree) => tree.clone(),
            other => Micheline::Bytes(other.to_bytes()),
        }
    }
}

/// Asset accepted as payment, with its locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BuyAsset {
    #[serde(rename = "XTZ")]
    Xtz,
    #[serde(rename = "FA_1_2")]
    Fa12 { contract: Address },
    #[serde(rename = "FA_2_NFT")]
    Fa2Nft { contract: Address, token_id: u64 },
    #[serde(rename = "FA_2_FT")]
    Fa2Ft { contract: Address, token_id: u64 },
}

impl BuyAsset {
    pub fn kind(&self) -> AssetKind {
        match self {
            BuyAsset::Xtz => AssetKind::Xtz,
            BuyAsset::Fa12 { .. } => AssetKind::Fa12,
            BuyAsset::Fa2Nft { .. } => AssetKind::Fa2Nft,
            BuyAsset::Fa2Ft { .. } => AssetKind::Fa2Ft,
        }
    }

    pub fn descriptor(&self) -> Result<AssetDescriptor> {
        match self {
            BuyAsset::Xtz => Ok(mk_xtz_asset()),
            BuyAsset::Fa12 { contract } => mk_fa12_asset(contract),
            BuyAsset::Fa2Nft { contract, token_id } => {
                Ok(mk_non_fungible_fa2_asset(contract, *token_id))
            }
            BuyAsset::Fa2Ft { contract, token_id } => mk_fungible_fa2_asset(contract, *token_id),
        }
    }
}

/// Builds the descriptor of the given kind.
///
/// The contract and the token id are ignored by the kinds that do not use
/// them.
pub fn mk_buy_asset(kind: AssetKind, contract: &Address, token_id: u64) -> Result<AssetDescriptor> {
    match kind {
        AssetKind::Xtz => Ok(mk_xtz_asset()),
        AssetKind::Fa12 => mk_fa12_asset(contract),
        AssetKind::Fa2Nft => Ok(mk_non_fungible_fa2_asset(contract, token_id)),
        AssetKind::Fa2Ft => mk_fungible_fa2_asset(contract, token_id),
    }
}

/// Same as [`mk_buy_asset`], from a textual kind tag.
///
/// An unknown tag gives an empty descriptor instead of an error, the
/// contract decides what to do with it.
pub fn mk_buy_asset_from_tag(
    tag: &str,
    contract: &Address,
    token_id: u64,
) -> Result<AssetDescriptor> {
    match tag.parse::<AssetKind>() {
        Ok(kind) => mk_buy_asset(kind, contract, token_id),
        Err(_) => {
            tracing::warn!("Unknown asset tag {tag:?}, using an empty descriptor");
            Ok(AssetDescriptor::Empty)
        }
    }
}

pub fn mk_xtz_asset() -> AssetDescriptor {
    AssetDescriptor::Tag(XTZ_ASSET_TAG)
}

pub fn mk_fa12_asset(contract: &Address) -> Result<AssetDescriptor> {
    let packed = pack(&contract.to_micheline(), &Ty::Address)?;
    Ok(AssetDescriptor::Packed(packed))
}

pub fn mk_fungible_fa2_asset(contract: &Address, token_id: u64) -> Result<AssetDescriptor> {
    let packed = pack(
        &(contract, token_id).to_micheline(),
        &Ty::pair(Ty::Address, Ty::Nat),
    )?;
    Ok(AssetDescriptor::Packed(packed))
}

pub fn mk_non_fungible_fa2_asset(contract: &Address, token_id: u64) -> AssetDescriptor {
    AssetDescriptor::Tree(pair(
        right(right(left(int(NFT_KIND_MARKER)))),
        pair(some(contract.to_micheline()), some(int(token_id))),
    ))
}

/// Non-fungible descriptor reduced to the packed contract address.
pub fn mk_non_fungible_fa2_asset_missing_id(contract: &Address) -> Result<AssetDescriptor> {
    mk_fa12_asset(contract)
}

/// Non-fungible descriptor reduced to the packed token id.
pub fn mk_non_fungible_fa2_asset_missing_contract(token_id: u64) -> Result<AssetDescriptor> {
    let packed = pack(&int(token_id), &Ty::Nat)?;
    Ok(AssetDescriptor::Packed(packed))
}

/// Non-fungible descriptor with neither contract nor token id: a packed
/// zero `nat`.
pub fn mk_non_fungible_fa2_asset_missing_contract_and_id() -> Result<AssetDescriptor> {
    mk_non_fungible_fa2_asset_missing_contract(0)
}
