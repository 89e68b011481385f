//! This crate contains the Micheline value model used to build Tezos contract
//! call parameters, and the encodings a test client needs around it:
//! the JSON form every Tezos RPC speaks, and the binary form produced by the
//! `PACK` instruction.
//!
//! Rust types are turned into Micheline through the [`ToMicheline`] trait.
//! Records are usually laid out as right-comb pairs, which is what
//! `#[derive(ToMicheline)]` produces from a struct's fields.
//!
mod error;
pub use error::{Error, Result};

pub mod hex;
mod json;
pub mod node;
pub mod pack;
pub mod ty;
pub mod types;

pub use node::{bytes, comb, int, left, none, pair, right, seq, some, string, unit, Micheline};
pub use pack::{encode, pack, unpack};
pub use ty::Ty;
pub use types::address::Address;
pub use types::bytes::Bytes;

/// ToMicheline trait to implement in order to turn a Rust value
/// into its Micheline representation.
pub trait ToMicheline {
    /// Builds the Micheline node for this value.
    fn to_micheline(&self) -> Micheline;
}
