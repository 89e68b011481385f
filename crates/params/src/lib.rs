//! Typed builders for the parameters of the auction contracts' entry points.
//!
//! Every builder returns a [`Micheline`] value whose shape mirrors the
//! contract's parameter type. Shapes are not validated locally: a wrong
//! parameter is only rejected by the contract itself, which is exactly what
//! the `missing_*` variants rely on for negative testing.
//!
//! [`Micheline`]: auction_testkit_micheline::Micheline
mod error;
pub use error::{Error, Result};

pub mod asset;
pub mod auction;
pub mod bid;
pub mod part;
pub mod start_date;

pub use asset::*;
pub use auction::*;
pub use bid::*;
pub use part::*;
pub use start_date::*;
