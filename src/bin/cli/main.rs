use auction_testkit_micheline::{Address, Micheline, ToMicheline};
use auction_testkit_params::{
    mk_auction, mk_bid, mk_buy_asset_from_tag, mk_sell_side_auction, mk_start_date, Auction, Bid,
    SellSideAuction, StartDate,
};
use camino::Utf8Path;
use clap::Parser;
use serde::de::DeserializeOwned;
use tracing_subscriber::{fmt, EnvFilter};

mod args;
mod error;

use args::{Command, TestkitArgs};
use error::{Error, TestkitCliResult};

fn main() -> TestkitCliResult<()> {
    init_logging()?;

    let args = TestkitArgs::parse();
    tracing::trace!("args: {:?}", args);

    let value = match args.command {
        Command::Asset {
            kind,
            contract,
            token_id,
        } => {
            let contract = Address::new(contract.unwrap_or_default());
            mk_buy_asset_from_tag(&kind, &contract, token_id)?.to_micheline()
        }
        Command::StartDate { raw } => mk_start_date(StartDate::from_legacy(&raw)?),
        Command::Auction { input, sell_side } => {
            if sell_side {
                mk_sell_side_auction(&read_json::<SellSideAuction>(&input)?)?
            } else {
                mk_auction(&read_json::<Auction>(&input)?)?
            }
        }
        Command::Bid { input } => mk_bid(&read_json::<Bid>(&input)?),
    };

    print(&value, args.compact)
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> TestkitCliResult<T> {
    let content = std::fs::read_to_string(path)?;
    tracing::trace!("Read {} bytes from {}", content.len(), path);

    Ok(serde_json::from_str(&content)?)
}

fn print(value: &Micheline, compact: bool) -> TestkitCliResult<()> {
    tracing::debug!("{}", value);

    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };

    println!("{json}");
    Ok(())
}

pub fn init_logging() -> TestkitCliResult<()> {
    const DEFAULT_LOG_FILTER: &str = "info,auction_testkit=trace";

    let builder = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or(EnvFilter::try_new(DEFAULT_LOG_FILTER))
                .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))?,
        );

    tracing::subscriber::set_global_default(builder.finish())
        .map_err(|e| Error::Other(format!("Tracing error: {:?}", e)))
}
