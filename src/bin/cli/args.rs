//! Auction testkit CLI arguments.
//!
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TestkitArgs {
    #[arg(long)]
    #[arg(global = true)]
    #[arg(help = "Print the Micheline JSON on a single line.")]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Prints an asset descriptor.")]
    Asset {
        #[arg(long)]
        #[arg(value_name = "KIND")]
        #[arg(help = "Asset kind: 'XTZ', 'FA_1_2', 'FA_2_NFT' or 'FA_2_FT'.")]
        kind: String,

        #[arg(long)]
        #[arg(value_name = "ADDRESS")]
        #[arg(help = "Token contract, ignored for 'XTZ'.")]
        contract: Option<String>,

        #[arg(long)]
        #[arg(value_name = "TOKEN_ID")]
        #[arg(default_value_t = 0)]
        #[arg(help = "Token id, used by the FA2 kinds.")]
        token_id: u64,
    },

    #[command(about = "Prints an optional start date, '0' or '' meaning none.")]
    StartDate {
        #[arg(value_name = "TIMESTAMP")]
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },

    #[command(about = "Prints the parameter of an auction described in a JSON file.")]
    Auction {
        #[arg(long)]
        #[arg(value_name = "PATH")]
        #[arg(help = "Path of the JSON auction description.")]
        input: Utf8PathBuf,

        #[arg(long)]
        #[arg(help = "The file describes a sell-side auction.")]
        sell_side: bool,
    },

    #[command(about = "Prints the parameter of a bid described in a JSON file.")]
    Bid {
        #[arg(long)]
        #[arg(value_name = "PATH")]
        #[arg(help = "Path of the JSON bid description.")]
        input: Utf8PathBuf,
    },
}
