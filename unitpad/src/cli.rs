use clap::{Parser, Subcommand};
use sib_units::{DisplayUnit, NetworkType};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unitpad")]
#[command(about = "Format and parse SIB amounts in any display unit", long_about = None)]
pub struct Args {
    /// Path to configuration file (optional, uses defaults if not provided)
    #[arg(short, long = "config")]
    pub config_path: Option<PathBuf>,

    /// Network (mainnet, testnet, regtest)
    #[arg(short, long)]
    pub network: Option<NetworkType>,

    /// Use the test network
    #[arg(long)]
    pub testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    pub regtest: bool,

    /// Display unit (SIB, mSIB, uSIB)
    #[arg(short, long)]
    pub unit: Option<DisplayUnit>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render an amount given in base units
    Format {
        /// Amount in base units (1 SIB = 100000000)
        #[arg(allow_hyphen_values = true)]
        amount: i64,
        /// Prefix positive amounts with '+'
        #[arg(long)]
        plus: bool,
        /// Append the unit name
        #[arg(long)]
        with_unit: bool,
    },

    /// Convert a decimal amount into base units
    Parse {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List the available display units
    List {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse_args() -> Args {
    Args::parse()
}
