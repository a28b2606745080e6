//! unitpad - SIB amount formatting from the command line
//!
//! Loads the display configuration, applies command-line overrides and runs
//! format / parse / list against the `sib_units` crate.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod ui;

pub use cli::{Args, Command};
pub use config::Config;
pub use errors::UnitpadError;
