use serde::{Deserialize, Serialize};
use sib_units::{DisplayUnit, NetworkType, SignMode};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::UnitpadError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network whose unit names are shown
    pub network: NetworkType,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit amounts are shown and entered in
    pub unit: DisplayUnit,
    /// Always prefix positive amounts with '+'
    pub force_plus: bool,
    /// Append the unit name to formatted amounts
    pub with_unit: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: DisplayUnit::Sib,
            force_plus: false,
            with_unit: false,
        }
    }
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, UnitpadError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Config::default())
        }
    }

    /// Default configuration for a named network
    pub fn for_network(network: &str) -> Result<Self, UnitpadError> {
        let mut config = Config::default();
        config.network = network.parse()?;
        Ok(config)
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) -> Result<(), UnitpadError> {
        if let Some(network) = args.network {
            self.network = network;
        }

        if args.testnet || args.regtest {
            self.network = NetworkType::from_flags(args.testnet, args.regtest)?;
        }

        if let Some(unit) = args.unit {
            self.display.unit = unit;
        }

        Ok(())
    }

    pub fn sign_mode(&self) -> SignMode {
        if self.display.force_plus {
            SignMode::ForceShowPlus
        } else {
            SignMode::Plain
        }
    }
}
