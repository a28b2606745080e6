use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnitsError;

/// Network the wallet is running against. Only used to pick the display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Main network
    #[default]
    Mainnet,
    /// Public test network
    Testnet,
    /// Regression test network
    Regtest,
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::Mainnet => write!(f, "mainnet"),
            NetworkType::Testnet => write!(f, "testnet"),
            NetworkType::Regtest => write!(f, "regtest"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = UnitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "mainnet" => Ok(NetworkType::Mainnet),
            "test" | "testnet" => Ok(NetworkType::Testnet),
            "regtest" => Ok(NetworkType::Regtest),
            other => Err(UnitsError::UnknownNetwork(other.to_string())),
        }
    }
}

impl NetworkType {
    /// Returns an iterator over all NetworkType variants
    pub fn iter() -> impl Iterator<Item = NetworkType> {
        [NetworkType::Mainnet, NetworkType::Testnet, NetworkType::Regtest].into_iter()
    }

    /// Test and regtest share the "test" unit names.
    pub fn is_test(self) -> bool {
        !matches!(self, NetworkType::Mainnet)
    }

    /// Select a network from the `-testnet` / `-regtest` switches.
    ///
    /// Setting both is rejected. With neither set the main network is used.
    pub fn from_flags(testnet: bool, regtest: bool) -> Result<Self, UnitsError> {
        match (testnet, regtest) {
            (true, true) => Err(UnitsError::ConflictingNetworks),
            (_, true) => Ok(NetworkType::Regtest),
            (true, _) => Ok(NetworkType::Testnet),
            _ => Ok(NetworkType::Mainnet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mainnet_is_not_test() {
        assert!(!NetworkType::Mainnet.is_test());
        assert!(NetworkType::Testnet.is_test());
        assert!(NetworkType::Regtest.is_test());
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(NetworkType::from_flags(false, false).unwrap(), NetworkType::Mainnet);
        assert_eq!(NetworkType::from_flags(true, false).unwrap(), NetworkType::Testnet);
        assert_eq!(NetworkType::from_flags(false, true).unwrap(), NetworkType::Regtest);
        assert_eq!(NetworkType::from_flags(true, true), Err(UnitsError::ConflictingNetworks));
    }

    #[test]
    fn test_display_parses_back() {
        for network in NetworkType::iter() {
            assert_eq!(network.to_string().parse::<NetworkType>().unwrap(), network);
        }
        assert_eq!("main".parse::<NetworkType>().unwrap(), NetworkType::Mainnet);
        assert!(matches!("devnet".parse::<NetworkType>(), Err(UnitsError::UnknownNetwork(_))));
    }
}
