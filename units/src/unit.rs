use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnitsError;
use crate::network::NetworkType;

/// Number of base units in one SIB
pub const BASE_UNITS_PER_SIB: i64 = 100_000_000;

/// Total supply in SIB, the display cap for every unit
pub const MAX_MONEY_SIB: i64 = 21_000_000;

/// Display denominations offered by the wallet.
///
/// The discriminants are the integer codes stored in settings and passed
/// across the raw-code API, so they must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum DisplayUnit {
    #[serde(rename = "SIB")]
    Sib = 0,
    #[serde(rename = "mSIB")]
    MilliSib = 1,
    #[serde(rename = "uSIB")]
    MicroSib = 2,
}

/// Static attributes of a display unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    /// Base units per one display unit
    pub factor: i64,
    /// Largest sensible amount in display units
    pub max_amount: i64,
    /// Number of integer digits needed to show `max_amount`
    pub amount_digits: u32,
    /// Fractional digits rendered for this unit
    pub decimals: u32,
    /// Indexed by `NetworkType::is_test()`
    names: [&'static str; 2],
    descriptions: [&'static str; 2],
}

// decimals is tuned per unit, not derived from factor.
const UNIT_TABLE: [UnitInfo; 3] = [
    UnitInfo {
        factor: BASE_UNITS_PER_SIB,
        max_amount: MAX_MONEY_SIB,
        amount_digits: 8,
        decimals: 8,
        names: ["SIB", "tSIB"],
        descriptions: ["Sib", "TestSibs"],
    },
    UnitInfo {
        factor: 100_000,
        max_amount: MAX_MONEY_SIB * 1_000,
        amount_digits: 11,
        decimals: 5,
        names: ["mSIB", "mtSIB"],
        descriptions: ["Milli-Sib (1 / 1,000)", "Milli-TestSib (1 / 1,000)"],
    },
    UnitInfo {
        factor: 100,
        max_amount: MAX_MONEY_SIB * 1_000_000,
        amount_digits: 14,
        decimals: 2,
        names: ["μSIB", "μtSIB"],
        descriptions: ["Micro-Sib (1 / 1,000,000)", "Micro-TestSib (1 / 1,000,000)"],
    },
];

impl DisplayUnit {
    /// All units in selector order
    pub const ALL: [DisplayUnit; 3] = [DisplayUnit::Sib, DisplayUnit::MilliSib, DisplayUnit::MicroSib];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn info(self) -> &'static UnitInfo {
        &UNIT_TABLE[self as usize]
    }

    pub fn factor(self) -> i64 {
        self.info().factor
    }

    pub fn max_amount(self) -> i64 {
        self.info().max_amount
    }

    pub fn amount_digits(self) -> u32 {
        self.info().amount_digits
    }

    pub fn decimals(self) -> u32 {
        self.info().decimals
    }

    /// Short name, e.g. `mSIB` on main and `mtSIB` on test networks
    pub fn name(self, network: NetworkType) -> &'static str {
        self.info().names[network.is_test() as usize]
    }

    /// Longer description for tooltips
    pub fn description(self, network: NetworkType) -> &'static str {
        self.info().descriptions[network.is_test() as usize]
    }
}

/// Units offered to the user, in display order
pub fn available_units() -> &'static [DisplayUnit] {
    &DisplayUnit::ALL
}

impl TryFrom<i32> for DisplayUnit {
    type Error = UnitsError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        DisplayUnit::ALL
            .into_iter()
            .find(|unit| unit.code() == code)
            .ok_or(UnitsError::InvalidUnit(code))
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(NetworkType::Mainnet))
    }
}

impl FromStr for DisplayUnit {
    type Err = UnitsError;

    /// Accepts the main or test name of a unit, plus the ASCII spellings `uSIB`/`utSIB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if matches!(s, "uSIB" | "utSIB") {
            return Ok(DisplayUnit::MicroSib);
        }
        DisplayUnit::ALL
            .into_iter()
            .find(|unit| unit.info().names.iter().any(|name| *name == s))
            .ok_or_else(|| UnitsError::UnknownUnit(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(DisplayUnit::Sib.code(), 0);
        assert_eq!(DisplayUnit::MilliSib.code(), 1);
        assert_eq!(DisplayUnit::MicroSib.code(), 2);
        for unit in DisplayUnit::ALL {
            assert_eq!(DisplayUnit::try_from(unit.code()).unwrap(), unit);
        }
        assert_eq!(DisplayUnit::try_from(3), Err(UnitsError::InvalidUnit(3)));
        assert_eq!(DisplayUnit::try_from(-1), Err(UnitsError::InvalidUnit(-1)));
    }

    #[test]
    fn test_attribute_table() {
        assert_eq!(DisplayUnit::Sib.factor(), 100_000_000);
        assert_eq!(DisplayUnit::MilliSib.factor(), 100_000);
        assert_eq!(DisplayUnit::MicroSib.factor(), 100);

        assert_eq!(DisplayUnit::Sib.max_amount(), 21_000_000);
        assert_eq!(DisplayUnit::MilliSib.max_amount(), 21_000_000_000);
        assert_eq!(DisplayUnit::MicroSib.max_amount(), 21_000_000_000_000);

        assert_eq!(DisplayUnit::Sib.amount_digits(), 8);
        assert_eq!(DisplayUnit::MilliSib.amount_digits(), 11);
        assert_eq!(DisplayUnit::MicroSib.amount_digits(), 14);

        assert_eq!(DisplayUnit::Sib.decimals(), 8);
        assert_eq!(DisplayUnit::MilliSib.decimals(), 5);
        assert_eq!(DisplayUnit::MicroSib.decimals(), 2);
    }

    #[test]
    fn test_every_unit_caps_at_total_supply() {
        for unit in DisplayUnit::ALL {
            assert_eq!(unit.max_amount() * unit.factor(), MAX_MONEY_SIB * BASE_UNITS_PER_SIB);
        }
    }

    #[test]
    fn test_names_follow_network() {
        assert_eq!(DisplayUnit::Sib.name(NetworkType::Mainnet), "SIB");
        assert_eq!(DisplayUnit::Sib.name(NetworkType::Testnet), "tSIB");
        assert_eq!(DisplayUnit::MilliSib.name(NetworkType::Regtest), "mtSIB");
        assert_eq!(DisplayUnit::MicroSib.name(NetworkType::Mainnet), "μSIB");
        assert_eq!(DisplayUnit::MicroSib.name(NetworkType::Testnet), "μtSIB");

        assert_eq!(DisplayUnit::Sib.description(NetworkType::Mainnet), "Sib");
        assert_eq!(DisplayUnit::Sib.description(NetworkType::Regtest), "TestSibs");
        assert_eq!(DisplayUnit::MicroSib.description(NetworkType::Mainnet), "Micro-Sib (1 / 1,000,000)");
        assert_eq!(DisplayUnit::MilliSib.description(NetworkType::Testnet), "Milli-TestSib (1 / 1,000)");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SIB".parse::<DisplayUnit>().unwrap(), DisplayUnit::Sib);
        assert_eq!("mtSIB".parse::<DisplayUnit>().unwrap(), DisplayUnit::MilliSib);
        assert_eq!("μSIB".parse::<DisplayUnit>().unwrap(), DisplayUnit::MicroSib);
        assert_eq!("uSIB".parse::<DisplayUnit>().unwrap(), DisplayUnit::MicroSib);
        assert_eq!("BTC".parse::<DisplayUnit>(), Err(UnitsError::UnknownUnit("BTC".to_string())));
    }

    #[test]
    fn test_serde_uses_ascii_names() {
        let json = serde_json::to_string(&DisplayUnit::MicroSib).unwrap();
        assert_eq!(json, "\"uSIB\"");
        let unit: DisplayUnit = serde_json::from_str("\"mSIB\"").unwrap();
        assert_eq!(unit, DisplayUnit::MilliSib);
    }
}
