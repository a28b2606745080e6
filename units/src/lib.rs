//! SIB display units
//!
//! Converts base-unit amounts to and from decimal strings in the wallet's
//! display denominations (SIB, mSIB, μSIB), and exposes the unit table for
//! selectors.

pub mod amount;
pub mod errors;
pub mod list_model;
pub mod network;
pub mod unit;

pub use amount::{AmountFormatter, SignMode};
pub use errors::{AmountDefect, UnitsError};
pub use list_model::{Role, UnitData, UnitEntry, UnitListModel};
pub use network::NetworkType;
pub use unit::{available_units, DisplayUnit};
