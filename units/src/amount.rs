//! Fixed-point rendering and parsing of base-unit amounts.
//!
//! Amounts are `i64` base units. Scaling is done on digit strings, never
//! through floating point. Formatting keeps at least two fractional digits,
//! so `parse(format(a))` may differ from `a` while `format` of that result
//! is identical to the first rendering.

use tracing::debug;

use crate::errors::{AmountDefect, UnitsError};
use crate::network::NetworkType;
use crate::unit::DisplayUnit;

/// Fractional digits that are never trimmed
pub const MIN_FRACTION_DIGITS: usize = 2;

/// Longest digit string that still fits into 63 bits
pub const MAX_AMOUNT_DIGITS: usize = 18;

/// Whether positive amounts get an explicit `+`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignMode {
    #[default]
    Plain,
    ForceShowPlus,
}

impl DisplayUnit {
    /// Render `amount` base units in this unit, e.g. `1.00` or `-0.05`.
    pub fn format_amount(self, amount: i64, sign: SignMode) -> String {
        render_amount(amount, self.factor().unsigned_abs(), self.decimals() as usize, sign)
    }

    /// `format_amount` followed by a space and the unit name for `network`.
    pub fn format_with_unit(self, amount: i64, sign: SignMode, network: NetworkType) -> String {
        format!("{} {}", self.format_amount(amount, sign), self.name(network))
    }

    /// Parse a decimal string in this unit into base units.
    ///
    /// A leading sign stays attached to the integer part. At most
    /// `decimals()` fractional digits are accepted.
    pub fn parse_amount(self, value: &str) -> Result<i64, UnitsError> {
        let reject = |defect: AmountDefect| {
            debug!(unit = %self, input = value, %defect, "rejecting amount");
            UnitsError::MalformedAmount(defect)
        };

        if value.is_empty() {
            return Err(reject(AmountDefect::Empty));
        }
        let num_decimals = self.decimals() as usize;

        let mut parts = value.split('.');
        let whole = parts.next().unwrap_or_default();
        let decimals = parts.next().unwrap_or_default();
        if parts.next().is_some() {
            return Err(reject(AmountDefect::MultipleDecimalPoints));
        }

        let found = decimals.chars().count();
        if found > num_decimals {
            return Err(reject(AmountDefect::ExcessPrecision { found, max: self.decimals() }));
        }

        let digits = format!("{}{:0<width$}", whole, decimals, width = num_decimals);
        let len = digits.chars().count();
        if len > MAX_AMOUNT_DIGITS {
            return Err(reject(AmountDefect::TooManyDigits(len)));
        }

        digits.parse::<i64>().map_err(|_| reject(AmountDefect::NotANumber))
    }
}

fn render_amount(amount: i64, coin: u64, num_decimals: usize, sign: SignMode) -> String {
    // unsigned_abs keeps i64::MIN representable
    let n_abs = amount.unsigned_abs();
    let quotient = n_abs / coin;
    let remainder = n_abs % coin;

    let prefix = if amount < 0 {
        "-"
    } else if sign == SignMode::ForceShowPlus && amount > 0 {
        "+"
    } else {
        ""
    };

    if num_decimals == 0 {
        return format!("{}{}", prefix, quotient);
    }

    let mut remainder_str = format!("{:0>width$}", remainder, width = num_decimals);
    trim_fraction(&mut remainder_str);
    format!("{}{}.{}", prefix, quotient, remainder_str)
}

/// Drop trailing zeros, stopping at `MIN_FRACTION_DIGITS`.
fn trim_fraction(fraction: &mut String) {
    let keep = fraction
        .trim_end_matches('0')
        .len()
        .max(MIN_FRACTION_DIGITS)
        .min(fraction.len());
    fraction.truncate(keep);
}

/// Amount formatter working on raw integer unit codes, as stored in
/// wallet settings. Unknown codes are rejected by every operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountFormatter {
    network: NetworkType,
}

impl AmountFormatter {
    /// The network only affects unit names and descriptions.
    pub fn new(network: NetworkType) -> Self {
        Self { network }
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    pub fn valid(code: i32) -> bool {
        DisplayUnit::try_from(code).is_ok()
    }

    /// Empty string for an unknown unit code.
    pub fn format(&self, code: i32, amount: i64, sign: SignMode) -> String {
        match DisplayUnit::try_from(code) {
            Ok(unit) => unit.format_amount(amount, sign),
            Err(_) => String::new(),
        }
    }

    /// Unknown codes give `" ???"`: an empty amount and the `???` name.
    pub fn format_with_unit(&self, code: i32, amount: i64, sign: SignMode) -> String {
        format!("{} {}", self.format(code, amount, sign), self.name(code))
    }

    pub fn parse(&self, code: i32, value: &str) -> Result<i64, UnitsError> {
        DisplayUnit::try_from(code)?.parse_amount(value)
    }

    /// `???` for an unknown unit code.
    pub fn name(&self, code: i32) -> &'static str {
        DisplayUnit::try_from(code).map_or("???", |unit| unit.name(self.network))
    }

    /// `???` for an unknown unit code.
    pub fn description(&self, code: i32) -> &'static str {
        DisplayUnit::try_from(code).map_or("???", |unit| unit.description(self.network))
    }

    /// Falls back to one SIB for unknown codes.
    pub fn factor(code: i32) -> i64 {
        DisplayUnit::try_from(code).map_or(DisplayUnit::Sib.factor(), DisplayUnit::factor)
    }

    pub fn max_amount(code: i32) -> i64 {
        DisplayUnit::try_from(code).map_or(0, DisplayUnit::max_amount)
    }

    pub fn amount_digits(code: i32) -> u32 {
        DisplayUnit::try_from(code).map_or(0, DisplayUnit::amount_digits)
    }

    pub fn decimals(code: i32) -> u32 {
        DisplayUnit::try_from(code).map_or(0, DisplayUnit::decimals)
    }
}
