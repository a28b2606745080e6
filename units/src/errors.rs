use thiserror::Error;

/// Reason a decimal amount string was rejected by the parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountDefect {
    #[error("empty amount")]
    Empty,

    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    #[error("{found} fractional digits exceed the maximum of {max}")]
    ExcessPrecision { found: usize, max: u32 },

    #[error("{0} digits would overflow a 63-bit amount")]
    TooManyDigits(usize),

    #[error("not a number")]
    NotANumber,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Invalid display unit: {0}")]
    InvalidUnit(i32),

    #[error("Unknown display unit: {0}")]
    UnknownUnit(String),

    #[error("Malformed amount: {0}")]
    MalformedAmount(#[from] AmountDefect),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid combination of -regtest and -testnet")]
    ConflictingNetworks,
}
