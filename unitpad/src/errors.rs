use sib_units::UnitsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnitpadError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Units(#[from] UnitsError),
}
