use sib_units::{SignMode, UnitListModel};
use tracing::info;

use crate::cli::Command;
use crate::config::Config;
use crate::errors::UnitpadError;
use crate::ui;

/// Run one command against the effective configuration and return what should be printed.
pub fn run(command: &Command, config: &Config) -> Result<String, UnitpadError> {
    let unit = config.display.unit;
    let network = config.network;

    match command {
        Command::Format { amount, plus, with_unit } => {
            let sign = if *plus { SignMode::ForceShowPlus } else { config.sign_mode() };
            let text = if *with_unit || config.display.with_unit {
                unit.format_with_unit(*amount, sign, network)
            } else {
                unit.format_amount(*amount, sign)
            };
            info!(%unit, %network, amount, "formatted amount");
            Ok(text)
        }
        Command::Parse { value } => {
            let amount = unit.parse_amount(value)?;
            info!(%unit, %network, amount, "parsed amount");
            Ok(amount.to_string())
        }
        Command::List { json } => {
            let entries = UnitListModel::new(network).entries();
            if *json {
                Ok(serde_json::to_string_pretty(&entries)?)
            } else {
                Ok(ui::render_unit_table(&entries).trim_end().to_string())
            }
        }
    }
}
