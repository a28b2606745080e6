use serde::{Deserialize, Serialize};

use crate::network::NetworkType;
use crate::unit::{available_units, DisplayUnit};

/// What a view asks a row for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Display,
    Edit,
    ToolTip,
    /// The integer unit code
    Unit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitData {
    Text(&'static str),
    Code(i32),
}

/// One row of the unit table in a serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitEntry {
    pub code: i32,
    pub unit: DisplayUnit,
    pub name: String,
    pub description: String,
    pub decimals: u32,
    pub max_amount: i64,
}

/// List of selectable display units, as shown in the unit selector.
#[derive(Debug, Clone)]
pub struct UnitListModel {
    network: NetworkType,
    units: Vec<DisplayUnit>,
}

impl UnitListModel {
    pub fn new(network: NetworkType) -> Self {
        Self {
            network,
            units: available_units().to_vec(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.units.len()
    }

    pub fn unit_at(&self, row: usize) -> Option<DisplayUnit> {
        self.units.get(row).copied()
    }

    pub fn data(&self, row: usize, role: Role) -> Option<UnitData> {
        let unit = self.unit_at(row)?;
        let data = match role {
            Role::Display | Role::Edit => UnitData::Text(unit.name(self.network)),
            Role::ToolTip => UnitData::Text(unit.description(self.network)),
            Role::Unit => UnitData::Code(unit.code()),
        };
        Some(data)
    }

    /// Row whose unit is called `name` on this model's network
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.units.iter().position(|unit| unit.name(self.network) == name)
    }

    pub fn entries(&self) -> Vec<UnitEntry> {
        self.units
            .iter()
            .map(|&unit| UnitEntry {
                code: unit.code(),
                unit,
                name: unit.name(self.network).to_string(),
                description: unit.description(self.network).to_string(),
                decimals: unit.decimals(),
                max_amount: unit.max_amount(),
            })
            .collect()
    }
}
