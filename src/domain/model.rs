use crate::utils::error::MachineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of beverages the machine knows how to serve. Parsing
/// happens once at the configuration boundary; past this point the
/// coordinators only ever see capability-typed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItem {
    Espresso,
    Cappuccino,
    Latte,
}

impl MenuItem {
    pub fn takes_milk(&self) -> bool {
        matches!(self, MenuItem::Cappuccino | MenuItem::Latte)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MenuItem::Espresso => "espresso",
            MenuItem::Cappuccino => "cappuccino",
            MenuItem::Latte => "latte",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for MenuItem {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "espresso" => Ok(MenuItem::Espresso),
            "cappuccino" => Ok(MenuItem::Cappuccino),
            "latte" => Ok(MenuItem::Latte),
            _ => Err(MachineError::UnknownBeverage {
                name: s.to_string(),
            }),
        }
    }
}

/// One request to the machine: which beverage, and whether to add milk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Order {
    pub item: MenuItem,
    #[serde(default)]
    pub milk: bool,
}

impl Order {
    pub fn new(item: MenuItem, milk: bool) -> Self {
        Self { item, milk }
    }
}
