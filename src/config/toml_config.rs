use crate::domain::model::Order;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order file layout:
///
/// ```toml
/// [machine]
/// name = "counter-1"
///
/// [order]
/// beverage = "cappuccino"
/// milk = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub machine: MachineConfig,
    pub order: OrderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    pub beverage: String,
    #[serde(default)]
    pub milk: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate and convert into a domain order. The beverage name is
    /// parsed here, at the boundary; unknown names are rejected before
    /// anything reaches the machine.
    pub fn into_order(&self) -> Result<Order> {
        self.validate()?;
        let item = self.order.beverage.parse()?;
        Ok(Order::new(item, self.order.milk))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("machine.name", &self.machine.name)?;
        validate_non_empty_string("order.beverage", &self.order.beverage)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MenuItem;
    use crate::utils::error::MachineError;

    fn parse(content: &str) -> TomlConfig {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_into_order() {
        let config = parse(
            r#"
            [machine]
            name = "counter-1"

            [order]
            beverage = "latte"
            milk = true
            "#,
        );

        let order = config.into_order().unwrap();
        assert_eq!(order.item, MenuItem::Latte);
        assert!(order.milk);
    }

    #[test]
    fn test_milk_defaults_to_false() {
        let config = parse(
            r#"
            [machine]
            name = "counter-1"

            [order]
            beverage = "espresso"
            "#,
        );

        let order = config.into_order().unwrap();
        assert!(!order.milk);
    }

    #[test]
    fn test_unknown_beverage_in_file_is_rejected() {
        let config = parse(
            r#"
            [machine]
            name = "counter-1"

            [order]
            beverage = "mocha"
            "#,
        );

        match config.into_order().unwrap_err() {
            MachineError::UnknownBeverage { name } => assert_eq!(name, "mocha"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_empty_machine_name_is_rejected() {
        let config = parse(
            r#"
            [machine]
            name = ""

            [order]
            beverage = "latte"
            "#,
        );

        assert!(matches!(
            config.into_order().unwrap_err(),
            MachineError::InvalidConfigValue { .. }
        ));
    }
}
