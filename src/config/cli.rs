use crate::domain::model::MenuItem;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "coffee-machine")]
#[command(about = "A coffee machine that dispatches orders through capability contracts")]
pub struct CliConfig {
    #[arg(long, default_value = "espresso", help = "Beverage to prepare (espresso, cappuccino, latte)")]
    pub beverage: MenuItem,

    #[arg(long, help = "Add milk (only milk-capable beverages accept this)")]
    pub milk: bool,

    #[arg(long, help = "Read the order from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config = CliConfig::parse_from(["coffee-machine"]);
        assert_eq!(config.beverage, MenuItem::Espresso);
        assert!(!config.milk);
        assert!(config.config.is_none());
    }

    #[test]
    fn test_parse_order_flags() {
        let config =
            CliConfig::parse_from(["coffee-machine", "--beverage", "cappuccino", "--milk"]);
        assert_eq!(config.beverage, MenuItem::Cappuccino);
        assert!(config.milk);
    }

    #[test]
    fn test_unknown_beverage_fails_to_parse() {
        let result = CliConfig::try_parse_from(["coffee-machine", "--beverage", "mocha"]);
        assert!(result.is_err());
    }
}
