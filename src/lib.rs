pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use core::dispense::{add_milk, prepare_coffee};
pub use core::machine::CoffeeMachine;
pub use core::serve::serve;
pub use domain::beverages::{Cappuccino, Espresso, Latte};
pub use domain::model::{MenuItem, Order};
pub use domain::ports::{Beverage, MilkBeverage};
pub use utils::error::{MachineError, Result};
