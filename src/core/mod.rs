pub mod dispense;
pub mod machine;
pub mod serve;

pub use crate::domain::model::{MenuItem, Order};
pub use crate::domain::ports::{Beverage, MilkBeverage};
pub use crate::utils::error::Result;
