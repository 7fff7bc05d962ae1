use crate::domain::ports::{Beverage, MilkBeverage};

/// Straight shot, no milk. Implements [`Beverage`] only, so milk
/// operations on it are rejected at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Espresso;

impl Beverage for Espresso {
    fn prepare(&self) -> String {
        "Preparing an Espresso...".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cappuccino;

impl Beverage for Cappuccino {
    fn prepare(&self) -> String {
        "Preparing a Cappuccino...".to_string()
    }
}

impl MilkBeverage for Cappuccino {
    fn add_milk(&self) -> String {
        "Adding milk to the Cappuccino...".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Latte;

impl Beverage for Latte {
    fn prepare(&self) -> String {
        "Preparing a Latte...".to_string()
    }
}

impl MilkBeverage for Latte {
    fn add_milk(&self) -> String {
        "Adding milk to the Latte...".to_string()
    }
}
