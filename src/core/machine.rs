use crate::core::{Beverage, MilkBeverage};

/// Bound coordinator: holds one injected beverage and delegates to it.
/// Generic over the capability contract, never over concrete variants,
/// so adding a beverage requires no change here.
pub struct CoffeeMachine<B: Beverage> {
    beverage: B,
}

impl<B: Beverage> CoffeeMachine<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }

    pub fn prepare(&self) -> String {
        let message = self.beverage.prepare();
        tracing::debug!("machine prepared: {}", message);
        message
    }
}

/// The milk operation only exists for machines loaded with a
/// milk-capable beverage, so an invalid call never compiles:
///
/// ```compile_fail
/// use coffee_machine::{CoffeeMachine, Espresso};
///
/// let machine = CoffeeMachine::new(Espresso);
/// machine.add_milk(); // Espresso does not implement MilkBeverage
/// ```
impl<B: MilkBeverage> CoffeeMachine<B> {
    pub fn add_milk(&self) -> String {
        let message = self.beverage.add_milk();
        tracing::debug!("machine added milk: {}", message);
        message
    }
}
