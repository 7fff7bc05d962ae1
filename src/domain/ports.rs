/// Capability contract every beverage satisfies: produce a descriptive
/// preparation message. Printing the text is the caller's business.
pub trait Beverage {
    fn prepare(&self) -> String;
}

/// Extended contract for beverages that take milk. The supertrait bound
/// keeps every milk-capable beverage a [`Beverage`] as well, so the
/// milk operation is only reachable through a type that declared the
/// capability.
pub trait MilkBeverage: Beverage {
    fn add_milk(&self) -> String;
}
