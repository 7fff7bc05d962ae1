// Domain layer: menu model, capability contracts (ports) and the
// beverage variants implementing them. No dependencies beyond std/serde.

pub mod beverages;
pub mod model;
pub mod ports;
