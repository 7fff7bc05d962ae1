use crate::core::{Beverage, MilkBeverage};

/// Stateless dispatch: accept anything satisfying the beverage contract
/// and forward its message. Pure pass-through, no transformation.
pub fn prepare_coffee<B: Beverage>(beverage: &B) -> String {
    beverage.prepare()
}

/// Stateless milk dispatch, statically limited to milk-capable
/// beverages.
pub fn add_milk<B: MilkBeverage>(beverage: &B) -> String {
    beverage.add_milk()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::beverages::{Cappuccino, Espresso, Latte};

    #[test]
    fn test_dispatch_is_pass_through() {
        assert_eq!(prepare_coffee(&Espresso), Espresso.prepare());
        assert_eq!(prepare_coffee(&Cappuccino), Cappuccino.prepare());
        assert_eq!(prepare_coffee(&Latte), Latte.prepare());
    }

    #[test]
    fn test_milk_dispatch_is_pass_through() {
        assert_eq!(add_milk(&Cappuccino), Cappuccino.add_milk());
        assert_eq!(add_milk(&Latte), Latte.add_milk());
    }

    #[test]
    fn test_new_variant_needs_no_dispatcher_change() {
        struct Ristretto;

        impl Beverage for Ristretto {
            fn prepare(&self) -> String {
                "Preparing a Ristretto...".to_string()
            }
        }

        assert_eq!(prepare_coffee(&Ristretto), "Preparing a Ristretto...");
    }
}
