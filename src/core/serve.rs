use crate::core::machine::CoffeeMachine;
use crate::core::{MenuItem, Order, Result};
use crate::domain::beverages::{Cappuccino, Espresso, Latte};
use crate::utils::error::MachineError;

/// Composition root: map a menu item to its concrete variant and drive
/// a machine through the order, collecting the emitted messages.
///
/// This is the only place that names concrete variants. The match picks
/// which beverage to load into the machine; it never decides how the
/// machine behaves. Ordering milk with a beverage that lacks the milk
/// capability is an error, not a no-op.
pub fn serve(order: &Order) -> Result<Vec<String>> {
    tracing::info!("serving order: {} (milk: {})", order.item, order.milk);

    if order.milk && !order.item.takes_milk() {
        return Err(MachineError::MilkNotSupported {
            beverage: order.item.to_string(),
        });
    }

    let messages = match order.item {
        MenuItem::Espresso => {
            let machine = CoffeeMachine::new(Espresso);
            vec![machine.prepare()]
        }
        MenuItem::Cappuccino => {
            let machine = CoffeeMachine::new(Cappuccino);
            let mut messages = vec![machine.prepare()];
            if order.milk {
                messages.push(machine.add_milk());
            }
            messages
        }
        MenuItem::Latte => {
            let machine = CoffeeMachine::new(Latte);
            let mut messages = vec![machine.prepare()];
            if order.milk {
                messages.push(machine.add_milk());
            }
            messages
        }
    };

    Ok(messages)
}
