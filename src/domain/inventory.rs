use super::pizza::PizzaKind;
use super::topping::Topping;
use std::collections::BTreeMap;

/// Opening stock for every pizza and topping on the menu.
pub fn default_stock() -> BTreeMap<String, u32> {
    PizzaKind::ALL
        .iter()
        .map(|k| (k.label(), default_level_for_pizza(*k)))
        .chain(
            Topping::ALL
                .iter()
                .map(|t| (t.label(), default_level_for_topping(*t))),
        )
        .map(|(label, level)| (label.to_string(), level))
        .collect()
}

fn default_level_for_pizza(kind: PizzaKind) -> u32 {
    match kind {
        PizzaKind::Margherita | PizzaKind::Pepperoni => 10,
    }
}

fn default_level_for_topping(topping: Topping) -> u32 {
    match topping {
        Topping::Cheese => 15,
        Topping::Olives => 10,
        Topping::Mushrooms => 12,
    }
}
