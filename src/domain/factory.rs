use super::pizza::{Pizza, PizzaKind};
use crate::error::Result;

/// Decides which pizza to build for a menu label.
///
/// Callers only ever see [`Pizza`]; which kind backs it is the factory's call.
pub trait PizzaFactory: Send + Sync {
    fn create_pizza(&self, label: &str) -> Result<Pizza>;
}

pub type PizzaFactoryBox = Box<dyn PizzaFactory>;

/// Maps "margherita" and "pepperoni" (any case) to a fresh pizza.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePizzaFactory;

impl SimplePizzaFactory {
    pub fn new() -> Self {
        Self
    }
}

impl PizzaFactory for SimplePizzaFactory {
    fn create_pizza(&self, label: &str) -> Result<Pizza> {
        let kind: PizzaKind = label.parse()?;
        Ok(Pizza::new(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PizzeriaError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_known_pizzas() {
        let factory = SimplePizzaFactory::new();

        let margherita = factory.create_pizza("margherita").unwrap();
        assert_eq!(margherita.name(), "Margherita Pizza");
        assert_eq!(margherita.base_cost().value(), dec!(5.0));
        assert!(margherita.toppings().is_empty());

        let pepperoni = factory.create_pizza("Pepperoni").unwrap();
        assert_eq!(pepperoni.name(), "Pepperoni Pizza");
        assert_eq!(pepperoni.base_cost().value(), dec!(6.0));
    }

    #[test]
    fn test_create_ignores_case_and_whitespace() {
        let factory = SimplePizzaFactory::new();
        let pizza = factory.create_pizza("  MARGHERITA ").unwrap();
        assert_eq!(pizza.kind(), PizzaKind::Margherita);
    }

    #[test]
    fn test_unknown_label_is_invalid_input() {
        let factory = SimplePizzaFactory::new();
        let err = factory.create_pizza("hawaiian").unwrap_err();
        assert!(matches!(err, PizzeriaError::UnknownPizza(ref label) if label == "hawaiian"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_each_call_returns_a_fresh_pizza() {
        let factory: PizzaFactoryBox = Box::new(SimplePizzaFactory::new());
        let mut first = factory.create_pizza("margherita").unwrap();
        first.add_topping("Cheese");

        let second = factory.create_pizza("margherita").unwrap();
        assert!(second.toppings().is_empty());
    }
}
