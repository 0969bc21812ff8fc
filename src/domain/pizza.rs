use super::money::Price;
use super::topping::Topping;
use crate::error::PizzeriaError;
use std::fmt;
use std::str::FromStr;

/// The base pizzas the kitchen knows how to make.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PizzaKind {
    Margherita,
    Pepperoni,
}

impl PizzaKind {
    /// Menu order.
    pub const ALL: [PizzaKind; 2] = [PizzaKind::Margherita, PizzaKind::Pepperoni];

    /// Short label used for menus and stock keeping.
    pub fn label(&self) -> &'static str {
        match self {
            PizzaKind::Margherita => "Margherita",
            PizzaKind::Pepperoni => "Pepperoni",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PizzaKind::Margherita => "Margherita Pizza",
            PizzaKind::Pepperoni => "Pepperoni Pizza",
        }
    }

    pub fn base_cost(&self) -> Price {
        match self {
            PizzaKind::Margherita => Price::from_cents(500),
            PizzaKind::Pepperoni => Price::from_cents(600),
        }
    }
}

impl FromStr for PizzaKind {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        PizzaKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| PizzeriaError::UnknownPizza(label.to_string()))
    }
}

impl fmt::Display for PizzaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A pizza being ordered.
///
/// Name and base cost are fixed by the [`PizzaKind`]; the only thing that
/// changes after creation is the topping list, which only ever grows.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pizza {
    kind: PizzaKind,
    toppings: Vec<String>,
}

impl Pizza {
    pub fn new(kind: PizzaKind) -> Self {
        Self {
            kind,
            toppings: Vec::new(),
        }
    }

    pub fn kind(&self) -> PizzaKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn base_cost(&self) -> Price {
        self.kind.base_cost()
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn add_topping(&mut self, topping: impl Into<String>) {
        self.toppings.push(topping.into());
    }

    /// Base name, plus `with a, b` when toppings were added.
    pub fn description(&self) -> String {
        if self.toppings.is_empty() {
            self.name().to_string()
        } else {
            format!("{} with {}", self.name(), self.toppings.join(", "))
        }
    }

    /// Base cost plus menu prices of the toppings.
    ///
    /// Toppings that are not on the menu are free.
    pub fn cost(&self) -> Price {
        let toppings: Price = self
            .toppings
            .iter()
            .filter_map(|t| t.parse::<Topping>().ok())
            .map(|t| t.price())
            .sum();
        self.base_cost() + toppings
    }
}
