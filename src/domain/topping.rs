use super::money::Price;
use crate::error::PizzeriaError;
use std::fmt;
use std::str::FromStr;

/// Toppings offered on the menu, each with a fixed price.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Topping {
    Cheese,
    Olives,
    Mushrooms,
}

impl Topping {
    /// Menu order.
    pub const ALL: [Topping; 3] = [Topping::Cheese, Topping::Olives, Topping::Mushrooms];

    pub fn label(&self) -> &'static str {
        match self {
            Topping::Cheese => "Cheese",
            Topping::Olives => "Olives",
            Topping::Mushrooms => "Mushrooms",
        }
    }

    pub fn price(&self) -> Price {
        match self {
            Topping::Cheese => Price::from_cents(100),
            Topping::Olives => Price::from_cents(50),
            Topping::Mushrooms => Price::from_cents(70),
        }
    }
}

impl FromStr for Topping {
    type Err = PizzeriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Topping::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| PizzeriaError::UnknownTopping(label.to_string()))
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
