use crate::application::order::OrderService;
use crate::domain::payment::PaymentKind;
use crate::domain::pizza::{Pizza, PizzaKind};
use crate::domain::topping::Topping;
use crate::error::{PizzeriaError, Result};
use std::io::{BufRead, Write};

/// Interactive ordering loop over any line-based input and output.
///
/// Runs until the customer picks `0` at the base-pizza prompt or the input
/// ends. Input is read with blocking `read_line` calls on the calling task,
/// so the console must own its runtime thread; the binary runs nothing else
/// alongside it.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub async fn run(&mut self, service: &OrderService) -> Result<()> {
        writeln!(self.output, "Welcome to the Pizza Restaurant!")?;

        loop {
            let Some(mut pizza) = self.choose_pizza(service).await? else {
                break;
            };
            if !self.choose_toppings(service, &mut pizza).await? {
                break;
            }

            writeln!(self.output, "\nYour order:")?;
            writeln!(self.output, "Description: {}", pizza.description())?;
            writeln!(self.output, "Total cost: {}", pizza.cost())?;

            let Some(kind) = self.choose_payment()? else {
                break;
            };
            let receipt = service.checkout(&pizza, kind.strategy().as_ref())?;
            writeln!(
                self.output,
                "\nPaying {} using {}...",
                receipt.amount, receipt.method
            )?;
            writeln!(self.output, "{}\n", receipt.confirmation())?;

            let inventory = serde_json::to_string(&service.inventory().await?)?;
            writeln!(self.output, "Remaining Inventory: {}", inventory)?;
        }

        self.output.flush()?;
        Ok(())
    }

    /// Returns `None` when the customer exits or input runs out.
    async fn choose_pizza(&mut self, service: &OrderService) -> Result<Option<Pizza>> {
        loop {
            writeln!(self.output, "\nChoose your base pizza:")?;
            for (i, kind) in PizzaKind::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {} ({})", i + 1, kind, kind.base_cost())?;
            }
            writeln!(self.output, "0 => to exit")?;

            let Some(choice) = self.prompt("Enter the number of your choice: ")? else {
                return Ok(None);
            };
            if choice == "0" {
                return Ok(None);
            }

            let Some(kind) = menu_pick(&PizzaKind::ALL, &choice) else {
                writeln!(self.output, "Invalid input. Try again.")?;
                continue;
            };
            match service.start_pizza(kind.label()).await {
                Ok(pizza) => return Ok(Some(pizza)),
                Err(PizzeriaError::OutOfStock(item)) => {
                    writeln!(self.output, "{} is out of stock!", item)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns `false` if input ran out before the customer finished.
    async fn choose_toppings(&mut self, service: &OrderService, pizza: &mut Pizza) -> Result<bool> {
        let finish = Topping::ALL.len() + 1;
        loop {
            writeln!(self.output, "\nAvailable toppings:")?;
            for (i, topping) in Topping::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {} ({})", i + 1, topping, topping.price())?;
            }
            writeln!(self.output, "{}. Finish order", finish)?;

            let Some(choice) = self.prompt("Enter the number of your choice: ")? else {
                return Ok(false);
            };
            if choice == finish.to_string() {
                return Ok(true);
            }

            let Some(topping) = menu_pick(&Topping::ALL, &choice) else {
                writeln!(self.output, "Invalid topping choice!")?;
                continue;
            };
            match service.add_topping(pizza, topping.label()).await {
                Ok(_) => {}
                Err(PizzeriaError::OutOfStock(item)) => {
                    writeln!(self.output, "{} out of stock!", item)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns `None` if input ran out before a method was picked.
    fn choose_payment(&mut self) -> Result<Option<PaymentKind>> {
        writeln!(self.output, "\nChoose Payment Method:")?;
        for (i, kind) in PaymentKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }

        let Some(choice) = self.prompt("Enter payment method: ")? else {
            return Ok(None);
        };
        match menu_pick(&PaymentKind::ALL, &choice) {
            Some(kind) => Ok(Some(kind)),
            None => {
                let fallback = PaymentKind::default();
                writeln!(self.output, "Invalid choice! Defaulting to {}.", fallback)?;
                Ok(Some(fallback))
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Maps a 1-based menu number to its entry.
fn menu_pick<T: Copy>(items: &[T], choice: &str) -> Option<T> {
    let index: usize = choice.parse().ok()?;
    index.checked_sub(1).and_then(|i| items.get(i)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::factory::SimplePizzaFactory;
    use crate::infrastructure::in_memory::InMemoryInventoryStore;

    async fn run_session(store: InMemoryInventoryStore, input: &str) -> String {
        let service = OrderService::new(Box::new(SimplePizzaFactory::new()), Box::new(store));
        let mut output = Vec::new();
        Console::new(input.as_bytes(), &mut output)
            .run(&service)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_pick() {
        assert_eq!(menu_pick(&PizzaKind::ALL, "1"), Some(PizzaKind::Margherita));
        assert_eq!(menu_pick(&PizzaKind::ALL, "2"), Some(PizzaKind::Pepperoni));
        assert_eq!(menu_pick(&PizzaKind::ALL, "0"), None);
        assert_eq!(menu_pick(&PizzaKind::ALL, "3"), None);
        assert_eq!(menu_pick(&PizzaKind::ALL, "x"), None);
    }

    #[tokio::test]
    async fn test_full_order_session() {
        let output = run_session(InMemoryInventoryStore::stocked(), "1\n1\n2\n4\n2\n0\n").await;

        assert!(output.contains("Welcome to the Pizza Restaurant!"));
        assert!(output.contains("1. Margherita ($5.00)"));
        assert!(output.contains("Description: Margherita Pizza with Cheese, Olives"));
        assert!(output.contains("Total cost: $6.50"));
        assert!(output.contains("Paying $6.50 using Credit Card..."));
        assert!(output.contains("Payment successful via Credit Card!"));
        assert!(output.contains("\"Cheese\":14"));
        assert!(output.contains("\"Margherita\":9"));
    }

    #[tokio::test]
    async fn test_invalid_payment_defaults_to_paypal() {
        let output = run_session(InMemoryInventoryStore::stocked(), "2\n4\n9\n0\n").await;

        assert!(output.contains("Invalid choice! Defaulting to PayPal."));
        assert!(output.contains("Payment successful via PayPal!"));
    }

    #[tokio::test]
    async fn test_out_of_stock_and_invalid_choices() {
        let store = InMemoryInventoryStore::with_levels([("Margherita", 0), ("Pepperoni", 1)]);
        let output = run_session(store, "7\n1\n2\n3\n8\n4\n1\n0\n").await;

        assert!(output.contains("Invalid input. Try again."));
        assert!(output.contains("Margherita is out of stock!"));
        assert!(output.contains("Mushrooms out of stock!"));
        assert!(output.contains("Invalid topping choice!"));
        assert!(output.contains("Description: Pepperoni Pizza\n"));
        assert!(output.contains("Payment successful via PayPal!"));
    }

    #[tokio::test]
    async fn test_end_of_input_at_payment_does_not_charge() {
        let output = run_session(InMemoryInventoryStore::stocked(), "1\n4\n").await;

        assert!(output.contains("Choose Payment Method:"));
        assert!(!output.contains("Defaulting to"));
        assert!(!output.contains("Payment successful"));
        assert!(!output.contains("Remaining Inventory"));
    }

    #[tokio::test]
    async fn test_exit_immediately() {
        let output = run_session(InMemoryInventoryStore::stocked(), "0\n").await;
        assert!(!output.contains("Your order:"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits_cleanly() {
        let output = run_session(InMemoryInventoryStore::stocked(), "").await;
        assert!(output.contains("Welcome to the Pizza Restaurant!"));
        assert!(!output.contains("Your order:"));
    }
}
