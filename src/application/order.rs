use crate::domain::factory::PizzaFactoryBox;
use crate::domain::money::Amount;
use crate::domain::order::{OrderReceipt, OrderRequest};
use crate::domain::payment::{PaymentKind, PaymentMethod, PaymentReceipt};
use crate::domain::pizza::Pizza;
use crate::domain::ports::InventoryStoreBox;
use crate::domain::topping::Topping;
use crate::error::{PizzeriaError, Result};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// The main entry point for taking orders.
///
/// `OrderService` owns the pizza factory and the inventory. Every pizza or
/// topping it hands out has already been taken from stock.
pub struct OrderService {
    factory: PizzaFactoryBox,
    inventory: InventoryStoreBox,
}

impl OrderService {
    /// Creates a new `OrderService` instance.
    ///
    /// # Arguments
    ///
    /// * `factory` - Builds pizzas from menu labels.
    /// * `inventory` - Stock levels for pizzas and toppings.
    pub fn new(factory: PizzaFactoryBox, inventory: InventoryStoreBox) -> Self {
        Self { factory, inventory }
    }

    /// Builds the pizza named by `label` and takes one from stock.
    pub async fn start_pizza(&self, label: &str) -> Result<Pizza> {
        let pizza = self.factory.create_pizza(label)?;
        let item = pizza.kind().label();
        if !self.inventory.take(item).await? {
            return Err(PizzeriaError::OutOfStock(item.to_string()));
        }
        Ok(pizza)
    }

    /// Takes the topping named by `label` from stock and puts it on the pizza.
    pub async fn add_topping(&self, pizza: &mut Pizza, label: &str) -> Result<Topping> {
        let topping: Topping = label.parse()?;
        self.put_topping(pizza, topping).await?;
        Ok(topping)
    }

    async fn put_topping(&self, pizza: &mut Pizza, topping: Topping) -> Result<()> {
        if !self.inventory.take(topping.label()).await? {
            return Err(PizzeriaError::OutOfStock(topping.label().to_string()));
        }
        pizza.add_topping(topping.label());
        Ok(())
    }

    /// Charges the pizza's total through whichever payment method was chosen.
    pub fn checkout(&self, pizza: &Pizza, method: &dyn PaymentMethod) -> Result<PaymentReceipt> {
        let amount = Amount::try_from(pizza.cost())?;
        Ok(method.pay(amount))
    }

    /// Places a whole order in one go.
    ///
    /// Every label is checked before any stock is taken, so a rejected order
    /// leaves the inventory as it was. A topping that runs out is left off
    /// with a warning; a pizza that runs out fails the order.
    pub async fn place(&self, request: &OrderRequest) -> Result<OrderReceipt> {
        let payment: PaymentKind = request.payment.parse()?;
        let toppings = request
            .toppings
            .iter()
            .map(|t| t.parse::<Topping>())
            .collect::<Result<Vec<_>>>()?;

        let mut pizza = self.start_pizza(&request.pizza).await?;
        for topping in toppings {
            match self.put_topping(&mut pizza, topping).await {
                Ok(()) => {}
                Err(PizzeriaError::OutOfStock(item)) => {
                    warn!(%item, "topping out of stock, leaving it off");
                }
                Err(e) => return Err(e),
            }
        }

        let receipt = self.checkout(&pizza, payment.strategy().as_ref())?;
        let description = pizza.description();
        info!(%description, total = %pizza.cost(), "order placed");

        Ok(OrderReceipt {
            description,
            total: pizza.cost(),
            payment: receipt,
        })
    }

    /// Remaining stock, ordered by item label.
    pub async fn inventory(&self) -> Result<BTreeMap<String, u32>> {
        self.inventory.snapshot().await
    }
}
