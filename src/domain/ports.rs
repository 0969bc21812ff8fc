use crate::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Stock levels for pizzas and toppings, keyed by menu label.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Takes one unit of `item` if any is left.
    ///
    /// Returns `false` and leaves the level untouched when the item is
    /// exhausted or unknown.
    async fn take(&self, item: &str) -> Result<bool>;
    async fn level(&self, item: &str) -> Result<u32>;
    async fn snapshot(&self) -> Result<BTreeMap<String, u32>>;
}

pub type InventoryStoreBox = Box<dyn InventoryStore>;
