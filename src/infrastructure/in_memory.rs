use crate::domain::inventory::default_stock;
use crate::domain::ports::InventoryStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A thread-safe in-memory inventory.
///
/// Uses `Arc<RwLock<HashMap<String, u32>>>` so clones share the same levels.
#[derive(Default, Clone)]
pub struct InMemoryInventoryStore {
    levels: Arc<RwLock<HashMap<String, u32>>>,
}

impl InMemoryInventoryStore {
    /// Creates an inventory holding the given levels.
    pub fn with_levels<I, K>(levels: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        let levels = levels.into_iter().map(|(k, v)| (k.into(), v)).collect();
        Self {
            levels: Arc::new(RwLock::new(levels)),
        }
    }

    /// Creates an inventory stocked with the restaurant's opening levels.
    pub fn stocked() -> Self {
        Self::with_levels(default_stock())
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn take(&self, item: &str) -> Result<bool> {
        let mut levels = self.levels.write().await;
        match levels.get_mut(item) {
            Some(level) if *level > 0 => {
                *level -= 1;
                debug!(item, remaining = *level, "stock taken");
                Ok(true)
            }
            _ => {
                debug!(item, "stock exhausted");
                Ok(false)
            }
        }
    }

    async fn level(&self, item: &str) -> Result<u32> {
        let levels = self.levels.read().await;
        Ok(levels.get(item).copied().unwrap_or(0))
    }

    async fn snapshot(&self) -> Result<BTreeMap<String, u32>> {
        let levels = self.levels.read().await;
        Ok(levels.iter().map(|(k, v)| (k.clone(), *v)).collect())
    }
}
