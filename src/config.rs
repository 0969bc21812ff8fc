use crate::domain::inventory::default_stock;
use crate::domain::pizza::PizzaKind;
use crate::domain::topping::Topping;
use crate::error::{PizzeriaError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Opening stock, optionally overridden from a TOML file:
///
/// ```toml
/// [stock]
/// Margherita = 2
/// Cheese = 0
/// ```
///
/// Item names are matched like menu labels (trimmed, any case). Items the
/// file does not mention keep their default level; items that are not on the
/// menu are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockConfig {
    #[serde(default)]
    pub stock: BTreeMap<String, u32>,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            stock: default_stock(),
        }
    }
}

impl StockConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let overrides: StockConfig = toml::from_str(content)?;
        let mut config = Self::default();
        for (item, level) in overrides.stock {
            config.stock.insert(menu_label(&item)?.to_string(), level);
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Resolves a stock key to the label the inventory is keyed by.
fn menu_label(item: &str) -> Result<&'static str> {
    if let Ok(kind) = item.parse::<PizzaKind>() {
        return Ok(kind.label());
    }
    if let Ok(topping) = item.parse::<Topping>() {
        return Ok(topping.label());
    }
    Err(PizzeriaError::ValidationError(format!(
        "Unknown stock item: {}",
        item.trim()
    )))
}
