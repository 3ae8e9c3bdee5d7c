use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::order::OrderError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub unit_price: u32,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, unit_price: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// Fixed menu of items and their unit prices.
///
/// Entries keep their declaration order; there is no way to change a catalog
/// once it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, OrderError> {
        if entries.is_empty() {
            return Err(OrderError::InvalidCatalog {
                message: "catalog must contain at least one item".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(OrderError::InvalidCatalog {
                    message: "item names must not be blank".to_string(),
                });
            }
            if entry.unit_price == 0 {
                return Err(OrderError::InvalidCatalog {
                    message: format!("'{}' must have a positive price", entry.name),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(OrderError::InvalidCatalog {
                    message: format!("'{}' is listed more than once", entry.name),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn price_of(&self, item: &str) -> Result<u32, OrderError> {
        self.entry(item)
            .map(|entry| entry.unit_price)
            .ok_or_else(|| OrderError::UnknownItem {
                item: item.to_string(),
            })
    }

    pub fn items(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entry(item).is_some()
    }

    /// First declared item, used as the initial selection.
    pub fn default_item(&self) -> &str {
        // `new` rejects empty catalogs
        &self.entries[0].name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, item: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new("Fries", 5),
                CatalogEntry::new("Burger", 10),
                CatalogEntry::new("Soda", 2),
                CatalogEntry::new("Pizza", 12),
                CatalogEntry::new("Ice Cream", 4),
            ],
        }
    }
}
