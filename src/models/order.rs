use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;
use validator::Validate;

/// Largest cumulative quantity a single item may reach in one order.
pub const MAX_ITEM_QUANTITY: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Invalid quantity '{input}': quantity must be a positive whole number")]
    InvalidQuantity { input: String },

    #[error("Unknown item '{item}'")]
    UnknownItem { item: String },

    #[error("Invalid catalog: {message}")]
    InvalidCatalog { message: String },
}

// request dto
#[derive(Debug, Validate)]
pub struct AddItemRequest {
    pub item: String,

    #[validate(range(min = 1, max = 1000000, message = "Quantity must be between 1 and 1000000"))]
    pub quantity: i64,
}

impl AddItemRequest {
    pub fn new(item: impl Into<String>, quantity: i64) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }

    /// Builds a request from free-form text such as a prompt answer.
    pub fn from_input(item: impl Into<String>, input: &str) -> Result<Self, OrderError> {
        let quantity = input
            .trim()
            .parse::<i64>()
            .map_err(|_| OrderError::InvalidQuantity {
                input: input.to_string(),
            })?;
        Ok(Self::new(item, quantity))
    }

    /// Checks the quantity and returns it as a stored quantity.
    pub fn checked_quantity(&self) -> Result<u32, OrderError> {
        let invalid = || OrderError::InvalidQuantity {
            input: self.quantity.to_string(),
        };

        self.validate().map_err(|_| invalid())?;
        u32::try_from(self.quantity).map_err(|_| invalid())
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    customer_name: String,
    lines: IndexMap<String, u32>,
    opened_at: DateTime<Utc>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: String::new(),
            lines: IndexMap::new(),
            opened_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Ordered lines, in the order each item was first added.
    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines.iter().map(|(item, quantity)| (item.as_str(), *quantity))
    }

    pub fn quantity_of(&self, item: &str) -> u32 {
        self.lines.get(item).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn set_customer_name(&mut self, name: String) {
        self.customer_name = name;
    }

    /// Adds `quantity` to the line for `item` and returns the new total for it.
    /// Catalog membership is checked by the caller.
    pub(crate) fn accumulate(&mut self, item: &str, quantity: u32) -> Result<u32, OrderError> {
        let current = self.quantity_of(item);
        let updated = current
            .checked_add(quantity)
            .filter(|total| *total <= MAX_ITEM_QUANTITY)
            .ok_or_else(|| OrderError::InvalidQuantity {
                input: quantity.to_string(),
            })?;

        self.lines.insert(item.to_string(), updated);
        Ok(updated)
    }

    /// Starts over with a fresh, empty order.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}
