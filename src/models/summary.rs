use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub item: String,
    pub quantity: u32,
    pub unit_price: u32,
    pub line_total: u64,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} x ${} = ${}",
            self.item, self.quantity, self.unit_price, self.line_total
        )
    }
}

/// Priced view of an order. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub customer_name: String,
    pub lines: Vec<SummaryLine>,
    pub grand_total: u64,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The "Ordered Items:" block shown while an order is being built.
    pub fn ordered_items(&self) -> String {
        let mut output = String::from("Ordered Items:\n");
        for line in &self.lines {
            output.push_str(&format!("{}\n", line));
        }
        output
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer Name: {}", self.customer_name)?;
        write!(f, "{}", self.ordered_items())?;
        write!(f, "Total Price: ${}", self.grand_total)
    }
}

/// A submitted order, as exported to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub summary: OrderSummary,
}

impl OrderReceipt {
    pub fn new(order_id: Uuid, summary: OrderSummary) -> Self {
        Self {
            order_id,
            submitted_at: Utc::now(),
            summary,
        }
    }
}
