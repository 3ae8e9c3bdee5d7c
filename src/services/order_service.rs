use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{AddItemRequest, Catalog, Order, OrderError, OrderSummary, SummaryLine};

/// Drives a single order against a shared, read-only catalog.
pub struct OrderService {
    catalog: Arc<Catalog>,
    order: Order,
}

impl OrderService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            order: Order::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn price_of(&self, item: &str) -> Result<u32, OrderError> {
        self.catalog.price_of(item)
    }

    pub fn quantity_of(&self, item: &str) -> u32 {
        self.order.quantity_of(item)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add `quantity` units of `item` and return the item's new cumulative quantity.
    pub fn add_item(&mut self, item: &str, quantity: i64) -> Result<u32, OrderError> {
        self.add(AddItemRequest::new(item, quantity))
    }

    /// Same as [`OrderService::add_item`], with the quantity still as typed by the user.
    pub fn add_item_from_input(&mut self, item: &str, input: &str) -> Result<u32, OrderError> {
        let request = AddItemRequest::from_input(item, input).map_err(|e| {
            warn!("Rejected quantity input '{}' for {}", input, item);
            e
        })?;
        self.add(request)
    }

    pub fn add(&mut self, request: AddItemRequest) -> Result<u32, OrderError> {
        let quantity = request.checked_quantity().map_err(|e| {
            warn!("Rejected quantity {} for {}", request.quantity, request.item);
            e
        })?;

        if !self.catalog.contains(&request.item) {
            warn!("Rejected unknown item '{}'", request.item);
            return Err(OrderError::UnknownItem { item: request.item });
        }

        let total = self.order.accumulate(&request.item, quantity)?;
        info!(
            "Order {}: added {} x {} (now {})",
            self.order.id(),
            quantity,
            request.item,
            total
        );
        Ok(total)
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Order {}: customer name set to '{}'", self.order.id(), name);
        self.order.set_customer_name(name);
    }

    pub fn reset(&mut self) {
        let previous = self.order.id();
        self.order.clear();
        info!("Order {} reset; new order {}", previous, self.order.id());
    }

    pub fn summarize(&self) -> Result<OrderSummary, OrderError> {
        let lines = self
            .order
            .lines()
            .map(|(item, quantity)| {
                let unit_price = self.catalog.price_of(item)?;
                Ok(SummaryLine {
                    item: item.to_string(),
                    quantity,
                    unit_price,
                    line_total: u64::from(quantity) * u64::from(unit_price),
                })
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        let grand_total = lines.iter().map(|line| line.line_total).sum();

        debug!(
            "Order {}: {} line(s), total ${}",
            self.order.id(),
            lines.len(),
            grand_total
        );

        Ok(OrderSummary {
            customer_name: self.order.customer_name().to_string(),
            lines,
            grand_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;
    use proptest::prelude::*;

    fn service() -> OrderService {
        OrderService::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_add_item_returns_cumulative_quantity() {
        let mut service = service();

        assert_eq!(service.add_item("Burger", 2).unwrap(), 2);
        assert_eq!(service.add_item("Burger", 1).unwrap(), 3);
        assert_eq!(service.quantity_of("Burger"), 3);
    }

    #[test]
    fn test_add_item_rejects_zero_and_negative() {
        let mut service = service();

        assert!(matches!(
            service.add_item("Burger", 0),
            Err(OrderError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            service.add_item("Burger", -1),
            Err(OrderError::InvalidQuantity { .. })
        ));
        assert!(service.is_empty());
    }

    #[test]
    fn test_add_item_rejects_unknown_item() {
        let mut service = service();

        let result = service.add_item("Nonexistent", 1);
        assert!(matches!(result, Err(OrderError::UnknownItem { item }) if item == "Nonexistent"));
        assert!(service.is_empty());
    }

    #[test]
    fn test_quantity_checked_before_item() {
        let mut service = service();
        assert!(matches!(
            service.add_item("Nonexistent", 0),
            Err(OrderError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_add_item_from_input() {
        let mut service = service();

        assert_eq!(service.add_item_from_input("Soda", "4").unwrap(), 4);
        assert!(matches!(
            service.add_item_from_input("Soda", "four"),
            Err(OrderError::InvalidQuantity { input }) if input == "four"
        ));
        assert!(matches!(
            service.add_item_from_input("Soda", "-2"),
            Err(OrderError::InvalidQuantity { .. })
        ));
        assert_eq!(service.quantity_of("Soda"), 4);
    }

    #[test]
    fn test_customer_name_is_stored_verbatim() {
        let mut service = service();

        service.set_customer_name("  Alex  ");
        assert_eq!(service.summarize().unwrap().customer_name, "  Alex  ");

        service.set_customer_name("");
        assert_eq!(service.summarize().unwrap().customer_name, "");
    }

    #[test]
    fn test_summary_follows_first_insertion_order() {
        let mut service = service();
        service.add_item("Soda", 1).unwrap();
        service.add_item("Fries", 2).unwrap();
        service.add_item("Soda", 1).unwrap();

        let summary = service.summarize().unwrap();
        let items: Vec<_> = summary.lines.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(items, vec!["Soda", "Fries"]);
        assert_eq!(summary.grand_total, 2 * 2 + 2 * 5);
    }

    #[test]
    fn test_orders_sharing_a_catalog_are_independent() {
        let catalog = Arc::new(Catalog::default());
        let mut first = OrderService::new(catalog.clone());
        let mut second = OrderService::new(catalog);

        first.add_item("Pizza", 2).unwrap();
        second.add_item("Fries", 1).unwrap();

        assert_eq!(first.quantity_of("Fries"), 0);
        assert_eq!(second.quantity_of("Pizza"), 0);
        assert_ne!(first.order().id(), second.order().id());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("Tea", 3),
            CatalogEntry::new("Cake", 7),
        ])
        .unwrap();
        let mut service = OrderService::new(Arc::new(catalog));

        service.add_item("Cake", 2).unwrap();
        assert!(service.add_item("Burger", 1).is_err());
        assert_eq!(service.summarize().unwrap().grand_total, 14);
    }

    #[test]
    fn test_summarize_reports_items_missing_from_catalog() {
        let mut service = service();
        service.add_item("Soda", 1).unwrap();
        service.order.accumulate("Tacos", 1).unwrap();

        let result = service.summarize();
        assert!(matches!(result, Err(OrderError::UnknownItem { item }) if item == "Tacos"));
    }

    fn catalog_item() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec!["Fries", "Burger", "Soda", "Pizza", "Ice Cream"])
    }

    proptest! {
        #[test]
        fn prop_repeated_adds_sum(quantities in prop::collection::vec(1i64..500, 1..20)) {
            let mut service = service();
            let mut last = 0;
            for quantity in &quantities {
                last = service.add_item("Burger", *quantity).unwrap();
            }
            let expected: i64 = quantities.iter().sum();
            prop_assert_eq!(i64::from(last), expected);
            prop_assert_eq!(i64::from(service.quantity_of("Burger")), expected);
        }

        #[test]
        fn prop_grand_total_matches_lines(adds in prop::collection::vec((catalog_item(), 1i64..100), 0..30)) {
            let mut service = service();
            for (item, quantity) in &adds {
                service.add_item(item, *quantity).unwrap();
            }

            let summary = service.summarize().unwrap();
            let line_sum: u64 = summary.lines.iter().map(|l| l.line_total).sum();
            prop_assert_eq!(summary.grand_total, line_sum);
            for line in &summary.lines {
                prop_assert_eq!(line.line_total, u64::from(line.quantity) * u64::from(line.unit_price));
            }

            prop_assert_eq!(service.summarize().unwrap(), summary);
        }

        #[test]
        fn prop_reset_empties_summary(adds in prop::collection::vec((catalog_item(), 1i64..100), 0..10), name in ".*") {
            let mut service = service();
            service.set_customer_name(name);
            for (item, quantity) in &adds {
                service.add_item(item, *quantity).unwrap();
            }

            service.reset();
            let summary = service.summarize().unwrap();
            prop_assert!(summary.lines.is_empty());
            prop_assert_eq!(summary.grand_total, 0);
            prop_assert_eq!(summary.customer_name, "");
        }
    }
}
