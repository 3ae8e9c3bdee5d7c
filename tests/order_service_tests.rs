use std::sync::Arc;

use restaurant_order_cli::models::{Catalog, OrderError};
use restaurant_order_cli::services::OrderService;

fn new_service() -> OrderService {
    OrderService::new(Arc::new(Catalog::default()))
}

#[test]
fn test_burger_and_soda_order() {
    let mut service = new_service();

    service.add_item("Burger", 2).unwrap();
    service.add_item("Soda", 3).unwrap();
    service.add_item("Burger", 1).unwrap();

    let summary = service.summarize().unwrap();
    let lines: Vec<String> = summary.lines.iter().map(|line| line.to_string()).collect();

    assert_eq!(lines, vec!["Burger: 3 x $10 = $30", "Soda: 3 x $2 = $6"]);
    assert_eq!(summary.grand_total, 36);
}

#[test]
fn test_reset_clears_customer_and_lines() {
    let mut service = new_service();

    service.set_customer_name("Alex");
    service.add_item("Pizza", 1).unwrap();
    service.reset();

    let summary = service.summarize().unwrap();
    assert_eq!(summary.customer_name, "");
    assert!(summary.lines.is_empty());
    assert_eq!(summary.grand_total, 0);
}

#[test]
fn test_invalid_inputs() {
    let mut service = new_service();

    assert!(matches!(
        service.add_item("Fries", 0),
        Err(OrderError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        service.add_item("Fries", -1),
        Err(OrderError::InvalidQuantity { .. })
    ));
    assert!(matches!(
        service.add_item("Nonexistent", 1),
        Err(OrderError::UnknownItem { .. })
    ));
    assert!(matches!(
        service.add_item_from_input("Fries", "lots"),
        Err(OrderError::InvalidQuantity { .. })
    ));

    // rejected adds leave the order untouched
    assert!(service.is_empty());
}

#[test]
fn test_summary_is_idempotent() {
    let mut service = new_service();
    service.set_customer_name("Jordan");
    service.add_item("Ice Cream", 2).unwrap();
    service.add_item("Fries", 1).unwrap();

    let first = service.summarize().unwrap();
    let second = service.summarize().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_full_summary_text() {
    let mut service = new_service();
    service.set_customer_name("Alex");
    service.add_item("Burger", 2).unwrap();
    service.add_item("Soda", 3).unwrap();
    service.add_item("Burger", 1).unwrap();

    let text = service.summarize().unwrap().to_string();
    assert_eq!(
        text,
        "Customer Name: Alex\n\
         Ordered Items:\n\
         Burger: 3 x $10 = $30\n\
         Soda: 3 x $2 = $6\n\
         Total Price: $36"
    );
}

#[test]
fn test_order_can_be_reused_after_reset() {
    let mut service = new_service();
    service.add_item("Soda", 5).unwrap();
    service.reset();

    assert_eq!(service.add_item("Soda", 1).unwrap(), 1);
    assert_eq!(service.summarize().unwrap().grand_total, 2);
}
