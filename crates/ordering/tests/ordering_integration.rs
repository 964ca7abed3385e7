//! Integration tests for cart bookkeeping and order assembly.

use chrono::{NaiveDate, Utc};
use ordering::{
    Cart, CartError, CartLine, Customer, CustomerId, Money, NewCustomer, OrderAssembler,
    OrderStatus, ValidationError,
};

fn line(product: &str, color: &str, size: &str, quantity: u32, price: i64) -> CartLine {
    CartLine::new(
        product,
        format!("Product {product}"),
        format!("{product}-001"),
        color,
        size,
        quantity,
        Money::from_units(price),
    )
    .unwrap()
}

fn customer() -> Customer {
    Customer::register(
        CustomerId::new(),
        "owner-1".into(),
        NewCustomer {
            company_name: "Northern Footwear".to_string(),
            contact_person: "Sam Lee".to_string(),
            phone: "0161 496 0000".to_string(),
            email: "sam@northern.example".to_string(),
            delivery_address: "Unit 4, Mill Lane".to_string(),
            billing_address: "PO Box 12".to_string(),
            special_instructions: Some("Call ahead".to_string()),
        },
        Utc::now(),
    )
    .unwrap()
}

fn far_future() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2999, 6, 1)
}

mod cart_properties {
    use super::*;

    #[test]
    fn distinct_keys_sum_quantities_and_count_lines() {
        let colors = ["Red", "Black", "Navy"];
        let sizes = ["7", "8", "9", "10"];
        let mut cart = Cart::new();
        let mut expected_quantity = 0u64;

        for (i, color) in colors.iter().enumerate() {
            for (j, size) in sizes.iter().enumerate() {
                let quantity = (i * sizes.len() + j + 1) as u32;
                expected_quantity += u64::from(quantity);
                cart.add(line("A", color, size, quantity, 10));
            }
        }

        assert_eq!(cart.len(), colors.len() * sizes.len());
        assert_eq!(cart.total_quantity(), expected_quantity);
    }

    #[test]
    fn repeated_key_only_grows_quantity() {
        let mut cart = Cart::new();
        cart.add(line("A", "Red", "9", 1, 10));
        cart.add(line("B", "Red", "9", 1, 10));

        for extra in 1..=5 {
            let before = cart.lines()[1].quantity();
            cart.add(line("B", "Red", "9", extra, 10));
            assert_eq!(cart.len(), 2);
            assert_eq!(cart.lines()[1].quantity(), before + extra);
        }
    }

    #[test]
    fn merge_scenario_from_two_adds() {
        let mut cart = Cart::new();
        cart.add(line("A", "Red", "9", 2, 50));
        cart.add(line("A", "Red", "9", 3, 50));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity(), 5);
        assert_eq!(cart.lines()[0].line_total(), Money::from_units(250));
        assert_eq!(cart.total_amount(), Money::from_units(250));
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut cart = Cart::new();
        for product in ["A", "B", "C", "D", "E"] {
            cart.add(line(product, "Red", "9", 1, 10));
        }

        cart.remove_at(0).unwrap();
        cart.remove_at(2).unwrap();

        let remaining: Vec<_> = cart
            .lines()
            .iter()
            .map(|l| l.product_id().as_str())
            .collect();
        assert_eq!(remaining, ["B", "C", "E"]);
        assert!(matches!(
            cart.remove_at(3),
            Err(CartError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn set_quantity_reprices_only_that_line() {
        let mut cart = Cart::new();
        cart.add(line("A", "Red", "9", 1, 50));
        cart.add(line("B", "Navy", "M", 3, 25));
        let untouched = cart.lines()[1].line_total();

        cart.set_quantity(0, 6).unwrap();

        assert_eq!(cart.lines()[0].line_total(), Money::from_units(300));
        assert_eq!(cart.lines()[1].line_total(), untouched);
        assert_eq!(cart.total_amount(), Money::from_units(375));
    }
}

mod assembly {
    use super::*;

    #[test]
    fn order_snapshot_is_independent_of_later_cart_edits() {
        let customer = customer();
        let mut cart = Cart::new();
        cart.add(line("A", "Red", "9", 2, 50));
        cart.add(line("B", "Black", "L", 1, 65));

        let order = OrderAssembler::new()
            .assemble(Some(&customer), cart.lines(), far_future())
            .unwrap();

        cart.set_quantity(0, 40).unwrap();
        cart.clear();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.total_amount(), Money::from_units(165));
        let line_sum: Money = order.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(order.total_amount(), line_sum);
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn preconditions_are_validation_errors() {
        let customer = customer();
        let lines = vec![line("A", "Red", "9", 1, 10)];

        let no_customer = OrderAssembler::new().assemble(None, &lines, far_future());
        assert_eq!(no_customer.unwrap_err(), ValidationError::MissingCustomer);

        let no_date = OrderAssembler::new().assemble(Some(&customer), &lines, None);
        assert_eq!(no_date.unwrap_err(), ValidationError::MissingDeliveryDate);
    }

    #[test]
    fn order_serializes_for_export() {
        let customer = customer();
        let order = OrderAssembler::new()
            .with_signature("S. Lee")
            .assemble(Some(&customer), &[line("A", "Red", "9", 2, 50)], far_future())
            .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["total_amount"], 10_000);
        assert_eq!(json["signature"], "S. Lee");
        assert_eq!(json["order_number"], order.order_number().as_str());
    }
}
