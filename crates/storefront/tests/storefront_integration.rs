//! End-to-end tests of the ordering flow against the in-memory backend.

use backend::{Backend, BackendError, InMemoryBackend};
use catalog::{CatalogError, StockKey, StockStatus};
use chrono::{Days, Local, NaiveDate};
use ordering::{NewCustomer, OrderAssembler, ValidationError};
use storefront::{Config, SeedOutcome, Session, StockUpdate, Step, Storefront, StorefrontError};

fn details() -> NewCustomer {
    NewCustomer {
        company_name: "Baseline Sports".to_string(),
        contact_person: "Sam Okafor".to_string(),
        phone: "0161 555 0199".to_string(),
        email: "sam@baseline.example".to_string(),
        delivery_address: "Unit 7, Mill Lane".to_string(),
        billing_address: "Unit 7, Mill Lane".to_string(),
        special_instructions: Some("Deliver before noon".to_string()),
    }
}

fn next_week() -> Option<NaiveDate> {
    Local::now().date_naive().checked_add_days(Days::new(7))
}

fn signed() -> OrderAssembler {
    OrderAssembler::new().with_signature("S. Okafor")
}

/// Seeded storefront plus a handle on its backend for failure injection.
async fn setup() -> (Storefront<InMemoryBackend>, InMemoryBackend) {
    let backend = InMemoryBackend::new();
    let storefront = Storefront::new(backend.clone(), Config::default());
    storefront.seed_sample_catalog().await.unwrap();
    (storefront, backend)
}

/// Session with a registered customer and a loaded catalog.
async fn ready_session(storefront: &Storefront<InMemoryBackend>) -> Session {
    let mut session = storefront.start_session();
    storefront.load_catalog(&mut session).await.unwrap();
    storefront
        .register_customer(&mut session, details())
        .await
        .unwrap();
    session
}

/// Puts two distinct lines of the first product in the cart.
fn fill_cart(session: &mut Session) {
    let product = session.products()[0].clone();
    let color = product.colors()[0].clone();
    for size in &product.sizes()[..2] {
        session.add_to_cart(product.id(), &color, size, 2).unwrap();
    }
}

#[tokio::test]
async fn full_ordering_flow() {
    let (storefront, backend) = setup().await;
    let mut session = storefront.start_session();
    assert_eq!(session.step(), Step::CustomerInfo);

    storefront.load_catalog(&mut session).await.unwrap();
    assert_eq!(session.products().len(), 6);

    let customer = storefront
        .register_customer(&mut session, details())
        .await
        .unwrap();
    assert_eq!(session.step(), Step::Catalog);

    fill_cart(&mut session);
    session.proceed_to_order().unwrap();
    assert_eq!(session.step(), Step::OrderForm);

    let assembler = OrderAssembler::new().with_signature("S. Okafor");
    let order = session.prepare_order(&assembler, next_week()).unwrap();
    let order_number = order.order_number().clone();
    let total = order.total_amount();

    let receipt = storefront.submit_order(&mut session).await.unwrap();
    assert_eq!(receipt.order_number, order_number);
    assert_eq!(receipt.total_amount, total);
    assert_eq!(receipt.line_count, 2);

    assert!(session.cart().is_empty());
    assert!(session.pending_order().is_none());
    assert_eq!(session.step(), Step::Catalog);

    let orders = backend.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, receipt.order_id);
    assert_eq!(orders[0].header.customer_id, customer.id());
    assert_eq!(orders[0].header.signature.as_deref(), Some("S. Okafor"));

    let items = backend.list_order_items(receipt.order_id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items.iter().map(|i| i.line_total).sum::<common::Money>(), total);
}

#[tokio::test]
async fn invalid_customer_is_not_stored() {
    let (storefront, backend) = setup().await;
    let mut session = storefront.start_session();

    let mut bad = details();
    bad.email = "sam.baseline.example".to_string();
    bad.phone = "   ".to_string();
    let err = storefront
        .register_customer(&mut session, bad)
        .await
        .unwrap_err();

    let StorefrontError::Validation(ValidationError::InvalidFields(fields)) = &err else {
        panic!("expected field errors, got {err:?}");
    };
    let names: Vec<_> = fields.iter().map(|f| f.field).collect();
    assert_eq!(names, ["phone", "email"]);
    assert!(backend.list_customers().await.unwrap().is_empty());
    assert_eq!(session.step(), Step::CustomerInfo);
}

#[tokio::test]
async fn backend_failure_keeps_cart_for_retry() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);
    session
        .prepare_order(&signed(), next_week())
        .unwrap();

    backend.set_unavailable(true).await;
    let err = storefront.submit_order(&mut session).await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Backend(BackendError::Unavailable(_))
    ));
    assert_eq!(session.cart().len(), 2);
    assert!(session.pending_order().is_some());
    assert_eq!(session.failed_attempts(), 1);

    backend.clear_failures().await;
    storefront.submit_order(&mut session).await.unwrap();
    assert!(session.cart().is_empty());
    assert_eq!(backend.order_count().await, 1);
}

#[tokio::test]
async fn partial_submission_resumes_without_duplicates() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);
    let order_number = session
        .prepare_order(&signed(), next_week())
        .unwrap()
        .order_number()
        .clone();

    backend.fail_order_items_after(1).await;
    assert!(storefront.submit_order(&mut session).await.is_err());
    assert_eq!(backend.order_count().await, 1);
    assert_eq!(backend.order_item_count().await, 1);
    assert_eq!(session.cart().len(), 2);

    backend.clear_failures().await;
    let receipt = storefront.submit_order(&mut session).await.unwrap();
    assert_eq!(receipt.order_number, order_number);
    assert_eq!(backend.order_count().await, 1);
    assert_eq!(backend.order_item_count().await, 2);

    let lines: Vec<_> = backend
        .list_order_items(receipt.order_id)
        .await
        .unwrap()
        .iter()
        .map(|i| i.line_number)
        .collect();
    assert_eq!(lines, [0, 1]);
}

#[tokio::test]
async fn partly_submitted_order_cannot_be_replaced() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);
    let order_number = session
        .prepare_order(&signed(), next_week())
        .unwrap()
        .order_number()
        .clone();

    backend.fail_order_items_after(1).await;
    assert!(storefront.submit_order(&mut session).await.is_err());
    backend.clear_failures().await;

    let later = Local::now().date_naive().checked_add_days(Days::new(14));
    let err = session.prepare_order(&signed(), later).unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::SubmissionPending { order_number: ref n } if *n == order_number
    ));
    let product = session.products()[0].clone();
    let color = product.colors()[0].clone();
    assert!(matches!(
        session.add_to_cart(product.id(), &color, &product.sizes()[0], 1),
        Err(StorefrontError::SubmissionPending { .. })
    ));

    let receipt = storefront.submit_order(&mut session).await.unwrap();
    assert_eq!(receipt.order_number, order_number);
    assert_eq!(backend.order_count().await, 1);
    assert_eq!(backend.order_item_count().await, 2);

    let dashboard = storefront.dashboard().await.unwrap();
    assert_eq!(dashboard.stats.total_orders, 1);
    assert_eq!(dashboard.stats.total_revenue, receipt.total_amount);
}

#[tokio::test]
async fn unsigned_order_is_not_prepared() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);

    let err = session
        .prepare_order(&OrderAssembler::new(), next_week())
        .unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Validation(ValidationError::MissingSignature)
    ));
    assert!(session.pending_order().is_none());
    assert!(matches!(
        storefront.submit_order(&mut session).await,
        Err(StorefrontError::NoPendingOrder)
    ));
    assert_eq!(backend.order_count().await, 0);
}

#[tokio::test]
async fn submit_requires_a_prepared_order() {
    let (storefront, _) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);

    assert!(matches!(
        storefront.submit_order(&mut session).await,
        Err(StorefrontError::NoPendingOrder)
    ));
}

#[tokio::test]
async fn failed_catalog_load_leaves_session_untouched() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;

    backend.set_unavailable(true).await;
    assert!(storefront.load_catalog(&mut session).await.is_err());
    assert_eq!(session.products().len(), 6);
    assert!(!session.stock().is_empty());
}

#[tokio::test]
async fn seeding_only_fills_empty_accounts() {
    let backend = InMemoryBackend::new();
    let storefront = Storefront::new(backend.clone(), Config::default());

    let first = storefront.seed_sample_catalog().await.unwrap();
    let SeedOutcome::Seeded {
        products,
        stock_entries,
    } = first
    else {
        panic!("expected a fresh seed, got {first:?}");
    };
    assert_eq!(products, 6);
    assert_eq!(
        backend.list_stock(&"default-owner".into()).await.unwrap().len(),
        stock_entries
    );

    assert_eq!(
        storefront.seed_sample_catalog().await.unwrap(),
        SeedOutcome::AlreadySeeded { products: 6 }
    );
}

#[tokio::test]
async fn dashboard_reflects_submitted_orders() {
    let (storefront, _) = setup().await;
    let mut session = ready_session(&storefront).await;
    fill_cart(&mut session);
    session
        .prepare_order(&signed(), next_week())
        .unwrap();
    let receipt = storefront.submit_order(&mut session).await.unwrap();

    session.open_admin();
    let dashboard = storefront.dashboard().await.unwrap();
    assert_eq!(dashboard.stats.total_products, 6);
    assert_eq!(dashboard.stats.total_customers, 1);
    assert_eq!(dashboard.stats.total_orders, 1);
    assert_eq!(dashboard.stats.total_revenue, receipt.total_amount);
    assert_eq!(dashboard.orders[0].company_name, "Baseline Sports");
    assert_eq!(dashboard.stock.len(), session.stock().len());
    assert!(
        dashboard
            .stock
            .iter()
            .all(|row| row.product_name != "Unknown product")
    );
}

#[tokio::test]
async fn stock_upload_applies_known_entries() {
    let (storefront, backend) = setup().await;
    let mut session = ready_session(&storefront).await;

    let product = session.products()[0].clone();
    let (color, size) = product.variants().next().unwrap();
    let known = StockKey::new(product.id().clone(), color, size);
    let unknown = StockKey::new(product.id().clone(), color, "99");

    let report = storefront
        .upload_stock(
            "weekly.xlsx",
            b"sheet bytes",
            &[
                StockUpdate::new(known, 0),
                StockUpdate::new(unknown.clone(), 5),
            ],
        )
        .await
        .unwrap();

    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped, [unknown]);
    assert_eq!(report.file.path, "stock-uploads/weekly.xlsx");
    assert_eq!(
        backend.file("stock-uploads/weekly.xlsx").await.unwrap(),
        b"sheet bytes"
    );

    storefront.load_catalog(&mut session).await.unwrap();
    let level = session.stock_level(product.id(), color, size);
    assert_eq!(level.quantity, 0);
    assert_eq!(level.status, StockStatus::OutOfStock);
    assert!(matches!(
        session.add_to_cart(product.id(), color, size, 1),
        Err(StorefrontError::Catalog(CatalogError::InsufficientStock { .. }))
    ));
}
