//! Integration tests for catalog browsing against the sample catalog.

use catalog::sample::sample_products;
use catalog::{
    Category, CategoryFilter, Product, StockEntry, StockIndex, StockStatus, category_counts,
    filter,
};

fn sample_catalog() -> Vec<Product> {
    sample_products()
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Product::new(format!("prod-{i}"), draft).unwrap())
        .collect()
}

fn full_stock(products: &[Product], quantity: u32) -> Vec<StockEntry> {
    products
        .iter()
        .flat_map(|p| {
            p.variants()
                .map(|(color, size)| StockEntry::new(p.id().clone(), color, size, quantity))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn n9000_search_finds_exactly_one_product() {
    let products = sample_catalog();
    let found: Vec<_> = filter(&products, "N9000", CategoryFilter::All).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name(), "N9000 Premium");
    assert_eq!(found[0].style_code(), "N9000-001");

    let lower: Vec<_> = filter(&products, "n9000", CategoryFilter::All).collect();
    assert_eq!(lower, found);
}

#[test]
fn tabs_partition_the_catalog() {
    let products = sample_catalog();
    let counts = category_counts(&products, "");
    assert_eq!(counts.all, 6);
    assert_eq!(counts.footwear + counts.apparel, counts.all);

    let apparel: Vec<_> = filter(&products, "", Category::Apparel.into())
        .map(|p| p.style_code())
        .collect();
    assert_eq!(apparel, ["TJ-003", "PT-004", "TP-006"]);
}

#[test]
fn stock_index_covers_every_variant() {
    let products = sample_catalog();
    let entries = full_stock(&products, 20);
    let expected: usize = products
        .iter()
        .map(|p| p.colors().len() * p.sizes().len())
        .sum();

    let index = StockIndex::from_entries(entries).unwrap();
    assert_eq!(index.len(), expected);

    for product in &products {
        for color in product.colors() {
            assert!(
                index
                    .size_matrix(product, color)
                    .all(|(_, level)| level.status == StockStatus::InStock)
            );
        }
    }
}

#[test]
fn colors_outside_the_range_read_as_out_of_stock() {
    let products = sample_catalog();
    let index = StockIndex::from_entries(full_stock(&products, 3)).unwrap();
    let jacket = &products[2];

    let level = index.status_of(jacket.id(), "White", "M");
    assert_eq!(level.quantity, 0);
    assert_eq!(level.status, StockStatus::OutOfStock);

    let navy = index.status_of(jacket.id(), "Navy", "M");
    assert_eq!(navy.status, StockStatus::LowStock);
}
