//! Sample catalog used to seed an account with no products.

use common::Money;

use crate::product::{Category, ProductDraft};

/// Stock quantities generated for seeded variants fall in this range.
pub const SAMPLE_STOCK_RANGE: std::ops::RangeInclusive<u32> = 5..=54;

const FOOTWEAR_SIZES: &[&str] = &["7", "8", "9", "10", "11", "12"];

fn draft(
    name: &str,
    style_code: &str,
    category: Category,
    material: &str,
    prices: (i64, i64),
    colors: &[&str],
    sizes: &[&str],
) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        style_code: style_code.to_string(),
        category,
        material: Some(material.to_string()),
        list_price: Money::from_units(prices.0),
        rsp_price: Money::from_units(prices.1),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
    }
}

/// Returns the six sample products, footwear and apparel.
pub fn sample_products() -> Vec<ProductDraft> {
    vec![
        draft(
            "N9000 Premium",
            "N9000-001",
            Category::Footwear,
            "Leather/Mesh",
            (120, 180),
            &["White", "Black", "Navy", "Grey"],
            FOOTWEAR_SIZES,
        ),
        draft(
            "B.Elite Premium",
            "BE-002",
            Category::Footwear,
            "Leather",
            (95, 140),
            &["White", "Black", "Brown"],
            FOOTWEAR_SIZES,
        ),
        draft(
            "Training Jacket",
            "TJ-003",
            Category::Apparel,
            "100% Polyester",
            (65, 95),
            &["Navy", "Black", "Red"],
            &["S", "M", "L", "XL", "XXL"],
        ),
        draft(
            "Performance T-Shirt",
            "PT-004",
            Category::Apparel,
            "95% Cotton, 5% Elastane",
            (25, 40),
            &["White", "Black", "Navy", "Red"],
            &["S", "M", "L", "XL", "XXL", "XXXL"],
        ),
        draft(
            "Heritage Sneaker",
            "HS-005",
            Category::Footwear,
            "Suede/Canvas",
            (85, 125),
            &["Grey", "Navy", "Green"],
            FOOTWEAR_SIZES,
        ),
        draft(
            "Track Pants",
            "TP-006",
            Category::Apparel,
            "100% Polyester",
            (45, 70),
            &["Black", "Navy", "Grey"],
            &["S", "M", "L", "XL", "XXL"],
        ),
    ]
}
