//! Catalog search and category filtering.

use serde::{Deserialize, Serialize};

use crate::product::{Category, Product};

/// Category restriction applied when browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Filters products by a case-insensitive search over name and style code,
/// then by category. Input order is preserved.
///
/// The returned iterator is lazy and can be cloned to walk the view again.
pub fn filter<'a>(
    products: &'a [Product],
    search_term: &str,
    category: CategoryFilter,
) -> impl Iterator<Item = &'a Product> + Clone + use<'a> {
    let needle = search_term.to_lowercase();
    products.iter().filter(move |product| {
        matches_search(product, &needle) && category.matches(product.category())
    })
}

fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name().to_lowercase().contains(needle)
        || product.style_code().to_lowercase().contains(needle)
}

/// Per-category counts of a filtered view, as shown on the catalog tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub footwear: usize,
    pub apparel: usize,
}

/// Counts search matches per category.
pub fn category_counts(products: &[Product], search_term: &str) -> CategoryCounts {
    filter(products, search_term, CategoryFilter::All).fold(
        CategoryCounts::default(),
        |mut counts, product| {
            counts.all += 1;
            match product.category() {
                Category::Footwear => counts.footwear += 1,
                Category::Apparel => counts.apparel += 1,
            }
            counts
        },
    )
}
