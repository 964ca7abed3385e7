//! Catalog products.

use std::collections::HashSet;

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Product category.
///
/// Serialized with the catalog's tier codes: footwear is `"T1"`, apparel is
/// `"T2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "T1")]
    Footwear,
    #[serde(rename = "T2")]
    Apparel,
}

impl Category {
    /// All categories in catalog display order.
    pub const ALL: [Category; 2] = [Category::Footwear, Category::Apparel];

    /// Returns the tier code (`"T1"` or `"T2"`).
    pub fn code(&self) -> &'static str {
        match self {
            Category::Footwear => "T1",
            Category::Apparel => "T2",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Footwear => "Footwear",
            Category::Apparel => "Apparel",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Unvalidated product definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub style_code: String,
    pub category: Category,
    pub material: Option<String>,
    pub list_price: Money,
    pub rsp_price: Money,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

/// A catalog product with its color and size ranges.
///
/// Products are immutable once built. The color and size lists keep their
/// defined order, which is also the order of the stock matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    style_code: String,
    category: Category,
    material: Option<String>,
    list_price: Money,
    rsp_price: Money,
    colors: Vec<String>,
    sizes: Vec<String>,
}

impl Product {
    /// Builds a product, checking prices and the color/size ranges.
    pub fn new(id: impl Into<ProductId>, draft: ProductDraft) -> Result<Self> {
        let invalid = |reason: &str| CatalogError::InvalidProduct {
            style_code: draft.style_code.clone(),
            reason: reason.to_string(),
        };

        if draft.name.trim().is_empty() {
            return Err(invalid("name is required"));
        }
        if draft.style_code.trim().is_empty() {
            return Err(invalid("style code is required"));
        }
        if draft.list_price.is_negative() || draft.rsp_price.is_negative() {
            return Err(invalid("prices must not be negative"));
        }
        check_range(&draft.colors).map_err(|r| invalid(&format!("colors {r}")))?;
        check_range(&draft.sizes).map_err(|r| invalid(&format!("sizes {r}")))?;

        Ok(Self {
            id: id.into(),
            name: draft.name,
            style_code: draft.style_code,
            category: draft.category,
            material: draft.material.filter(|m| !m.trim().is_empty()),
            list_price: draft.list_price,
            rsp_price: draft.rsp_price,
            colors: draft.colors,
            sizes: draft.sizes,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style_code(&self) -> &str {
        &self.style_code
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    /// Wholesale price charged on orders.
    pub fn list_price(&self) -> Money {
        self.list_price
    }

    /// Recommended sale price.
    pub fn rsp_price(&self) -> Money {
        self.rsp_price
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Iterates every (color, size) variant in matrix order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().flat_map(move |color| {
            self.sizes
                .iter()
                .map(move |size| (color.as_str(), size.as_str()))
        })
    }
}

fn check_range(values: &[String]) -> std::result::Result<(), &'static str> {
    if values.is_empty() {
        return Err("must not be empty");
    }
    let mut seen = HashSet::with_capacity(values.len());
    for value in values {
        if value.trim().is_empty() {
            return Err("must not contain blank entries");
        }
        if !seen.insert(value.as_str()) {
            return Err("must be unique");
        }
    }
    Ok(())
}
