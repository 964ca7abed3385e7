//! Shopping cart.

use common::{Money, ProductId};
use serde::Serialize;

use crate::error::{CartError, ValidationError};

/// Merge key of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineKey<'a> {
    pub product_id: &'a ProductId,
    pub color: &'a str,
    pub size: &'a str,
}

/// One color and size selection of a product.
///
/// The line total is always derived from the current quantity and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    product_id: ProductId,
    product_name: String,
    style_code: String,
    color: String,
    size: String,
    quantity: u32,
    unit_price: Money,
}

impl CartLine {
    /// Creates a line. The quantity must be at least 1.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        style_code: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<Self, ValidationError> {
        let product_id = product_id.into();
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity { product_id });
        }
        Ok(Self {
            product_id,
            product_name: product_name.into(),
            style_code: style_code.into(),
            color: color.into(),
            size: size.into(),
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn style_code(&self) -> &str {
        &self.style_code
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns quantity × unit price.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    pub fn key(&self) -> LineKey<'_> {
        LineKey {
            product_id: &self.product_id,
            color: &self.color,
            size: &self.size,
        }
    }
}

/// Ordered sequence of cart lines.
///
/// Insertion order is the display and submission order. Lines sharing a
/// (product, color, size) key are merged on add. Stock availability is not
/// checked here; callers admit lines against the stock index first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line, merging into an existing line with the same key.
    ///
    /// On merge only the quantity changes; the existing line keeps its price
    /// and display fields. Returns the index of the affected line.
    pub fn add(&mut self, line: CartLine) -> usize {
        if let Some(index) = self.position(line.key()) {
            let existing = &mut self.lines[index];
            existing.quantity = existing.quantity.saturating_add(line.quantity);
            index
        } else {
            self.lines.push(line);
            self.lines.len() - 1
        }
    }

    /// Removes the line at `index`, shifting later lines left.
    pub fn remove_at(&mut self, index: usize) -> Result<CartLine, CartError> {
        self.check_index(index)?;
        Ok(self.lines.remove(index))
    }

    /// Sets the quantity of the line at `index`. Quantities below 1 are
    /// clamped to 1; use [`Cart::remove_at`] to drop a line.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), CartError> {
        self.check_index(index)?;
        self.lines[index].quantity = quantity.max(1);
        Ok(())
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn total_amount(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&CartLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity already in the cart for a key, zero if absent.
    pub fn quantity_of(&self, key: LineKey<'_>) -> u32 {
        self.position(key)
            .map(|index| self.lines[index].quantity)
            .unwrap_or(0)
    }

    fn position(&self, key: LineKey<'_>) -> Option<usize> {
        self.lines.iter().position(|line| line.key() == key)
    }

    fn check_index(&self, index: usize) -> Result<(), CartError> {
        if index >= self.lines.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(())
    }
}
