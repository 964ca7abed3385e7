//! State of one ordering session.

use catalog::{CategoryFilter, Product, StockIndex, StockLevel};
use chrono::NaiveDate;
use common::{OwnerId, ProductId};
use ordering::{Cart, CartLine, Customer, LineKey, Order, OrderAssembler, ValidationError};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorefrontError};

/// Screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    #[default]
    CustomerInfo,
    Catalog,
    OrderForm,
    Admin,
}

#[derive(Debug, Clone)]
struct PendingOrder {
    order: Order,
    failed_attempts: u32,
}

/// Owns the customer, the catalog snapshot, the cart and the prepared order.
///
/// Operations that only touch local state live here. Anything that needs
/// the backend goes through [`crate::Storefront`], which takes the session
/// by mutable reference.
#[derive(Debug, Clone)]
pub struct Session {
    owner_id: OwnerId,
    step: Step,
    customer: Option<Customer>,
    products: Vec<Product>,
    stock: StockIndex,
    cart: Cart,
    pending: Option<PendingOrder>,
}

impl Session {
    pub fn new(owner_id: OwnerId) -> Self {
        Self {
            owner_id,
            step: Step::default(),
            customer: None,
            products: Vec::new(),
            stock: StockIndex::new(),
            cart: Cart::new(),
            pending: None,
        }
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn stock(&self) -> &StockIndex {
        &self.stock
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The order prepared for submission, if any.
    pub fn pending_order(&self) -> Option<&Order> {
        self.pending.as_ref().map(|p| &p.order)
    }

    /// Number of failed submissions of the pending order.
    pub fn failed_attempts(&self) -> u32 {
        self.pending.as_ref().map_or(0, |p| p.failed_attempts)
    }

    /// Replaces the catalog snapshot.
    pub fn replace_catalog(&mut self, products: Vec<Product>, stock: StockIndex) {
        self.products = products;
        self.stock = stock;
    }

    pub fn product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == product_id)
    }

    /// Products matching a search term and category, in catalog order.
    pub fn browse<'a>(
        &'a self,
        search_term: &str,
        category: CategoryFilter,
    ) -> impl Iterator<Item = &'a Product> + Clone + use<'a> {
        catalog::filter(&self.products, search_term, category)
    }

    pub fn stock_level(&self, product_id: &ProductId, color: &str, size: &str) -> StockLevel {
        self.stock.status_of(product_id, color, size)
    }

    /// Adds units of one variant at the product's list price.
    ///
    /// The quantity already in the cart counts against availability.
    /// Returns the index of the line that received the units.
    #[tracing::instrument(skip(self))]
    pub fn add_to_cart(
        &mut self,
        product_id: &ProductId,
        color: &str,
        size: &str,
        quantity: u32,
    ) -> Result<usize> {
        self.ensure_no_failed_submission()?;
        let line = self.admit(product_id, color, size, quantity)?;
        let index = self.cart.add(line);
        self.discard_pending();
        metrics::counter!("cart_lines_added_total").increment(1);
        Ok(index)
    }

    /// Adds several sizes of one color at once. Zero quantities are skipped.
    ///
    /// Every size is checked before anything is added, so a rejected size
    /// leaves the cart unchanged. Returns the number of lines added.
    pub fn add_selection<S: AsRef<str>>(
        &mut self,
        product_id: &ProductId,
        color: &str,
        quantities: &[(S, u32)],
    ) -> Result<usize> {
        self.ensure_no_failed_submission()?;
        let lines = quantities
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|(size, quantity)| self.admit(product_id, color, size.as_ref(), *quantity))
            .collect::<Result<Vec<_>>>()?;

        let added = lines.len();
        for line in lines {
            self.cart.add(line);
        }
        if added > 0 {
            self.discard_pending();
            metrics::counter!("cart_lines_added_total").increment(added as u64);
        }
        Ok(added)
    }

    pub fn remove_line(&mut self, index: usize) -> Result<CartLine> {
        self.ensure_no_failed_submission()?;
        let removed = self.cart.remove_at(index)?;
        self.discard_pending();
        Ok(removed)
    }

    /// Changes a line's quantity. Values below one are clamped to one and
    /// increases are checked against stock.
    pub fn set_line_quantity(&mut self, index: usize, quantity: u32) -> Result<()> {
        self.ensure_no_failed_submission()?;
        let line = self.cart.get(index).ok_or(ordering::CartError::IndexOutOfRange {
            index,
            len: self.cart.len(),
        })?;
        if quantity > line.quantity() {
            self.stock
                .check_available(line.product_id(), line.color(), line.size(), quantity)?;
        }
        self.cart.set_quantity(index, quantity)?;
        self.discard_pending();
        Ok(())
    }

    /// Moves from the catalog to the order form.
    pub fn proceed_to_order(&mut self) -> Result<()> {
        self.require_customer()?;
        if self.cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        self.step = Step::OrderForm;
        Ok(())
    }

    /// Returns from the order form to the catalog, keeping the cart.
    pub fn back_to_catalog(&mut self) -> Result<()> {
        self.require_customer()?;
        self.step = Step::Catalog;
        Ok(())
    }

    /// Assembles the cart into an order and keeps it for submission.
    ///
    /// The order form must be signed. A prepared order replaces the previous
    /// one unless a submission of that one has failed; it must then be
    /// submitted again so that no half-written order is left behind.
    pub fn prepare_order(
        &mut self,
        assembler: &OrderAssembler,
        delivery_date: Option<NaiveDate>,
    ) -> Result<&Order> {
        self.ensure_no_failed_submission()?;
        let order = assembler.assemble(self.customer.as_ref(), self.cart.lines(), delivery_date)?;
        self.install_pending(order)
    }

    /// Like [`Session::prepare_order`] with an explicit order date.
    pub fn prepare_order_at(
        &mut self,
        assembler: &OrderAssembler,
        today: NaiveDate,
        delivery_date: Option<NaiveDate>,
    ) -> Result<&Order> {
        self.ensure_no_failed_submission()?;
        let order = assembler.assemble_at(
            today,
            &mut rand::thread_rng(),
            self.customer.as_ref(),
            self.cart.lines(),
            delivery_date,
        )?;
        self.install_pending(order)
    }

    pub fn open_admin(&mut self) {
        self.step = Step::Admin;
    }

    /// Leaves the admin screen for the catalog, or for customer entry if no
    /// customer has been registered yet.
    pub fn close_admin(&mut self) {
        self.step = if self.customer.is_some() {
            Step::Catalog
        } else {
            Step::CustomerInfo
        };
    }

    pub(crate) fn set_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
        self.step = Step::Catalog;
    }

    pub(crate) fn record_failed_attempt(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.failed_attempts += 1;
        }
    }

    /// Clears the cart and the submitted order and returns to the catalog.
    pub(crate) fn complete_submission(&mut self) {
        self.cart.clear();
        self.pending = None;
        self.step = Step::Catalog;
    }

    fn install_pending(&mut self, order: Order) -> Result<&Order> {
        if order.signature().is_none() {
            return Err(ValidationError::MissingSignature.into());
        }
        let pending = self.pending.insert(PendingOrder {
            order,
            failed_attempts: 0,
        });
        Ok(&pending.order)
    }

    /// Refuses changes while a partly written order awaits resubmission.
    fn ensure_no_failed_submission(&self) -> Result<()> {
        match &self.pending {
            Some(pending) if pending.failed_attempts > 0 => {
                Err(StorefrontError::SubmissionPending {
                    order_number: pending.order.order_number().clone(),
                })
            }
            _ => Ok(()),
        }
    }

    fn require_customer(&self) -> Result<&Customer> {
        self.customer.as_ref().ok_or(StorefrontError::CustomerRequired)
    }

    fn admit(
        &self,
        product_id: &ProductId,
        color: &str,
        size: &str,
        quantity: u32,
    ) -> Result<CartLine> {
        self.require_customer()?;
        let product = self
            .product(product_id)
            .ok_or_else(|| StorefrontError::UnknownProduct(product_id.clone()))?;
        if !product.has_color(color) || !product.has_size(size) {
            return Err(StorefrontError::UnknownVariant {
                product_id: product_id.clone(),
                color: color.to_string(),
                size: size.to_string(),
            });
        }

        let line = CartLine::new(
            product_id.clone(),
            product.name(),
            product.style_code(),
            color,
            size,
            quantity,
            product.list_price(),
        )?;

        let in_cart = self.cart.quantity_of(LineKey {
            product_id,
            color,
            size,
        });
        self.stock
            .check_available(product_id, color, size, in_cart.saturating_add(quantity))?;
        Ok(line)
    }

    /// A prepared order no longer matches a changed cart.
    fn discard_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(
                order_number = %pending.order.order_number(),
                "cart changed, prepared order discarded"
            );
        }
    }
}
