//! Session cart ledger.
//!
//! Holds at most one line per product, keeps insertion order for display and
//! never stores a line whose quantity is below one. Every mutating call
//! leaves the cart fully consistent before it returns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ProductCatalog;
use crate::domain::product::{ProductId, ProductSnapshot};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image: String,
    pub quantity: u32,
}

impl LineItem {
    fn from_snapshot(snapshot: ProductSnapshot) -> Self {
        Self {
            product_id: snapshot.product_id,
            name: snapshot.name,
            unit_price: snapshot.unit_price,
            image: snapshot.image,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Outcome of [`Cart::adjust_quantity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityChange {
    Updated(u32),
    Removed,
    Untouched,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `product_id` through the catalog and adds one unit of it.
    /// An unknown id leaves the cart untouched.
    pub fn add<C>(&mut self, catalog: &C, product_id: ProductId) -> Result<&LineItem, DomainError>
    where
        C: ProductCatalog + ?Sized,
    {
        let Some(product) = catalog.find(product_id) else {
            debug!(
                event_name = "storefront.cart.product_not_found",
                product_id = product_id.0,
                "rejected add for unknown product"
            );
            return Err(DomainError::ProductNotFound(product_id));
        };
        Ok(self.add_snapshot(product.snapshot()))
    }

    /// Adds one unit of an already resolved product. A repeated product bumps
    /// the existing line; the stored snapshot is the one captured first.
    pub fn add_snapshot(&mut self, snapshot: ProductSnapshot) -> &LineItem {
        let index = match self.position(snapshot.product_id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                index
            }
            None => {
                self.lines.push(LineItem::from_snapshot(snapshot));
                self.lines.len() - 1
            }
        };

        let line = &self.lines[index];
        debug!(
            event_name = "storefront.cart.line_added",
            product_id = line.product_id.0,
            quantity = line.quantity,
            "cart line added"
        );
        line
    }

    /// Removes the line for `product_id`. Returns `false` when there was none.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        let removed = self.lines.len() != before;
        if removed {
            debug!(
                event_name = "storefront.cart.line_removed",
                product_id = product_id.0,
                "cart line removed"
            );
        }
        removed
    }

    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityChange {
        let Some(index) = self.position(product_id) else {
            return QuantityChange::Untouched;
        };

        let next = i64::from(self.lines[index].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(index);
            debug!(
                event_name = "storefront.cart.line_removed",
                product_id = product_id.0,
                delta,
                "cart line dropped below one unit"
            );
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[index].quantity = quantity;
        debug!(
            event_name = "storefront.cart.quantity_adjusted",
            product_id = product_id.0,
            delta,
            quantity,
            "cart quantity adjusted"
        );
        QuantityChange::Updated(quantity)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        debug!(event_name = "storefront.cart.cleared", "cart cleared");
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Units across all lines, as shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Borrowed view of the lines in insertion order.
    pub fn snapshot(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product_id == product_id)
    }
}
