use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::catalog::{mock_products, MockProduct};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product: MockProduct,
    pub quantity: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.product.effective_price() * f64::from(self.quantity)
    }
}

/// In-memory shopping cart. Clones share the same lines.
#[derive(Clone)]
pub struct CartService {
    items: Arc<Mutex<Vec<CartItem>>>,
}

impl CartService {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.lock().clone()
    }

    /// Drop the line for `product_id`. Returns whether one was removed.
    pub fn remove(&self, product_id: &str) -> bool {
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|item| item.product.id != product_id);
        items.len() != before
    }

    /// Set the quantity of an existing line. Quantities below 1 are
    /// ignored; use [`remove`](Self::remove) to drop a line.
    pub fn update_quantity(&self, product_id: &str, quantity: u32) -> bool {
        if quantity < 1 {
            tracing::debug!(product_id, "Ignoring cart quantity below 1");
            return false;
        }
        match self
            .items
            .lock()
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Sum of line subtotals at the discounted price where one exists.
    pub fn total(&self) -> f64 {
        self.items.lock().iter().map(CartItem::subtotal).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

/// Starts with one of each of the first two showcase products.
impl Default for CartService {
    fn default() -> Self {
        Self::new(
            mock_products()
                .into_iter()
                .take(2)
                .map(|product| CartItem {
                    product,
                    quantity: 1,
                })
                .collect(),
        )
    }
}
