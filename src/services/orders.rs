use std::sync::Arc;

use crate::catalog::{mock_orders, Order};

/// Order history backed by static data. The demo API has no orders
/// endpoint, so lookups are synchronous.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<Vec<Order>>,
}

impl OrderService {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders: Arc::new(orders),
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.as_ref().clone()
    }

    pub fn order(&self, id: &str) -> Option<Order> {
        self.orders.iter().find(|order| order.id == id).cloned()
    }
}

impl Default for OrderService {
    fn default() -> Self {
        Self::new(mock_orders())
    }
}
