use serde::{Deserialize, Serialize};

use crate::catalog::item::{Item, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub date: String,
    pub status: OrderStatus,
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of `price * quantity` over all lines.
    pub fn items_total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

impl Item for Order {
    fn id(&self) -> ItemId {
        ItemId::Str(self.id.clone())
    }
}

fn line(id: &str, product_id: &str, name: &str, price: f64, quantity: u32) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        product_id: product_id.to_string(),
        name: name.to_string(),
        price,
        quantity,
        image_url: "https://placehold.co/300".to_string(),
    }
}

/// Static order history. There is no orders endpoint on the demo API.
pub fn mock_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".to_string(),
            order_number: "ORD-2024-0001".to_string(),
            date: "2024-03-15".to_string(),
            status: OrderStatus::Delivered,
            total_amount: 259.97,
            items: vec![
                line("1-1", "1", "Premium Cloud Storage", 79.99, 2),
                line("1-2", "5", "Content Delivery Network", 99.99, 1),
            ],
        },
        Order {
            id: "2".to_string(),
            order_number: "ORD-2024-0002".to_string(),
            date: "2024-04-02".to_string(),
            status: OrderStatus::Shipped,
            total_amount: 199.99,
            items: vec![line("2-1", "2", "Cloud Server Pro", 199.99, 1)],
        },
        Order {
            id: "3".to_string(),
            order_number: "ORD-2024-0003".to_string(),
            date: "2024-04-20".to_string(),
            status: OrderStatus::Processing,
            total_amount: 429.98,
            items: vec![
                line("3-1", "3", "Database Cluster", 129.99, 1),
                line("3-2", "4", "AI Computing Platform", 299.99, 1),
            ],
        },
        Order {
            id: "4".to_string(),
            order_number: "ORD-2024-0004".to_string(),
            date: "2024-05-08".to_string(),
            status: OrderStatus::Cancelled,
            total_amount: 149.99,
            items: vec![line("4-1", "3", "Database Cluster", 149.99, 1)],
        },
    ]
}
