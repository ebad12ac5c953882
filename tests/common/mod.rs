//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;
pub mod stub_transport;

use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

pub use stub_transport::StubTransport;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// `count` generic records with ids 1..=count.
pub fn items(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|id| json!({"id": id, "name": format!("item {}", id)}))
        .collect()
}

/// `count` records in the shape of the `/users` endpoint.
pub fn users(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "email": format!("user{}@mail.com", id),
                "password": "changeme",
                "name": format!("User {}", id),
                "role": "customer",
                "avatar": format!("https://i.pravatar.cc/150?u={}", id),
                "creationAt": "2024-05-01T10:00:00.000Z",
                "updatedAt": "2024-05-01T10:00:00.000Z"
            })
        })
        .collect()
}

/// `count` records in the shape of the `/products` endpoint.
pub fn products(count: u64) -> Vec<Value> {
    (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Product {}", id),
                "price": 10 * id,
                "description": "A product",
                "category": {"id": 1, "name": "Clothes", "image": "https://i.imgur.com/QkIa5tT.jpeg"},
                "images": [format!("https://i.imgur.com/{}.jpeg", id)]
            })
        })
        .collect()
}

/// Ids of a page of generic JSON records.
pub fn ids(items: &[Value]) -> Vec<u64> {
    items
        .iter()
        .map(|item| item["id"].as_u64().expect("numeric id"))
        .collect()
}
