use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Stable identifier of a fetched record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Int(u64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(id) => write!(f, "{}", id),
            ItemId::Str(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId::Int(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::Str(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId::Str(id)
    }
}

/// A record fetched verbatim from a remote collection.
///
/// Caches and pagers only look at the identifier; the rest of the payload
/// is opaque to them.
pub trait Item: DeserializeOwned + Clone + Send + Sync + 'static {
    fn id(&self) -> ItemId;
}

/// Raw JSON objects are keyed by their `"id"` field. Objects without one
/// share the empty string identifier.
impl Item for Value {
    fn id(&self) -> ItemId {
        match self.get("id") {
            Some(Value::Number(n)) => match n.as_u64() {
                Some(id) => ItemId::Int(id),
                None => ItemId::Str(n.to_string()),
            },
            Some(Value::String(s)) => ItemId::Str(s.clone()),
            _ => ItemId::Str(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_numeric_id() {
        assert_eq!(json!({"id": 7, "name": "x"}).id(), ItemId::Int(7));
    }

    #[test]
    fn test_value_string_id() {
        assert_eq!(json!({"id": "a1"}).id(), ItemId::from("a1"));
    }

    #[test]
    fn test_value_without_id() {
        assert_eq!(json!({"name": "x"}).id(), ItemId::from(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(ItemId::Int(12).to_string(), "12");
        assert_eq!(ItemId::from("ord-1").to_string(), "ord-1");
    }
}
