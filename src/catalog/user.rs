use serde::{Deserialize, Serialize};

use crate::catalog::item::{Item, ItemId};

/// User as served by `/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub creation_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Item for User {
    fn id(&self) -> ItemId {
        ItemId::Int(self.id)
    }
}
