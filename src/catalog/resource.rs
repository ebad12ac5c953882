/// Remote collections exposed by the storefront API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Products,
    Users,
    Categories,
}

impl ResourceKind {
    /// Collection path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Products => "/products",
            ResourceKind::Users => "/users",
            ResourceKind::Categories => "/categories",
        }
    }

    /// Path of a single record.
    pub fn item_path(self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.path(), id)
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Products => "products",
            ResourceKind::Users => "users",
            ResourceKind::Categories => "categories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(ResourceKind::Users.item_path(3), "/users/3");
        assert_eq!(ResourceKind::Categories.item_path("12"), "/categories/12");
    }
}
