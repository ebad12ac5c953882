use std::sync::Arc;

use crate::api::{decode, ApiError, Transport};
use crate::cache::ResourceCache;
use crate::catalog::{ItemId, ResourceKind, User};

/// Single user lookups for the profile and friend detail screens.
#[derive(Clone)]
pub struct UserService {
    transport: Arc<dyn Transport>,
    cache: Arc<ResourceCache<User>>,
}

impl UserService {
    pub fn new(transport: Arc<dyn Transport>, cache: Arc<ResourceCache<User>>) -> Self {
        Self { transport, cache }
    }

    /// A user's profile, served from the users snapshot when it holds the
    /// record and fetched individually otherwise.
    pub async fn profile(&self, id: u64) -> Result<User, ApiError> {
        if let Some(user) = self.cache.find(&ItemId::Int(id)) {
            tracing::debug!(user_id = id, "Profile served from users cache");
            return Ok(user);
        }

        let path = ResourceKind::Users.item_path(id);
        let body = self.transport.get_json(&path, &[]).await?;
        decode(&path, body)
    }
}
