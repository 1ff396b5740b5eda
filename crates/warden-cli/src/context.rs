use anyhow::Context;
use warden_config::WardenConfig;
use warden_core::entities::User;
use warden_store::MemoryStore;

/// Everything a command handler needs.
pub struct AppContext {
    pub config: WardenConfig,
    pub store: MemoryStore,
}

impl AppContext {
    #[must_use]
    pub const fn new(config: WardenConfig, store: MemoryStore) -> Self {
        Self { config, store }
    }

    /// Look up a user that must exist.
    pub fn require_user(&self, id: &str) -> anyhow::Result<&User> {
        self.store
            .user(id)
            .with_context(|| format!("unknown user '{id}'"))
    }
}
