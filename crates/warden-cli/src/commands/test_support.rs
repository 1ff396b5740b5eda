use warden_auth::Argon2Credentials;
use warden_config::WardenConfig;
use warden_store::MemoryStore;

use crate::context::AppContext;

/// Built-in park with minimal hashing cost.
pub fn test_context() -> AppContext {
    let credentials = Argon2Credentials::with_params(8, 1, 1).unwrap();
    let store = MemoryStore::seeded(Box::new(credentials)).unwrap();
    AppContext::new(WardenConfig::default(), store)
}
