use std::path::PathBuf;

use anyhow::Context;
use warden_auth::Argon2Credentials;
use warden_config::WardenConfig;
use warden_store::MemoryStore;

use crate::cli::GlobalFlags;

pub fn load_config() -> anyhow::Result<WardenConfig> {
    WardenConfig::load_with_dotenv().context("failed to load warden configuration")
}

/// Seed the in-memory store from `--fixture`, `seed.fixture_path`, or the built-in park.
pub fn build_store(config: &WardenConfig, flags: &GlobalFlags) -> anyhow::Result<MemoryStore> {
    let credentials = Argon2Credentials::with_params(
        config.credentials.memory_kib,
        config.credentials.iterations,
        config.credentials.parallelism,
    )
    .context("invalid credential hashing parameters")?;

    let fixture = flags
        .fixture
        .as_deref()
        .map(PathBuf::from)
        .or_else(|| config.seed.fixture());

    match fixture {
        Some(path) => {
            tracing::debug!(path = %path.display(), "seeding store from fixture file");
            MemoryStore::from_fixture_path(&path, Box::new(credentials))
                .with_context(|| format!("failed to seed store from {}", path.display()))
        }
        None => MemoryStore::seeded(Box::new(credentials))
            .context("failed to seed built-in fixture"),
    }
}
