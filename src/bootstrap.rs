use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use ethers::prelude::*;

use crate::artifacts::ArtifactRegistry;
use crate::chain::{deployer::Deployer, providers, signer};
use crate::config::Config;

/// Everything the harness needs wired together: provider, default signer,
/// artifact registry, deployer.
pub struct Harness {
    pub provider: Arc<Provider<Http>>,
    pub deployer: Deployer,
}

impl Harness {
    pub async fn new(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let provider = providers::create_provider(&config.rpc_url)?;
        let client = signer::default_signer(provider.clone(), config.private_key.as_deref()).await?;
        let registry = ArtifactRegistry::load_dir(Path::new(&config.artifacts_dir))?;

        let deployer = Deployer::new(
            client,
            registry,
            config.confirmations,
            Duration::from_secs(config.confirm_timeout_secs),
        );

        Ok(Harness { provider, deployer })
    }
}
