// src/chain/signer.rs
//
// "Default signing identity" for the harness: the configured PRIVATE_KEY, or
// the dev chain's well-known account #0 when none is set. This mirrors what
// a local test node hands out as its first unlocked signer.

use ethers::prelude::*;
use std::sync::Arc;

use crate::address::checksummed;
use crate::error::DeploymentError;

/// Account #0 of the standard local dev mnemonic
/// ("test test test ... junk"), funded on anvil and hardhat nodes alike.
pub const DEV_ACCOUNT_0_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Provider wrapped with the harness's signing identity.
pub type HarnessClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Build the default signer on top of `provider`. Fetches the chain id so
/// every transaction the wallet signs is replay-protected for the right
/// network.
pub async fn default_signer(
    provider: Arc<Provider<Http>>,
    private_key: Option<&str>,
) -> Result<Arc<HarnessClient>, DeploymentError> {
    let chain_id = provider
        .get_chainid()
        .await
        .map_err(|e| DeploymentError::Provider(e.to_string()))?;

    let key = private_key.unwrap_or(DEV_ACCOUNT_0_KEY);
    let wallet: LocalWallet = key
        .trim_start_matches("0x")
        .parse()
        .map_err(|e: WalletError| DeploymentError::Signer(e.to_string()))?;
    let wallet = wallet.with_chain_id(chain_id.as_u64());

    log::debug!(
        "default signer {} on chain {}",
        checksummed(&wallet.address()),
        chain_id
    );
    Ok(Arc::new(SignerMiddleware::new(
        provider.as_ref().clone(),
        wallet,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::is_proper_address;

    #[test]
    fn test_dev_key_parses_to_known_account_zero() {
        let wallet: LocalWallet = DEV_ACCOUNT_0_KEY.parse().unwrap();
        // The address derived from the standard dev mnemonic's first key.
        assert_eq!(
            checksummed(&wallet.address()),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
        assert!(is_proper_address(&checksummed(&wallet.address())));
    }

    #[test]
    fn test_key_parsing_tolerates_0x_prefix() {
        let bare: LocalWallet = DEV_ACCOUNT_0_KEY.parse().unwrap();
        let prefixed: LocalWallet = format!("0x{}", DEV_ACCOUNT_0_KEY)
            .trim_start_matches("0x")
            .parse()
            .unwrap();
        assert_eq!(bare.address(), prefixed.address());
    }

    #[test]
    fn test_garbage_key_fails_to_parse() {
        let result = "not_a_private_key".parse::<LocalWallet>();
        assert!(result.is_err());

        let result = "0x1234".parse::<LocalWallet>();
        assert!(result.is_err());
    }
}
