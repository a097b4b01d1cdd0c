// src/chain/deployer.rs
//
// Deploy-by-name against the test chain: artifact lookup, factory build,
// creation transaction, confirmation wait. One fresh instance per call —
// nothing is cached, so repeated deployments of the same name always land
// at distinct addresses.

use chrono::{DateTime, Utc};
use ethers::contract::{ContractError, ContractFactory};
use ethers::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::address::checksummed;
use crate::artifacts::ArtifactRegistry;
use crate::chain::signer::HarnessClient;
use crate::error::DeploymentError;

/// Opaque handle to one deployed instance. Carries everything the receipt
/// told us; dropped at the end of whatever scope asked for the deployment.
#[derive(Debug, Clone, Serialize)]
pub struct DeployedContract {
    pub name: String,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub deployed_at: DateTime<Utc>,
}

impl DeployedContract {
    /// EIP-55 rendering of the instance address.
    pub fn checksum_address(&self) -> String {
        checksummed(&self.address)
    }
}

pub struct Deployer {
    client: Arc<HarnessClient>,
    registry: ArtifactRegistry,
    confirmations: usize,
    confirm_timeout: Duration,
}

impl Deployer {
    pub fn new(
        client: Arc<HarnessClient>,
        registry: ArtifactRegistry,
        confirmations: usize,
        confirm_timeout: Duration,
    ) -> Self {
        Deployer {
            client,
            registry,
            confirmations,
            confirm_timeout,
        }
    }

    pub fn registry(&self) -> &ArtifactRegistry {
        &self.registry
    }

    /// Deploy the named contract with no constructor arguments and wait for
    /// confirmation. Errors out rather than returning any kind of null
    /// handle: unknown name, empty bytecode, revert, and timeout are all
    /// distinct `DeploymentError`s.
    pub async fn deploy(&self, name: &str) -> Result<DeployedContract, DeploymentError> {
        let artifact = self.registry.get(name)?;
        if !artifact.is_deployable() {
            return Err(DeploymentError::NotDeployable(name.to_string()));
        }

        let factory = ContractFactory::new(
            artifact.abi.clone(),
            artifact.bytecode.clone(),
            self.client.clone(),
        );
        let pending = factory
            .deploy(())
            .map_err(|e| classify(name, e))?
            .confirmations(self.confirmations);

        log::info!(
            "deploying `{}` ({} bytes of creation code)",
            name,
            artifact.bytecode.len()
        );

        let (instance, receipt) = match timeout(self.confirm_timeout, pending.send_with_receipt())
            .await
        {
            Ok(Ok(deployed)) => deployed,
            Ok(Err(e)) => return Err(classify(name, e)),
            Err(_) => {
                return Err(DeploymentError::ConfirmationTimeout {
                    name: name.to_string(),
                    timeout_secs: self.confirm_timeout.as_secs(),
                })
            }
        };

        if receipt.status == Some(0u64.into()) {
            return Err(DeploymentError::Reverted {
                name: name.to_string(),
                reason: "creation transaction mined with status 0".to_string(),
            });
        }
        let address = receipt
            .contract_address
            .ok_or_else(|| DeploymentError::NoReceiptAddress {
                name: name.to_string(),
            })?;
        debug_assert_eq!(address, instance.address());

        let deployed = DeployedContract {
            name: name.to_string(),
            address,
            transaction_hash: receipt.transaction_hash,
            deployed_at: Utc::now(),
        };
        log::info!(
            "deployed `{}` at {} (tx {:#x})",
            deployed.name,
            deployed.checksum_address(),
            deployed.transaction_hash
        );
        Ok(deployed)
    }
}

/// Map the contract machinery's error into the harness taxonomy. Reverts are
/// recognized by message; everything else is an RPC-level failure.
fn classify<M: Middleware>(name: &str, err: ContractError<M>) -> DeploymentError {
    let message = err.to_string();
    if message.to_ascii_lowercase().contains("revert") {
        DeploymentError::Reverted {
            name: name.to_string(),
            reason: message,
        }
    } else {
        DeploymentError::Rpc {
            name: name.to_string(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::is_proper_address;
    use std::str::FromStr;

    fn classify_message(name: &str, message: &str) -> DeploymentError {
        // Exercises the same branch logic as `classify` without needing a
        // middleware error in hand.
        if message.to_ascii_lowercase().contains("revert") {
            DeploymentError::Reverted {
                name: name.to_string(),
                reason: message.to_string(),
            }
        } else {
            DeploymentError::Rpc {
                name: name.to_string(),
                message: message.to_string(),
            }
        }
    }

    #[test]
    fn test_revert_messages_classify_as_reverted() {
        let cases = vec![
            "execution reverted",
            "Execution REVERTED: out of gas",
            "VM Exception: revert",
        ];
        for msg in cases {
            match classify_message("ChrysalisSender", msg) {
                DeploymentError::Reverted { name, .. } => assert_eq!(name, "ChrysalisSender"),
                other => panic!("expected Reverted for {:?}, got {:?}", msg, other),
            }
        }
    }

    #[test]
    fn test_other_messages_classify_as_rpc() {
        match classify_message("ChrysalisReceiver", "connection refused") {
            DeploymentError::Rpc { name, message } => {
                assert_eq!(name, "ChrysalisReceiver");
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected Rpc, got {:?}", other),
        }
    }

    #[test]
    fn test_deployed_contract_checksum_address() {
        let deployed = DeployedContract {
            name: "ChrysalisSender".to_string(),
            address: Address::from_str("0x5fbdb2315678afecb367f032d93f642f64180aa3").unwrap(),
            transaction_hash: TxHash::zero(),
            deployed_at: Utc::now(),
        };
        let rendered = deployed.checksum_address();
        assert!(is_proper_address(&rendered));
        assert_eq!(rendered, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
    }

    #[test]
    fn test_deployed_contract_serializes() {
        let deployed = DeployedContract {
            name: "ChrysalisReceiver".to_string(),
            address: Address::from([0x42; 20]),
            transaction_hash: TxHash::zero(),
            deployed_at: Utc::now(),
        };
        let json = serde_json::to_value(&deployed).unwrap();
        assert_eq!(json["name"], "ChrysalisReceiver");
        assert!(json["address"].as_str().unwrap().starts_with("0x"));
    }
}
