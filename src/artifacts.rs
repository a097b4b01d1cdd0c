// src/artifacts.rs
//
// Registry of compiled contract artifacts (Hardhat JSON format). The deployer
// only ever asks it one question: "give me the artifact for this name".

use anyhow::{Context, Result};
use ethers::abi::Abi;
use ethers::types::Bytes;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::DeploymentError;

/// One compiled contract, as emitted by the Solidity toolchain.
/// Unknown fields (sourceName, deployedBytecode, link references, ...) are
/// ignored on parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub abi: Abi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Interfaces and abstract contracts compile to an empty bytecode blob.
    pub fn is_deployable(&self) -> bool {
        !self.bytecode.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ArtifactRegistry {
    artifacts: HashMap<String, ContractArtifact>,
}

impl ArtifactRegistry {
    /// Load every artifact under `dir`, keyed by contract name. Scans the
    /// directory itself plus one level of `Name.sol/Name.json` nesting, the
    /// two layouts the toolchain produces. Non-JSON files and `.dbg.json`
    /// debug companions are skipped; files that are JSON but not artifacts
    /// are skipped with a warning.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut artifacts = HashMap::new();

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read artifact directory {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                for nested in fs::read_dir(&path)? {
                    Self::consider_file(&nested?.path(), &mut artifacts);
                }
            } else {
                Self::consider_file(&path, &mut artifacts);
            }
        }

        log::info!(
            "artifact registry: {} contract(s) loaded from {}",
            artifacts.len(),
            dir.display()
        );
        Ok(ArtifactRegistry { artifacts })
    }

    /// Build a registry from already-parsed artifacts. Used by tests.
    pub fn from_artifacts(items: impl IntoIterator<Item = ContractArtifact>) -> Self {
        let artifacts = items
            .into_iter()
            .map(|a| (a.contract_name.clone(), a))
            .collect();
        ArtifactRegistry { artifacts }
    }

    fn consider_file(path: &Path, artifacts: &mut HashMap<String, ContractArtifact>) {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => return,
        };
        if !name.ends_with(".json") || name.ends_with(".dbg.json") {
            return;
        }

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("skipping unreadable artifact {}: {}", path.display(), e);
                return;
            }
        };
        match serde_json::from_str::<ContractArtifact>(&raw) {
            Ok(artifact) => {
                log::debug!(
                    "loaded artifact `{}` from {}",
                    artifact.contract_name,
                    path.display()
                );
                artifacts.insert(artifact.contract_name.clone(), artifact);
            }
            Err(e) => {
                log::warn!("skipping non-artifact JSON {}: {}", path.display(), e);
            }
        }
    }

    /// Look up an artifact by contract name. Unknown names are a hard
    /// `DeploymentError`, never a silent null handle.
    pub fn get(&self, name: &str) -> Result<&ContractArtifact, DeploymentError> {
        self.artifacts
            .get(name)
            .ok_or_else(|| DeploymentError::MissingArtifact(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.artifacts.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}
