use thiserror::Error;

/// Everything that can go wrong between "deploy this contract by name" and
/// holding a confirmed on-chain address. No variant is recovered from locally;
/// callers surface these as failed runs.
#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("no compiled artifact named `{0}` in the registry")]
    MissingArtifact(String),

    #[error("artifact `{0}` carries no creation bytecode (interface or abstract contract?)")]
    NotDeployable(String),

    #[error("deployment of `{name}` reverted: {reason}")]
    Reverted { name: String, reason: String },

    #[error("deployment of `{name}` was not confirmed within {timeout_secs}s")]
    ConfirmationTimeout { name: String, timeout_secs: u64 },

    #[error("deployment of `{name}` was mined but the receipt carries no contract address")]
    NoReceiptAddress { name: String },

    #[error("rpc failure while deploying `{name}`: {message}")]
    Rpc { name: String, message: String },

    #[error("provider error: {0}")]
    Provider(String),

    #[error("signer setup failed: {0}")]
    Signer(String),
}
