pub mod deployer;
pub mod providers;
pub mod signer;
