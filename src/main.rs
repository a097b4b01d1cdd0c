use std::process;

mod address;
mod artifacts;
mod bootstrap;
mod chain;
mod config;
mod error;

#[tokio::main]
async fn main() {
    env_logger::init();

    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("usage: chrysalis_harness <ContractName> [<ContractName> ...]");
        process::exit(2);
    }

    // Load configuration
    let config = config::Config::from_env()
        .expect("Failed to load configuration");

    // Build harness state (provider, signer, artifact registry)
    let harness = bootstrap::Harness::new(&config)
        .await
        .expect("Failed to initialize deployment harness");

    for name in &names {
        match harness.deployer.deploy(name).await {
            Ok(deployed) => {
                println!("{}  {}", deployed.name, deployed.checksum_address());
            }
            Err(e) => {
                eprintln!("deployment of `{}` failed: {}", name, e);
                process::exit(1);
            }
        }
    }
}
