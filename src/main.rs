use tracing::{error, info};
use lightning_logger::cli::{build_cli, parse_config};
use lightning_logger::internal::facade::registry::{get_logger, install};
use lightning_logger::internal::facade::Registry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let (config, invocation) = match parse_config(&matches) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = lightning_logger::internal::logger::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("Version: {}", lightning_logger::internal::config::get_version_info());

    let registry = match Registry::from_config(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to set up log backend: {:#}", e);
            std::process::exit(1);
        }
    };

    let registry = match install(registry) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to install registry: {}", e);
            std::process::exit(1);
        }
    };

    let logger = match get_logger(invocation.options) {
        Ok(logger) => logger,
        Err(e) => {
            error!("Failed to create logger: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logger.entry(invocation.level).log(invocation.message).await {
        error!("Failed to submit log entry: {}", e);
        std::process::exit(1);
    }

    if let Some(id) = registry.current_transaction().cached() {
        info!("Logged under transaction {}", id);
    }
    Ok(())
}
