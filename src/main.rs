use clap::Parser;
use coffee_machine::utils::{logger, validation::Validate};
use coffee_machine::{serve, CliConfig, Order, Result, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coffee-machine CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    let order = match build_order(&config) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Could not build order: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    match serve(&order) {
        Ok(messages) => {
            for message in &messages {
                println!("{}", message);
            }
            tracing::info!("Order served");
        }
        Err(e) => {
            tracing::error!("Failed to serve order: {}", e);
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn build_order(config: &CliConfig) -> Result<Order> {
    match &config.config {
        Some(path) => {
            tracing::debug!("Loading order from config file: {}", path);
            let file = TomlConfig::from_file(path)?;
            file.into_order()
        }
        None => Ok(Order::new(config.beverage, config.milk)),
    }
}
