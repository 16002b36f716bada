//! Quote plugin - external capability plugin for the Core orchestrator
//!
//! Main entry point for the quote plugin CLI and server.

mod cli;
mod register;
mod server;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{info, warn};

use quote_plugin_config::{Config, ConfigError, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands, DEFAULT_CONFIG_PATH};
use crate::register::{build_registration, CoreClient};
use crate::server::{build_registry, init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli.core_url, &command);
    let warnings = ConfigValidator::validate(&config).into_result()?;

    init_tracing(&config.logging)?;
    for warning in &warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }

    match command {
        Commands::Run { register, .. } => run_server(config, register).await,
        Commands::Register => {
            let registry = build_registry().await?;
            let registration = build_registration(&config, &registry);
            let client = CoreClient::new(&config.core.url, config.core.timeout_secs)?;
            client.register(&registration).await?;
            info!("Registered '{}' with Core at {}", registration.plugin_id, config.core.url);
            println!("registered {}", registration.plugin_id);
            Ok(())
        }
        Commands::Unregister => {
            let client = CoreClient::new(&config.core.url, config.core.timeout_secs)?;
            let removed = client.unregister(&config.plugin.id).await?;
            if removed {
                println!("unregistered {}", config.plugin.id);
            } else {
                println!("{} was not registered", config.plugin.id);
            }
            Ok(())
        }
        Commands::Manifest => {
            let registry = build_registry().await?;
            let registration = build_registration(&config, &registry);
            println!("{}", serde_json::to_string_pretty(&registration)?);
            Ok(())
        }
    }
}

/// An explicit path must exist; the default path is optional.
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::load_or_default(&PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

/// Layer CLI flags over the loaded config.
fn apply_overrides(config: &mut Config, core_url: Option<String>, command: &Commands) {
    if let Some(url) = core_url {
        config.core.url = url;
    }
    if let Commands::Run { host, port, .. } = command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
}
