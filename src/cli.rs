//! CLI definitions for the quote plugin.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Config file used when `--config` is not given. Missing is not an error.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Quote plugin CLI.
#[derive(Parser)]
#[command(name = "quote-plugin")]
#[command(about = "External capability plugin serving inspirational quotes")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to config/default.toml when present)
    #[arg(short, long, env = "QUOTE_PLUGIN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Core orchestrator base URL (overrides core.url)
    #[arg(long, env = "CORE_URL", global = true)]
    pub core_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum Commands {
    /// Run the plugin server in foreground (default)
    Run {
        /// Server host (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides server.port)
        #[arg(long)]
        port: Option<u16>,

        /// Register with the Core once listening
        #[arg(long)]
        register: bool,
    },

    /// Register this plugin with the Core and exit
    Register,

    /// Remove this plugin's registration from the Core and exit
    Unregister,

    /// Print the registration descriptor as JSON
    Manifest,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            host: None,
            port: None,
            register: false,
        }
    }
}
