//! Command line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Start the server (default command)
//! cargo run
//! cargo run -- serve
//!
//! # Print a fresh value for SECRET_KEY
//! cargo run -- gen-secret
//!
//! # Validate configuration without starting the server
//! cargo run -- check-config
//! ```

use admin_gate::config::{self, Config};
use admin_gate::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rand::Rng;
use tracing_subscriber::EnvFilter;

/// Session-based login gate for a single admin page.
#[derive(Parser)]
#[command(name = "admin-gate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print a random hex secret suitable for SECRET_KEY
    GenSecret {
        /// Number of random bytes
        #[arg(short, long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(16..=256))]
        bytes: u16,
    },

    /// Validate configuration and print a summary
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = config::load_from_env().context("Invalid configuration")?;
            init_tracing(&config);
            config.print_summary();
            server::run(config).await?;
        }
        Commands::GenSecret { bytes } => {
            println!("{}", generate_secret(usize::from(bytes)));
            eprintln!(
                "{}",
                "Store this value as SECRET_KEY; changing it logs everyone out.".yellow()
            );
        }
        Commands::CheckConfig => {
            let config = config::load_from_env().context("Invalid configuration")?;
            init_tracing(&config);
            config.print_summary();
            if config.uses_default_secret() {
                println!(
                    "{}",
                    "Configuration valid, but SECRET_KEY uses the insecure default".yellow()
                );
            } else {
                println!("{}", "Configuration valid".green());
            }
        }
    }

    Ok(())
}

/// Installs the global tracing subscriber in text or JSON format.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Returns `len` random bytes as lowercase hex.
fn generate_secret(len: usize) -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
    hex::encode(bytes)
}
