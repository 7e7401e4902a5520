//! log-registry command line.
//!
//! Emits messages through a named logger so the registry and its output
//! format can be exercised from a shell:
//!
//! ```text
//! $ log-registry --name calibration --level DEBUG --severity debug "table loaded"
//! 2024/03/15 09:21:07 - DEBUG : table loaded
//! ```
//!
//! Level names are coerced here, at the edge: exactly `DEBUG` enables debug
//! output and anything else means INFO.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use log_registry::config::{load_config, RegistryConfig};
use log_registry::{LoggerRegistry, Severity, Threshold};

#[derive(Parser)]
#[command(name = "log-registry")]
#[command(about = "Emit messages through a named logger", long_about = None)]
struct Cli {
    /// TOML file listing loggers to register up front.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Logger name.
    #[arg(short, long)]
    name: String,

    /// Logger level ("DEBUG", anything else means INFO). Falls back to the
    /// config's default_level.
    #[arg(short, long)]
    level: Option<String>,

    /// Severity of the emitted messages.
    #[arg(short, long, default_value = "info")]
    severity: Severity,

    /// Messages to emit, one line each.
    #[arg(required = true)]
    messages: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "log_registry=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };

    let registry = LoggerRegistry::from_config(&config);
    let threshold = match &cli.level {
        Some(level) => Threshold::from_level_name(level),
        None => config.default_threshold(),
    };

    tracing::debug!(
        name = %cli.name,
        %threshold,
        preregistered = registry.len(),
        "Resolving logger"
    );

    let logger = registry.get_or_create_logger(&cli.name, threshold);
    for message in &cli.messages {
        logger.log(cli.severity, message);
    }

    Ok(())
}
