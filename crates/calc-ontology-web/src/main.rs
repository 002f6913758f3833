//! Calc Ontology Web Server binary.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! calc-ontology-web
//!
//! # Run with custom config
//! calc-ontology-web --config /path/to/config.toml
//!
//! # Override the listen address
//! calc-ontology-web --bind 0.0.0.0 --port 8080
//!
//! # Run in debug mode
//! RUST_LOG=debug calc-ontology-web
//! ```
//!
//! # Argument Priority
//!
//! CLI arguments > Environment variables > Config file > Defaults
//! - `--bind` overrides `CALC_ONTOLOGY__SERVER__BIND_ADDRESS`, `config.server.bind_address`
//! - `--port` overrides `CALC_ONTOLOGY__SERVER__PORT`, `config.server.port`

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use calc_ontology_core::{Config, Ontology, Vocabulary};
use calc_ontology_web::{router, AppState};

/// Parsed CLI arguments.
struct CliArgs {
    /// Path to configuration file
    config_path: Option<PathBuf>,
    /// Bind address override (--bind)
    bind_address: Option<String>,
    /// Port override (--port)
    port: Option<u16>,
    /// Show help
    help: bool,
}

impl CliArgs {
    /// Parse CLI arguments.
    ///
    /// Manual parsing without clap to keep the binary small.
    /// Supports: --config, --bind, --port, --help, -h
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut cli = CliArgs {
            config_path: None,
            bind_address: None,
            port: None,
            help: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => {
                    cli.help = true;
                }
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        cli.config_path = Some(PathBuf::from(&args[i]));
                    }
                }
                "--bind" => {
                    i += 1;
                    if i < args.len() {
                        cli.bind_address = Some(args[i].clone());
                    }
                }
                "--port" => {
                    i += 1;
                    if i < args.len() {
                        if let Ok(port) = args[i].parse::<u16>() {
                            cli.port = Some(port);
                        }
                    }
                }
                _ => {} // Ignore unknown arguments
            }
            i += 1;
        }

        cli
    }
}

/// Print help message.
fn print_help() {
    eprintln!(
        r#"Calc Ontology Web Server

USAGE:
    calc-ontology-web [OPTIONS]

OPTIONS:
    --config <PATH>   Path to configuration file
    --bind <ADDRESS>  Bind address (default 127.0.0.1)
    --port <PORT>     Listen port (default 3400)
    --help, -h        Show this help message

ENVIRONMENT VARIABLES:
    CALC_ONTOLOGY__SERVER__BIND_ADDRESS  Bind address
    CALC_ONTOLOGY__SERVER__PORT          Listen port
    CALC_ONTOLOGY__ONTOLOGY__PATH        Ontology document path
    RUST_LOG                             Log level (error, warn, info, debug, trace)

PRIORITY:
    CLI arguments > Environment variables > Config file > Defaults
"#
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();
    if cli.help {
        print_help();
        return Ok(());
    }

    // Config before logging: the configured level is the filter
    // fallback when RUST_LOG is unset.
    let mut config = match cli.config_path {
        Some(ref path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(bind) = cli.bind_address {
        config.server.bind_address = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate().context("Invalid configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    fmt().with_env_filter(filter).init();

    let vocabulary = Vocabulary::builtin();
    vocabulary
        .validate()
        .context("Builtin vocabulary failed validation")?;

    // Fatal if the document is missing or malformed: no route can be
    // served without the ontology.
    let ontology = Ontology::load(&config.ontology.path)
        .with_context(|| format!("Failed to load ontology from {}", config.ontology.path))?;

    let state = Arc::new(AppState::new(vocabulary, ontology));
    let app = router(state);

    let addr = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(address = %addr, "Serving calc-ontology web surface");

    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}
