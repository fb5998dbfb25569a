use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleetboard::{build_router, AppState, ViewSettings};
use fleetboard_core::InventoryBackend;

/// Web dashboard over a configuration-management inventory service.
#[derive(Debug, Parser)]
#[command(name = "fleetboard", version, about)]
struct Cli {
    /// Path to the config file (defaults to the XDG location).
    #[arg(long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Listen address override, e.g. 0.0.0.0:5000.
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// Inventory service base URL override.
    #[arg(long, value_name = "URL", env = "FLEETBOARD_INVENTORY__URL")]
    inventory_url: Option<String>,

    /// Force offline mode: only same-origin asset references.
    #[arg(long)]
    offline: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error, Diagnostic)]
enum ServeError {
    #[error("Configuration error")]
    #[diagnostic(
        code(fleetboard::config),
        help("Check the config file and FLEETBOARD_* environment variables.")
    )]
    Config(#[from] fleetboard_config::ConfigError),

    #[error("Cannot reach the inventory service")]
    #[diagnostic(
        code(fleetboard::backend),
        help("Check [inventory] url in the config, or pass --inventory-url.")
    )]
    Backend(#[from] fleetboard_core::CoreError),

    #[error("Cannot bind listen address {addr}")]
    #[diagnostic(
        code(fleetboard::bind),
        help("Is another process already listening there? Try --listen.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server terminated unexpectedly")]
    #[diagnostic(code(fleetboard::serve))]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), ServeError> {
    let mut settings = match &cli.config {
        Some(path) => fleetboard_config::load_settings_from(path)?,
        None => fleetboard_config::load_settings_or_default(),
    };

    // CLI flags win over file and environment.
    if let Some(listen) = cli.listen {
        settings.listen = listen;
    }
    if let Some(url) = cli.inventory_url {
        settings.inventory.url = url;
    }
    if cli.offline {
        settings.offline_mode = true;
    }

    let backend = InventoryBackend::connect(&settings.inventory_config()?)?;
    let state = AppState::new(
        backend,
        ViewSettings {
            default_environment: settings.default_environment.clone(),
            offline_mode: settings.offline_mode,
            unreported_hours: settings.unreported_hours,
        },
    );
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&settings.listen)
        .await
        .map_err(|source| ServeError::Bind {
            addr: settings.listen.clone(),
            source,
        })?;

    info!(
        listen = %settings.listen,
        inventory = %settings.inventory.url,
        offline = settings.offline_mode,
        "fleetboard listening"
    );

    axum::serve(listener, router).await.map_err(ServeError::Serve)
}
