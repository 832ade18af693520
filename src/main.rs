//! school-admin entry point.
//!
//! Parses CLI arguments, initializes logging, wires the store client and
//! starts the HTTP server. All request logic lives in the library.

use std::sync::Arc;

use clap::Parser;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use school_admin::api::server;
use school_admin::config::ServerConfig;
use school_admin::store::MemoryStore;

/// School administration CRUD service
#[derive(Parser, Debug)]
#[command(name = "school-admin")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host to bind to (overrides SCHOOL_ADMIN_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides SCHOOL_ADMIN_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("logger initialization failed; continuing without logs");
    }

    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    // The in-memory backend stands in for the external document database;
    // any DocumentStore implementation can be injected here instead.
    let store = Arc::new(MemoryStore::new());

    if let Err(e) = server::serve(store, config).await {
        log::error!("server exited: {e}");
        std::process::exit(1);
    }
}
