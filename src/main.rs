//! address-finder API server & CLI
//!
//! - Server mode (default, or `serve`): `GET /search` and `GET /health`
//! - CLI mode: `search` and `health` run once and print JSON to stdout

use address_finder::cli::{Cli, Commands, SearchArgs, ServeArgs};
use address_finder::config::EngineConfig;
use address_finder::engine::ElasticClient;
use address_finder::error::AppError;
use address_finder::search::{AddressSearch, SearchRequest};
use address_finder::server;
use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity flags; RUST_LOG wins when set
    let log_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Log to stderr to keep stdout clean
        .init();

    let result = match build_search(&cli) {
        Ok(search) => match cli.command {
            Some(Commands::Serve(args)) => run_server(args, search).await,
            None => run_server(ServeArgs::default(), search).await,
            Some(Commands::Search(args)) => execute_search_cli(args, search).await,
            Some(Commands::Health) => execute_health_cli(search).await,
        },
        Err(e) => Err(e),
    };

    // Handle result and exit with appropriate code
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
    Ok(())
}

/// Construct the engine client once; it is shared for the process lifetime
fn build_search(cli: &Cli) -> Result<Arc<AddressSearch>, AppError> {
    let config = EngineConfig::from_args(&cli.engine)?;
    let client = ElasticClient::new(&config)?;
    info!("Using engine at {} (index '{}')", client.base_url(), config.index);

    Ok(Arc::new(AddressSearch::new(Arc::new(client), config.index)))
}

async fn run_server(args: ServeArgs, search: Arc<AddressSearch>) -> Result<(), AppError> {
    let listener = server::bind(&args.host, args.port)
        .await
        .map_err(|e| AppError::Config(format!("Cannot listen on {}:{}: {}", args.host, args.port, e)))?;
    server::serve(listener, search)
        .await
        .map_err(|e| AppError::Internal(format!("HTTP server error: {}", e)))
}

/// Execute search command in CLI mode
async fn execute_search_cli(args: SearchArgs, search: Arc<AddressSearch>) -> Result<(), AppError> {
    let request = SearchRequest::new(&args.query, args.city.as_deref(), args.postal.as_deref());
    let result = search.search(&request).await?;
    print_json(&result)
}

/// Execute health command in CLI mode; fails when the engine is down
async fn execute_health_cli(search: Arc<AddressSearch>) -> Result<(), AppError> {
    let report = search.health().await;
    print_json(&report)?;

    if report.is_ok() {
        Ok(())
    } else {
        Err(AppError::Unhealthy)
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))?;
    println!("{}", text);
    Ok(())
}
