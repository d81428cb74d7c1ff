//! CLI definitions
//!
//! The binary runs the HTTP server by default; `search` and `health` run the
//! same pipeline once and print JSON.

use clap::{Args, Parser, Subcommand};

/// Address Finder
#[derive(Parser, Debug)]
#[command(name = "address-finder")]
#[command(about = "Address search API over an Elasticsearch index", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output (no short flag to avoid conflicts)
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve(ServeArgs),
    /// Run one address search and print the result
    Search(SearchArgs),
    /// Check that the engine is reachable
    Health,
}

/// Search engine connection flags
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Engine node URL
    #[arg(long, global = true, env = "ADDRESS_FINDER_ENGINE_URL", default_value = "http://localhost:9200")]
    pub engine_url: String,

    /// Index holding the address documents
    #[arg(long, global = true, env = "ADDRESS_FINDER_INDEX", default_value = "addresses")]
    pub index: String,

    /// Basic-auth username for engines with security enabled
    #[arg(long, global = true, env = "ADDRESS_FINDER_ENGINE_USERNAME")]
    pub engine_username: Option<String>,

    /// Basic-auth password
    #[arg(long, global = true, env = "ADDRESS_FINDER_ENGINE_PASSWORD", hide_env_values = true)]
    pub engine_password: Option<String>,

    /// Per-request engine timeout in seconds (none by default)
    #[arg(long, global = true, env = "ADDRESS_FINDER_ENGINE_TIMEOUT_SECS")]
    pub engine_timeout_secs: Option<u64>,
}

/// Server arguments
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "ADDRESS_FINDER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ADDRESS_FINDER_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// One-off search arguments
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text address query
    #[arg(short = 'q', long)]
    pub query: String,

    /// Only addresses in this city
    #[arg(long)]
    pub city: Option<String>,

    /// Only addresses with this postal code
    #[arg(long)]
    pub postal: Option<String>,
}
