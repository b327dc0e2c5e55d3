//! Start the trivia server.

use clap::Args;

use trivia_core::config::StoreBackend;
use trivia_core::error::AppError;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Serve from an in-memory store instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,

    /// Fix the quiz random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path).await?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.memory {
        config.store.backend = StoreBackend::Memory;
    }
    if args.seed.is_some() {
        config.quiz.seed = args.seed;
    }

    println!("Starting trivia server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());
    output::print_kv("Store", config.store.backend.as_str());

    trivia_api::run_server(config).await
}
