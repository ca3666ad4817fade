use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snek_agent::policy::Policy;
use snek_agent::server;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snek-agent")]
#[command(version, about = "WebSocket-served snake agent driven by a trained policy")]
struct Cli {
    /// Path to the trained policy weight artifact
    #[arg(long, default_value = "models/policy.mpk")]
    model: PathBuf,

    /// Address to listen on for client sessions
    #[arg(long, default_value = "127.0.0.1:8000")]
    listen: String,

    /// Deployment environment, controls the default log level
    #[arg(long, value_enum, default_value = "dev")]
    env: Env,
}

#[derive(Clone, Copy, ValueEnum)]
enum Env {
    /// Development: debug-level logging
    Dev,
    /// Production: info-level logging
    Prd,
}

impl Env {
    fn default_filter(self) -> &'static str {
        match self {
            Env::Dev => "debug",
            Env::Prd => "info",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level is resolved exactly once, here; RUST_LOG overrides the
    // environment default.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.env.default_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // No policy, no server: a failed load is fatal at startup.
    let policy = Policy::load(&cli.model)
        .with_context(|| format!("Failed to load policy from {:?}", cli.model))?;

    server::serve(&cli.listen, Arc::new(policy)).await
}
