//! trivia CLI - launch the trivia quiz API server
//!
//! Connects to PostgreSQL, runs the startup migrations, and serves the
//! HTTP API until Ctrl+C/SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::{create_pool, migrations, run_server, ServerConfig};

mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(name = "trivia", version, about = "Trivia quiz API server")]
struct Args {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3030)]
    port: u16,

    /// PostgreSQL connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Allow requests from any origin
    #[arg(long)]
    cors_permissive: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_tracing(&TracingConfig { debug: args.debug })?;

    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set (flag or environment)")?;

    let pool = create_pool(&database_url)
        .await
        .context("failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    let bind_addr: SocketAddr = format!("{}:{}", args.bind, args.port)
        .parse()
        .context("invalid bind address")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
        timeout_secs: args.timeout,
    };

    tracing::info!("Starting trivia API on http://{}", bind_addr);
    run_server(pool, config).await?;

    Ok(())
}
