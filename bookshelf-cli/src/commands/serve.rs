//! HTTP server command
//!
//! Connects, makes sure the `books` table exists, then serves until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::{ensure_schema, PgBookStore};
use bookshelf_server::{run_server, ServerConfig};

use crate::config::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BOOKSHELF_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // Fail before touching the network when the connection string is absent
    args.database.database_url()?;

    tracing::info!("Starting bookshelf server on {}", args.bind);

    let pool = args.database.connect().await?;
    ensure_schema(&pool)
        .await
        .context("Failed to create books table")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Blocks until shutdown
    run_server(Arc::new(PgBookStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
