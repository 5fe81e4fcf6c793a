//! Database configuration shared by subcommands
//!
//! Resolution order for each value: command-line flag, environment
//! variable (including entries loaded from `.env`), built-in default.
//! The connection string has no default.

use anyhow::{Context, Result};
use clap::Args;

use bookshelf_server::db::{PgPool, DEFAULT_MAX_CONNECTIONS};

#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Postgres connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "BOOKSHELF_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// The connection string, or an error naming how to supply it.
    pub fn database_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }

    /// Connect a pool using these settings.
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self.database_url()?;
        bookshelf_server::db::create_pool_with_options(url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}
