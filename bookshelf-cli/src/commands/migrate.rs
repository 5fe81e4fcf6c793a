//! Schema command: create the `books` table without serving

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf_server::db::ensure_schema;

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

/// Create the table and indexes, then exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.database.connect().await?;
    ensure_schema(&pool)
        .await
        .context("Failed to create books table")?;
    pool.close().await;

    println!("books table ready");
    Ok(())
}
