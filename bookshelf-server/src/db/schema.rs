//! `books` table creation
//!
//! There is no migration history: the table and its indexes are created
//! if absent and left alone otherwise.

use sqlx::PgPool;

use super::DbError;

const CREATE_BOOKS: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id SERIAL PRIMARY KEY,
        title VARCHAR NOT NULL,
        author VARCHAR NOT NULL
    )
"#;

const INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS ix_books_id ON books (id)",
    "CREATE INDEX IF NOT EXISTS ix_books_title ON books (title)",
    "CREATE INDEX IF NOT EXISTS ix_books_author ON books (author)",
];

/// Create the `books` table and its indexes if they do not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Ensuring books schema...");

    sqlx::query(CREATE_BOOKS).execute(pool).await?;

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Books schema ready");
    Ok(())
}
