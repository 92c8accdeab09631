//! PostgreSQL schema bootstrap for the pokemon collection.

use sqlx::PgPool;

/// Create the table and its constraints if they do not exist yet.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemon (
            id UUID PRIMARY KEY,
            name TEXT NOT NULL,
            no INTEGER NOT NULL CHECK (no > 0),
            revision INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT pokemon_name_key UNIQUE (name),
            CONSTRAINT pokemon_no_key UNIQUE (no)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
