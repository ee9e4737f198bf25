//! Schema bootstrap for the trivia tables
//!
//! Idempotent: safe to run against a database that already holds the schema.

use sqlx::PgPool;

use crate::Result;

/// The six categories the trivia frontend ships with
pub const DEFAULT_CATEGORIES: [(i32, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Create the categories and questions tables if missing
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id),
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] that are not present yet
pub async fn seed_categories(pool: &PgPool) -> Result<()> {
    let mut inserted = 0u64;
    for (id, kind) in DEFAULT_CATEGORIES {
        inserted += sqlx::query(
            "INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(kind)
        .execute(pool)
        .await?
        .rows_affected();
    }

    // Explicit ids bypass the sequence; move it past the seeded rows.
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), (SELECT MAX(id) FROM categories))",
    )
    .execute(pool)
    .await?;

    tracing::info!(inserted, "Seeded default categories");
    Ok(())
}
