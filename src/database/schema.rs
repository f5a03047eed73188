use sqlx::SqlitePool;

// Schema is code-driven: every statement is idempotent so the pool can be
// pointed at a fresh file (or an in-memory database) and provisioned on the
// spot.
pub const SQL_SCHEMA: [&str; 5] = [
    r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL DEFAULT '',
    last_name TEXT NOT NULL DEFAULT '',
    picture TEXT,
    hobbies TEXT,
    ghost_mode INTEGER NOT NULL DEFAULT 0,
    featured INTEGER NOT NULL DEFAULT 0,
    latitude REAL,
    longitude REAL
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS connections (
    user_1 INTEGER NOT NULL REFERENCES users (id),
    user_2 INTEGER NOT NULL REFERENCES users (id),
    provider TEXT NOT NULL,
    confirmed INTEGER NOT NULL DEFAULT 1,
    UNIQUE (user_1, user_2, provider)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS social_accounts (
    user_id INTEGER NOT NULL REFERENCES users (id),
    provider TEXT NOT NULL,
    UNIQUE (user_id, provider)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS invites (
    user_id INTEGER NOT NULL REFERENCES users (id),
    device_id TEXT NOT NULL,
    UNIQUE (user_id, device_id)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS devices (
    device_id TEXT PRIMARY KEY
)
"#,
];

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for statement in SQL_SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
