#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use friendthem::database::schema;
use friendthem::models::Provider;

pub async fn setup_test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::ensure_schema(&pool).await.unwrap();
    pool
}

pub async fn insert_user(pool: &SqlitePool, id: i64, first_name: &str) {
    sqlx::query("INSERT INTO users (id, first_name, last_name) VALUES (?1, ?2, '')")
        .bind(id)
        .bind(first_name)
        .execute(pool)
        .await
        .unwrap();
}

pub struct UserSpec<'a> {
    pub id: i64,
    pub first_name: &'a str,
    pub ghost_mode: bool,
    pub featured: bool,
    pub position: Option<(f64, f64)>,
}

pub async fn insert_user_spec(pool: &SqlitePool, spec: UserSpec<'_>) {
    let (latitude, longitude) = match spec.position {
        Some((lat, lon)) => (Some(lat), Some(lon)),
        None => (None, None),
    };
    sqlx::query(
        "INSERT INTO users (id, first_name, last_name, ghost_mode, featured, latitude, longitude) \
         VALUES (?1, ?2, '', ?3, ?4, ?5, ?6)",
    )
    .bind(spec.id)
    .bind(spec.first_name)
    .bind(spec.ghost_mode)
    .bind(spec.featured)
    .bind(latitude)
    .bind(longitude)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_connection(pool: &SqlitePool, user_1: i64, user_2: i64, provider: &str) {
    sqlx::query(
        "INSERT INTO connections (user_1, user_2, provider, confirmed) VALUES (?1, ?2, ?3, 1)",
    )
    .bind(user_1)
    .bind(user_2)
    .bind(provider)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn link_social_accounts(pool: &SqlitePool, user_id: i64, count: usize) {
    for provider in Provider::ALL.iter().take(count) {
        sqlx::query("INSERT INTO social_accounts (user_id, provider) VALUES (?1, ?2)")
            .bind(user_id)
            .bind(provider.as_str())
            .execute(pool)
            .await
            .unwrap();
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
