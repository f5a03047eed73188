use sqlx::SqlitePool;

use crate::models::UsersRow;

pub const SQL_LOAD_USER: &str = r#"
SELECT
    id,
    first_name,
    last_name,
    picture,
    hobbies,
    ghost_mode,
    featured,
    latitude,
    longitude
FROM users
WHERE id = ?1
LIMIT 1
"#;

pub async fn load_user(pool: &SqlitePool, user_id: i64) -> sqlx::Result<Option<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LOAD_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
