use sqlx::{sqlite::SqliteArguments, Arguments, SqlitePool};

use crate::database::connection_repo::placeholders;

pub const SQL_SOCIAL_COUNT: &str = r#"
SELECT COUNT(*) FROM social_accounts WHERE user_id = ?1
"#;

pub async fn social_count(pool: &SqlitePool, user_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_SOCIAL_COUNT)
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn delete_for_users(pool: &SqlitePool, user_ids: &[i64]) -> sqlx::Result<u64> {
    if user_ids.is_empty() {
        return Ok(0);
    }

    let sql = format!(
        "DELETE FROM social_accounts WHERE user_id IN ({})",
        placeholders(user_ids.len())
    );

    let mut args = SqliteArguments::default();
    for id in user_ids {
        args.add(*id);
    }

    let result = sqlx::query_with(&sql, args).execute(pool).await?;
    Ok(result.rows_affected())
}
