use sqlx::SqlitePool;

const SQL_INSERT_INVITE: &str = r#"
INSERT INTO invites (user_id, device_id)
VALUES (?1, ?2)
ON CONFLICT (user_id, device_id) DO NOTHING
"#;

const SQL_DEVICE_IS_REGISTERED: &str = r#"
SELECT EXISTS (SELECT 1 FROM devices WHERE device_id = ?1)
"#;

const SQL_REGISTER_DEVICE: &str = r#"
INSERT INTO devices (device_id)
VALUES (?1)
ON CONFLICT (device_id) DO NOTHING
"#;

// Returns false when the (user, device) invite already existed.
pub async fn insert_invite(
    pool: &SqlitePool,
    user_id: i64,
    device_id: &str,
) -> sqlx::Result<bool> {
    let result = sqlx::query(SQL_INSERT_INVITE)
        .bind(user_id)
        .bind(device_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn device_is_registered(pool: &SqlitePool, device_id: &str) -> sqlx::Result<bool> {
    let exists = sqlx::query_scalar::<_, i64>(SQL_DEVICE_IS_REGISTERED)
        .bind(device_id)
        .fetch_one(pool)
        .await?;
    Ok(exists != 0)
}

pub async fn register_device(pool: &SqlitePool, device_id: &str) -> sqlx::Result<()> {
    sqlx::query(SQL_REGISTER_DEVICE)
        .bind(device_id)
        .execute(pool)
        .await?;
    Ok(())
}
