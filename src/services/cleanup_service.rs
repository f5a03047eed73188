use sqlx::SqlitePool;
use tracing::info;

use crate::database::{connection_repo, social_account_repo};

#[derive(Debug, Default)]
pub struct ResetReport {
    pub connections_deleted: u64,
    pub social_accounts_deleted: u64,
}

// Administrative reset: removes every connection edge between the given
// users and unlinks their social accounts. Normal flows never delete
// connections; this is the only place that does.
pub async fn reset_social_connections(
    pool: &SqlitePool,
    user_ids: &[i64],
) -> sqlx::Result<ResetReport> {
    if user_ids.is_empty() {
        return Ok(ResetReport::default());
    }

    let connections_deleted = connection_repo::delete_connections_between(pool, user_ids).await?;
    let social_accounts_deleted = social_account_repo::delete_for_users(pool, user_ids).await?;

    info!(
        "social reset done: users={}, connections={}, social_accounts={}",
        user_ids.len(),
        connections_deleted,
        social_accounts_deleted
    );

    Ok(ResetReport {
        connections_deleted,
        social_accounts_deleted,
    })
}
