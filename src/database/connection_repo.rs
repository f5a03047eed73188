use sqlx::{sqlite::SqliteArguments, Arguments, SqlitePool};

use crate::models::{ConnectedCandidateRow, ConnectionRow, PairCountsRow};

pub struct NewConnection<'a> {
    pub user_1: i64,
    pub user_2: i64,
    pub provider: &'a str, // facebook|instagram|twitter|youtube|snapchat|linkedin
    pub confirmed: bool,
}

// One edge per (user_1, user_2, provider); re-recording an edge only moves
// the confirmed flag.
const SQL_UPSERT_CONNECTION: &str = r#"
INSERT INTO connections (
  user_1,
  user_2,
  provider,
  confirmed
) VALUES (?1, ?2, ?3, ?4)
ON CONFLICT (user_1, user_2, provider)
DO UPDATE SET confirmed = excluded.confirmed
"#;

pub const SQL_LIST_FOR_PAIR: &str = r#"
SELECT user_1, user_2, provider, confirmed
FROM connections
WHERE user_1 = ?1 AND user_2 = ?2
ORDER BY provider
"#;

pub const SQL_PAIR_COUNTS: &str = r#"
SELECT
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = ?1 AND c.user_2 = ?2) AS sent_count,
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = ?2 AND c.user_2 = ?1) AS received_count
"#;

pub const SQL_CONNECTED_CANDIDATES: &str = r#"
SELECT
    u.id, u.first_name, u.last_name, u.picture, u.hobbies,
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = ?1 AND c.user_2 = u.id) AS sent_count,
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = u.id AND c.user_2 = ?1) AS received_count,
    (SELECT COUNT(*) FROM social_accounts s WHERE s.user_id = u.id) AS social_count
FROM users u
WHERE u.id != ?1
  AND (
    EXISTS (SELECT 1 FROM connections c WHERE c.user_1 = ?1 AND c.user_2 = u.id)
    OR EXISTS (SELECT 1 FROM connections c WHERE c.user_1 = u.id AND c.user_2 = ?1)
  )
ORDER BY u.id
"#;

pub async fn upsert_connection(pool: &SqlitePool, new: NewConnection<'_>) -> sqlx::Result<()> {
    sqlx::query(SQL_UPSERT_CONNECTION)
        .bind(new.user_1)
        .bind(new.user_2)
        .bind(new.provider)
        .bind(new.confirmed)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_connections_for_pair(
    pool: &SqlitePool,
    user_1: i64,
    user_2: i64,
) -> sqlx::Result<Vec<ConnectionRow>> {
    sqlx::query_as::<_, ConnectionRow>(SQL_LIST_FOR_PAIR)
        .bind(user_1)
        .bind(user_2)
        .fetch_all(pool)
        .await
}

pub async fn load_pair_counts(
    pool: &SqlitePool,
    viewer_id: i64,
    other_id: i64,
) -> sqlx::Result<PairCountsRow> {
    sqlx::query_as::<_, PairCountsRow>(SQL_PAIR_COUNTS)
        .bind(viewer_id)
        .bind(other_id)
        .fetch_one(pool)
        .await
}

pub async fn load_connected_candidates(
    pool: &SqlitePool,
    viewer_id: i64,
) -> sqlx::Result<Vec<ConnectedCandidateRow>> {
    sqlx::query_as::<_, ConnectedCandidateRow>(SQL_CONNECTED_CANDIDATES)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
}

// Administrative cleanup: drops every edge between the given users, in both
// directions.
pub async fn delete_connections_between(
    pool: &SqlitePool,
    user_ids: &[i64],
) -> sqlx::Result<u64> {
    if user_ids.is_empty() {
        return Ok(0);
    }

    let in_list = placeholders(user_ids.len());
    let sql = format!(
        "DELETE FROM connections WHERE user_1 IN ({}) AND user_2 IN ({})",
        in_list, in_list
    );

    let mut args = SqliteArguments::default();
    for id in user_ids {
        args.add(*id);
    }
    for id in user_ids {
        args.add(*id);
    }

    let result = sqlx::query_with(&sql, args).execute(pool).await?;
    Ok(result.rows_affected())
}

pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
