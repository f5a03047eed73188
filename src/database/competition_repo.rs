use sqlx::{sqlite::SqliteArguments, Arguments, SqlitePool};

use crate::database::connection_repo::placeholders;
use crate::models::CompetitionCountsRow;

// One scan over users with scalar subqueries per count. The target-id counts
// are COUNT(DISTINCT user_2): hitting the same account on several providers
// still scores it once. Rows come back in id order so a stable sort on the
// computed points keeps registration order for ties.
pub async fn load_competition_counts(
    pool: &SqlitePool,
    friendthem_id: i64,
    fraternity_ids: &[i64],
    sorority_ids: &[i64],
) -> sqlx::Result<Vec<CompetitionCountsRow>> {
    let sql = format!(
        r#"
SELECT
    u.id,
    u.first_name,
    u.last_name,
    (SELECT COUNT(*) FROM social_accounts s WHERE s.user_id = u.id) AS social_count,
    (SELECT COUNT(*) FROM connections c WHERE c.user_1 = u.id) AS sent_count,
    (SELECT COUNT(*) FROM connections c WHERE c.user_2 = u.id) AS received_count,
    (SELECT COUNT(*) FROM invites i WHERE i.user_id = u.id) AS invite_count,
    (SELECT COUNT(DISTINCT c.user_2) FROM connections c
     WHERE c.user_1 = u.id AND c.user_2 = ?) AS friendthem_count,
    (SELECT COUNT(DISTINCT c.user_2) FROM connections c
     WHERE c.user_1 = u.id AND c.user_2 IN ({fraternity})) AS fraternity_count,
    (SELECT COUNT(DISTINCT c.user_2) FROM connections c
     WHERE c.user_1 = u.id AND c.user_2 IN ({sorority})) AS sorority_count
FROM users u
ORDER BY u.id
"#,
        fraternity = placeholders(fraternity_ids.len()),
        sorority = placeholders(sorority_ids.len()),
    );

    let mut args = SqliteArguments::default();
    args.add(friendthem_id);
    for id in fraternity_ids {
        args.add(*id);
    }
    for id in sorority_ids {
        args.add(*id);
    }

    sqlx::query_as_with::<_, CompetitionCountsRow, _>(&sql, args)
        .fetch_all(pool)
        .await
}
