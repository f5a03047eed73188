use sqlx::{sqlite::SqliteArguments, Arguments, SqlitePool};

use crate::models::NearbyCandidateRow;

pub const SQL_NEARBY_BASE: &str = r#"
SELECT
    u.id, u.first_name, u.last_name, u.picture, u.hobbies,
    u.featured, u.latitude, u.longitude,
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = ? AND c.user_2 = u.id) AS sent_count,
    (SELECT COUNT(DISTINCT c.provider) FROM connections c
     WHERE c.user_1 = u.id AND c.user_2 = ?) AS received_count,
    (SELECT COUNT(*) FROM social_accounts s WHERE s.user_id = u.id) AS social_count
FROM users u
WHERE u.id != ?
"#;

// The bounding box is only a coarse prefilter; the service computes exact
// distances. Featured users bypass both the box and the ghost-mode filter.
pub async fn load_nearby_candidates(
    pool: &SqlitePool,
    viewer_id: i64,
    bbox: Option<(f64, f64, f64, f64)>,
) -> sqlx::Result<Vec<NearbyCandidateRow>> {
    let mut sql = String::from(SQL_NEARBY_BASE);
    let mut args = SqliteArguments::default();
    args.add(viewer_id); // sent_count param
    args.add(viewer_id); // received_count param
    args.add(viewer_id);

    if let Some((min_lat, max_lat, min_lon, max_lon)) = bbox {
        sql.push_str(
            " AND (u.featured = 1 OR (u.ghost_mode = 0 \
             AND u.latitude BETWEEN ? AND ? AND u.longitude BETWEEN ? AND ?))",
        );
        args.add(min_lat);
        args.add(max_lat);
        args.add(min_lon);
        args.add(max_lon);
    } else {
        sql.push_str(" AND u.featured = 1");
    }

    sql.push_str(" ORDER BY u.id LIMIT 500");

    sqlx::query_as_with::<_, NearbyCandidateRow, _>(&sql, args)
        .fetch_all(pool)
        .await
}
