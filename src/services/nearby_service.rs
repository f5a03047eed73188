use sqlx::SqlitePool;

use crate::database::{nearby_repo, social_account_repo, user_repo};
use crate::models::UserCounts;
use crate::services::connection_service::{
    connection_category, connection_percentage, ConnectionCategory,
};

pub const DEFAULT_RADIUS_MILES: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct NearbyUserView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub hobbies: Vec<String>,
    pub featured: bool,
    pub distance_mi: Option<f64>,
    pub category: ConnectionCategory,
    pub connection_percentage: i64,
}

// Discovery around the viewer's last known position. Non-ghost users inside
// the radius are returned together with every featured user; a viewer
// without a position only sees the featured set. Results are ordered by
// distance, closest first, with distance-less featured users at the end.
pub async fn nearby_users(
    pool: &SqlitePool,
    viewer_id: i64,
    miles: f64,
) -> sqlx::Result<Vec<NearbyUserView>> {
    let Some(viewer) = user_repo::load_user(pool, viewer_id).await? else {
        return Err(sqlx::Error::RowNotFound);
    };
    let viewer_social = social_account_repo::social_count(pool, viewer_id).await?;

    let origin = viewer.latitude.zip(viewer.longitude);
    let bbox = origin.map(|(lat, lon)| bounding_box(lat, lon, miles));

    let rows = nearby_repo::load_nearby_candidates(pool, viewer_id, bbox).await?;

    let mut users = Vec::new();
    for row in rows {
        let featured = row.featured.unwrap_or(0) == 1;

        let distance_mi = match (origin, row.latitude, row.longitude) {
            (Some((lat0, lon0)), Some(lat1), Some(lon1)) => {
                Some(haversine_mi(lat0, lon0, lat1, lon1))
            }
            _ => None,
        };

        // The bounding box over-selects near its corners; drop anything the
        // exact distance puts outside the radius, unless it is featured.
        if let Some(dist) = distance_mi {
            if dist > miles && !featured {
                continue;
            }
        }

        let viewer_counts = UserCounts {
            social_count: viewer_social,
            sent_count: row.sent_count,
            received_count: row.received_count,
            ..Default::default()
        };
        let other_counts = UserCounts {
            social_count: row.social_count,
            ..Default::default()
        };

        users.push(NearbyUserView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            picture: row.picture,
            hobbies: parse_hobbies(row.hobbies.as_deref().unwrap_or("[]")),
            featured,
            distance_mi,
            category: connection_category(row.sent_count, row.received_count),
            connection_percentage: connection_percentage(&viewer_counts, &other_counts),
        });
    }

    users.sort_by(|a, b| {
        a.distance_mi
            .unwrap_or(f64::MAX)
            .partial_cmp(&b.distance_mi.unwrap_or(f64::MAX))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(users)
}

fn parse_hobbies(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw)
        .unwrap_or_default()
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn haversine_mi(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let to_rad = |deg: f64| deg.to_radians();
    let dlat = to_rad(lat2 - lat1);
    let dlon = to_rad(lon2 - lon1);
    let a = (dlat / 2.0).sin().powi(2)
        + to_rad(lat1).cos() * to_rad(lat2).cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();
    3959.0 * c
}

fn bounding_box(lat: f64, lon: f64, radius_mi: f64) -> (f64, f64, f64, f64) {
    let lat_change = radius_mi / 69.0;
    let lat_rad = lat.to_radians();
    let lon_change = (radius_mi / 69.0) / lat_rad.cos().abs();

    (
        lat - lat_change,
        lat + lat_change,
        lon - lon_change,
        lon + lon_change,
    )
}
