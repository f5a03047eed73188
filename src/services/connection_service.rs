use std::str::FromStr;

use serde::Serialize;
use sqlx::SqlitePool;

use crate::database::{connection_repo, social_account_repo};
use crate::models::{ConnectionRow, Provider, UserCounts};

/// Directional classification of the edges between a user pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionCategory {
    Sent,
    Received,
    Both,
    Nothing,
}

impl ConnectionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionCategory::Sent => "sent",
            ConnectionCategory::Received => "received",
            ConnectionCategory::Both => "both",
            ConnectionCategory::Nothing => "nothing",
        }
    }
}

pub fn connection_category(sent_count: i64, received_count: i64) -> ConnectionCategory {
    match (sent_count > 0, received_count > 0) {
        (true, false) => ConnectionCategory::Sent,
        (false, true) => ConnectionCategory::Received,
        (true, true) => ConnectionCategory::Both,
        (false, false) => ConnectionCategory::Nothing,
    }
}

/// How far along the viewer's connection with the other user is, as an
/// integer percentage in [0, 100].
///
/// Counts in `viewer` are scoped to the pair: `sent_count` are edges from
/// the viewer to the other user, `received_count` the reverse. The divisor
/// depends on the category (both social counts for `Both`, the viewer's for
/// `Received`, the other's for `Sent`); a zero divisor yields 0 rather than
/// an error. Rounding is half-up.
pub fn connection_percentage(viewer: &UserCounts, other: &UserCounts) -> i64 {
    let (count, divisor) = match connection_category(viewer.sent_count, viewer.received_count) {
        ConnectionCategory::Both => (
            viewer.sent_count + viewer.received_count,
            viewer.social_count + other.social_count,
        ),
        ConnectionCategory::Received => (viewer.received_count, viewer.social_count),
        ConnectionCategory::Sent => (viewer.sent_count, other.social_count),
        ConnectionCategory::Nothing => return 0,
    };

    percentage_of(count, divisor)
}

fn percentage_of(count: i64, divisor: i64) -> i64 {
    if divisor <= 0 {
        return 0;
    }
    let rounded = (count * 100 + divisor / 2) / divisor;
    rounded.min(100)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectionOverview {
    pub category: ConnectionCategory,
    pub connection_percentage: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectedUserView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub hobbies: Vec<String>,
    pub category: ConnectionCategory,
    pub connection_percentage: i64,
}

// Records the local edge for a relationship the connect flow established on
// the third-party side. Re-recording the same (user_1, user_2, provider)
// triple only moves the confirmed flag.
pub async fn record_connection(
    pool: &SqlitePool,
    user_1: i64,
    user_2: i64,
    provider: &str,
    confirmed: bool,
) -> sqlx::Result<()> {
    let provider =
        Provider::from_str(provider).map_err(|e| sqlx::Error::Protocol(e.to_string()))?;

    connection_repo::upsert_connection(
        pool,
        connection_repo::NewConnection {
            user_1,
            user_2,
            provider: provider.as_str(),
            confirmed,
        },
    )
    .await
}

pub async fn list_connections(
    pool: &SqlitePool,
    user_1: i64,
    user_2: i64,
) -> sqlx::Result<Vec<ConnectionRow>> {
    connection_repo::list_connections_for_pair(pool, user_1, user_2).await
}

pub async fn connection_overview(
    pool: &SqlitePool,
    viewer_id: i64,
    other_id: i64,
) -> sqlx::Result<ConnectionOverview> {
    let pair = connection_repo::load_pair_counts(pool, viewer_id, other_id).await?;
    let viewer = UserCounts {
        social_count: social_account_repo::social_count(pool, viewer_id).await?,
        sent_count: pair.sent_count,
        received_count: pair.received_count,
        ..Default::default()
    };
    let other = UserCounts {
        social_count: social_account_repo::social_count(pool, other_id).await?,
        ..Default::default()
    };

    Ok(ConnectionOverview {
        category: connection_category(pair.sent_count, pair.received_count),
        connection_percentage: connection_percentage(&viewer, &other),
    })
}

// Every user sharing at least one edge with the viewer, annotated with the
// pair category and percentage. Pairs classified as Nothing never match the
// candidate query, so strangers stay out of the listing.
pub async fn connected_users(
    pool: &SqlitePool,
    viewer_id: i64,
) -> sqlx::Result<Vec<ConnectedUserView>> {
    let viewer_social = social_account_repo::social_count(pool, viewer_id).await?;
    let rows = connection_repo::load_connected_candidates(pool, viewer_id).await?;

    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        let category = connection_category(row.sent_count, row.received_count);
        if category == ConnectionCategory::Nothing {
            continue;
        }

        let viewer = UserCounts {
            social_count: viewer_social,
            sent_count: row.sent_count,
            received_count: row.received_count,
            ..Default::default()
        };
        let other = UserCounts {
            social_count: row.social_count,
            ..Default::default()
        };

        users.push(ConnectedUserView {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            picture: row.picture,
            hobbies: parse_hobbies(row.hobbies.as_deref().unwrap_or("[]")),
            category,
            connection_percentage: connection_percentage(&viewer, &other),
        });
    }

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
