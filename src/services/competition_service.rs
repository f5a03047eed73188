use std::str::FromStr;

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::database::competition_repo;
use crate::models::{CompetitionCountsRow, UserCounts};
use crate::services::ranking_service::{self, RankError};

// Scoring targets and weights for the two leaderboards. The target ids are
// the fixed in-house accounts the college competition awards points for.
pub const FRIENDTHEM_USER_ID: i64 = 830;
pub const FRATERNITY_USER_IDS: [i64; 2] = [829, 44];
pub const SORORITY_USER_IDS: [i64; 2] = [1567, 652];

pub const SOCIAL_SYNC_THRESHOLD: i64 = 3;
pub const CONNECT_SOCIAL_SYNC_POINTS: i64 = 2;
pub const GENERAL_SOCIAL_SYNC_POINTS: i64 = 33;

pub const SENT_CONNECTION_POINTS: i64 = 2;
pub const RECEIVED_CONNECTION_POINTS: i64 = 10;
pub const INVITATION_POINTS: i64 = 100;

/// The two leaderboard scoring schemes. They evolved separately for
/// different audiences and are kept separate on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionVariant {
    Connect,
    General,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown competition variant \"{0}\", expected \"connect\" or \"general\"")]
pub struct UnknownVariant(pub String);

impl CompetitionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionVariant::Connect => "connect",
            CompetitionVariant::General => "general",
        }
    }
}

impl FromStr for CompetitionVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "connect" => Ok(CompetitionVariant::Connect),
            "general" => Ok(CompetitionVariant::General),
            _ => Err(UnknownVariant(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConnectPoints {
    pub friendthem_points: i64,
    pub fraternity_points: i64,
    pub sorority_points: i64,
    pub social_sync_points: i64,
    pub total_points: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeneralPoints {
    pub received_connections_points: i64,
    pub sent_connections_points: i64,
    pub invitations_points: i64,
    pub social_sync_points: i64,
    pub total_points: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum PointBreakdown {
    Connect(ConnectPoints),
    General(GeneralPoints),
}

impl PointBreakdown {
    pub fn total_points(&self) -> i64 {
        match self {
            PointBreakdown::Connect(p) => p.total_points,
            PointBreakdown::General(p) => p.total_points,
        }
    }

    /// Named field lookup used by the ranker. Returns None for fields the
    /// other variant owns.
    pub fn field(&self, name: &str) -> Option<i64> {
        match self {
            PointBreakdown::Connect(p) => match name {
                "friendthem_points" => Some(p.friendthem_points),
                "fraternity_points" => Some(p.fraternity_points),
                "sorority_points" => Some(p.sorority_points),
                "social_sync_points" => Some(p.social_sync_points),
                "total_points" => Some(p.total_points),
                _ => None,
            },
            PointBreakdown::General(p) => match name {
                "received_connections_points" => Some(p.received_connections_points),
                "sent_connections_points" => Some(p.sent_connections_points),
                "invitations_points" => Some(p.invitations_points),
                "social_sync_points" => Some(p.social_sync_points),
                "total_points" => Some(p.total_points),
                _ => None,
            },
        }
    }
}

pub fn compute_connect_points(counts: &UserCounts) -> ConnectPoints {
    let friendthem_points = counts.friendthem_count;
    let fraternity_points = counts.fraternity_count;
    let sorority_points = counts.sorority_count;
    let social_sync_points = social_sync_points(counts.social_count, CONNECT_SOCIAL_SYNC_POINTS);

    ConnectPoints {
        friendthem_points,
        fraternity_points,
        sorority_points,
        social_sync_points,
        total_points: friendthem_points + fraternity_points + sorority_points + social_sync_points,
    }
}

pub fn compute_general_points(counts: &UserCounts) -> GeneralPoints {
    let received_connections_points = counts.received_count * RECEIVED_CONNECTION_POINTS;
    let sent_connections_points = counts.sent_count * SENT_CONNECTION_POINTS;
    let invitations_points = counts.invite_count * INVITATION_POINTS;
    let social_sync_points = social_sync_points(counts.social_count, GENERAL_SOCIAL_SYNC_POINTS);

    GeneralPoints {
        received_connections_points,
        sent_connections_points,
        invitations_points,
        social_sync_points,
        total_points: received_connections_points
            + sent_connections_points
            + invitations_points
            + social_sync_points,
    }
}

pub fn compute_points(counts: &UserCounts, variant: CompetitionVariant) -> PointBreakdown {
    match variant {
        CompetitionVariant::Connect => PointBreakdown::Connect(compute_connect_points(counts)),
        CompetitionVariant::General => PointBreakdown::General(compute_general_points(counts)),
    }
}

fn social_sync_points(social_count: i64, bonus: i64) -> i64 {
    if social_count >= SOCIAL_SYNC_THRESHOLD {
        bonus
    } else {
        0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub full_name: String,
    pub points: PointBreakdown,
}

#[derive(Debug, Error)]
pub enum CompetitionError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Ranks every user under the given scheme. `order_by` is a point field
/// name, `-` prefixed for descending (`"-total_points"` is the leaderboard
/// default); ties keep registration order.
pub async fn leaderboard(
    pool: &SqlitePool,
    variant: CompetitionVariant,
    order_by: &str,
) -> Result<Vec<LeaderboardEntry>, CompetitionError> {
    let rows = competition_repo::load_competition_counts(
        pool,
        FRIENDTHEM_USER_ID,
        &FRATERNITY_USER_IDS,
        &SORORITY_USER_IDS,
    )
    .await?;

    let entries = rows
        .into_iter()
        .map(|row| entry_from_counts(row, variant))
        .collect();

    Ok(ranking_service::rank(entries, order_by)?)
}

fn entry_from_counts(row: CompetitionCountsRow, variant: CompetitionVariant) -> LeaderboardEntry {
    let counts = UserCounts {
        social_count: row.social_count,
        sent_count: row.sent_count,
        received_count: row.received_count,
        invite_count: row.invite_count,
        friendthem_count: row.friendthem_count,
        fraternity_count: row.fraternity_count,
        sorority_count: row.sorority_count,
    };

    LeaderboardEntry {
        user_id: row.id,
        full_name: full_name(&row.first_name, &row.last_name),
        points: compute_points(&counts, variant),
    }
}

fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_points_sum_the_four_components() {
        let counts = UserCounts {
            social_count: 4,
            friendthem_count: 1,
            fraternity_count: 2,
            sorority_count: 1,
            ..Default::default()
        };
        let points = compute_connect_points(&counts);
        assert_eq!(points.friendthem_points, 1);
        assert_eq!(points.fraternity_points, 2);
        assert_eq!(points.sorority_points, 1);
        assert_eq!(points.social_sync_points, CONNECT_SOCIAL_SYNC_POINTS);
        assert_eq!(
            points.total_points,
            points.friendthem_points
                + points.fraternity_points
                + points.sorority_points
                + points.social_sync_points
        );
    }

    #[test]
    fn general_points_apply_the_named_multipliers() {
        let counts = UserCounts {
            social_count: 3,
            sent_count: 0,
            received_count: 1,
            invite_count: 1,
            ..Default::default()
        };
        let points = compute_general_points(&counts);
        assert_eq!(points.received_connections_points, 10);
        assert_eq!(points.sent_connections_points, 0);
        assert_eq!(points.invitations_points, 100);
        assert_eq!(points.social_sync_points, 33);
        assert_eq!(points.total_points, 143);
    }

    #[test]
    fn social_sync_bonus_needs_three_linked_accounts() {
        let below = UserCounts {
            social_count: 2,
            ..Default::default()
        };
        let at = UserCounts {
            social_count: 3,
            ..Default::default()
        };
        assert_eq!(compute_connect_points(&below).social_sync_points, 0);
        assert_eq!(compute_general_points(&below).social_sync_points, 0);
        assert_eq!(
            compute_connect_points(&at).social_sync_points,
            CONNECT_SOCIAL_SYNC_POINTS
        );
        assert_eq!(
            compute_general_points(&at).social_sync_points,
            GENERAL_SOCIAL_SYNC_POINTS
        );
    }

    #[test]
    fn breakdown_field_lookup_is_variant_scoped() {
        let connect = compute_points(&UserCounts::default(), CompetitionVariant::Connect);
        assert_eq!(connect.field("friendthem_points"), Some(0));
        assert_eq!(connect.field("invitations_points"), None);

        let general = compute_points(&UserCounts::default(), CompetitionVariant::General);
        assert_eq!(general.field("invitations_points"), Some(0));
        assert_eq!(general.field("sorority_points"), None);
    }

    #[test]
    fn variant_names_round_trip() {
        assert_eq!(
            "connect".parse::<CompetitionVariant>().unwrap(),
            CompetitionVariant::Connect
        );
        assert_eq!(
            "General".parse::<CompetitionVariant>().unwrap(),
            CompetitionVariant::General
        );
        assert!("college".parse::<CompetitionVariant>().is_err());
    }

    #[test]
    fn full_name_trims_missing_parts() {
        assert_eq!(full_name("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(full_name("Ada", ""), "Ada");
        assert_eq!(full_name("", ""), "");
    }
}
