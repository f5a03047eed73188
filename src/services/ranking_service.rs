use std::cmp::Reverse;

use thiserror::Error;

use crate::services::competition_service::LeaderboardEntry;

/// Every point field `rank` accepts, across both competition variants.
pub const SORT_FIELDS: &[&str] = &[
    "friendthem_points",
    "fraternity_points",
    "sorority_points",
    "received_connections_points",
    "sent_connections_points",
    "invitations_points",
    "social_sync_points",
    "total_points",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankError {
    #[error("unknown sort field \"{field}\", expected one of {allowed:?}")]
    UnknownField {
        field: String,
        allowed: &'static [&'static str],
    },
    #[error("field \"{field}\" is not part of the computed points for user {user_id}")]
    MissingField { field: String, user_id: i64 },
}

/// Orders entries by a point field, `-` prefixed for descending. The sort
/// happens on the materialized list (the scores only exist in memory), is
/// stable, and rejects before touching the order when the field is unknown
/// or absent from an entry's breakdown.
pub fn rank(
    entries: Vec<LeaderboardEntry>,
    order_by: &str,
) -> Result<Vec<LeaderboardEntry>, RankError> {
    match order_by.strip_prefix('-') {
        Some(field) => rank_by(entries, field, true),
        None => rank_by(entries, order_by, false),
    }
}

pub fn rank_by(
    entries: Vec<LeaderboardEntry>,
    field: &str,
    descending: bool,
) -> Result<Vec<LeaderboardEntry>, RankError> {
    if !SORT_FIELDS.contains(&field) {
        return Err(RankError::UnknownField {
            field: field.to_string(),
            allowed: SORT_FIELDS,
        });
    }

    // Resolve every key up front so a mismatched entry rejects the whole
    // call instead of leaving a partial order behind.
    let mut keyed = Vec::with_capacity(entries.len());
    for entry in entries {
        let key = entry.points.field(field).ok_or_else(|| RankError::MissingField {
            field: field.to_string(),
            user_id: entry.user_id,
        })?;
        keyed.push((key, entry));
    }

    if descending {
        keyed.sort_by_key(|(key, _)| Reverse(*key));
    } else {
        keyed.sort_by_key(|(key, _)| *key);
    }

    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserCounts;
    use crate::services::competition_service::{compute_points, CompetitionVariant};

    fn entry(user_id: i64, received_count: i64) -> LeaderboardEntry {
        let counts = UserCounts {
            received_count,
            ..Default::default()
        };
        LeaderboardEntry {
            user_id,
            full_name: format!("user {}", user_id),
            points: compute_points(&counts, CompetitionVariant::General),
        }
    }

    fn ids(entries: &[LeaderboardEntry]) -> Vec<i64> {
        entries.iter().map(|e| e.user_id).collect()
    }

    #[test]
    fn descending_rank_keeps_input_order_for_ties() {
        // totals 10, 50, 10
        let entries = vec![entry(1, 1), entry(2, 5), entry(3, 1)];
        let ranked = rank(entries, "-total_points").unwrap();
        assert_eq!(ids(&ranked), vec![2, 1, 3]);
    }

    #[test]
    fn ascending_rank_keeps_input_order_for_ties() {
        let entries = vec![entry(1, 5), entry(2, 1), entry(3, 5), entry(4, 1)];
        let ranked = rank(entries, "total_points").unwrap();
        assert_eq!(ids(&ranked), vec![2, 4, 1, 3]);
    }

    #[test]
    fn explicit_flag_form_matches_prefix_form() {
        let a = rank(vec![entry(1, 2), entry(2, 3)], "-received_connections_points").unwrap();
        let b = rank_by(vec![entry(1, 2), entry(2, 3)], "received_connections_points", true)
            .unwrap();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn unknown_field_is_rejected_with_the_allowed_list() {
        let err = rank(vec![entry(1, 1)], "karma").unwrap_err();
        match err {
            RankError::UnknownField { field, allowed } => {
                assert_eq!(field, "karma");
                assert!(allowed.contains(&"total_points"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn field_of_the_other_variant_is_rejected_per_entry() {
        let err = rank(vec![entry(7, 1)], "-sorority_points").unwrap_err();
        assert_eq!(
            err,
            RankError::MissingField {
                field: "sorority_points".to_string(),
                user_id: 7,
            }
        );
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(rank(Vec::new(), "-total_points").unwrap().is_empty());
    }
}
