/// Count inputs for the scoring functions, materialized by the repos.
///
/// For pair scoring `sent_count`/`received_count` are scoped to the pair;
/// for competition scoring they are the user's global edge counts. All
/// counts are non-negative by contract with the storage layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserCounts {
    pub social_count: i64,
    pub sent_count: i64,
    pub received_count: i64,
    pub invite_count: i64,
    pub friendthem_count: i64,
    pub fraternity_count: i64,
    pub sorority_count: i64,
}
