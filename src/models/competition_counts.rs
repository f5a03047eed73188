// Per-user aggregate counts feeding the competition point formulas.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompetitionCountsRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub social_count: i64,
    pub sent_count: i64,
    pub received_count: i64,
    pub invite_count: i64,
    pub friendthem_count: i64,
    pub fraternity_count: i64,
    pub sorority_count: i64,
}
