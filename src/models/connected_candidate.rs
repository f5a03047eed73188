// View-model row for the connected-users listing (users + pair edge counts).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConnectedCandidateRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub hobbies: Option<String>,
    pub sent_count: i64,
    pub received_count: i64,
    pub social_count: i64,
}
