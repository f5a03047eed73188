#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ConnectionRow {
    pub user_1: i64,
    pub user_2: i64,
    pub provider: String,
    pub confirmed: Option<i64>,
}

// Distinct-by-provider edge counts between a viewer and one other user.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct PairCountsRow {
    pub sent_count: i64,
    pub received_count: i64,
}
