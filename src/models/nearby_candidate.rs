// View-model row for nearby-user discovery (users + pair edge counts and
// a computed distance).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NearbyCandidateRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub hobbies: Option<String>,
    pub featured: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub sent_count: i64,
    pub received_count: i64,
    pub social_count: i64,
    #[sqlx(skip)]
    pub distance_mi: Option<f64>,
}
