#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsersRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub picture: Option<String>,
    pub hobbies: Option<String>,
    pub ghost_mode: Option<i64>,
    pub featured: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
