use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use friendthem::services::cleanup_service;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to DB");

    let raw_ids = env::var("RESET_USER_IDS").expect("RESET_USER_IDS must be set (e.g. \"4,5\")");
    let user_ids: Vec<i64> = raw_ids
        .split(',')
        .filter_map(|v| v.trim().parse().ok())
        .collect();
    if user_ids.is_empty() {
        eprintln!("RESET_USER_IDS contained no valid user ids: {}", raw_ids);
        std::process::exit(1);
    }

    match cleanup_service::reset_social_connections(&pool, &user_ids).await {
        Ok(report) => {
            println!(
                "social reset: connections={}, social_accounts={}",
                report.connections_deleted, report.social_accounts_deleted
            );
        }
        Err(e) => {
            eprintln!("social reset failed: {}", e);
            std::process::exit(1);
        }
    }
}
