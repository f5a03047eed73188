use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use friendthem::services::competition_service::{self, CompetitionVariant};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("cannot connect to DB");

    let variant: CompetitionVariant = env::var("COMPETITION_VARIANT")
        .unwrap_or_else(|_| "general".to_string())
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("{}", e);
            std::process::exit(1);
        });
    let order_by = env::var("ORDER_BY").unwrap_or_else(|_| "-total_points".to_string());
    let limit: usize = env::var("LIMIT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(50);

    match competition_service::leaderboard(&pool, variant, &order_by).await {
        Ok(entries) => {
            println!(
                "{} leaderboard, ordered by {} ({} users):",
                variant.as_str(),
                order_by,
                entries.len()
            );
            for (position, entry) in entries.iter().take(limit).enumerate() {
                println!(
                    "{:>4}. {:<32} {:>6} pts (user {})",
                    position + 1,
                    entry.full_name,
                    entry.points.total_points(),
                    entry.user_id
                );
            }
        }
        Err(e) => {
            eprintln!("leaderboard failed: {}", e);
            std::process::exit(1);
        }
    }
}
