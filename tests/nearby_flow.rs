mod common;

use friendthem::services::connection_service::ConnectionCategory;
use friendthem::services::nearby_service::{self, DEFAULT_RADIUS_MILES};

use common::{insert_connection, insert_user_spec, link_social_accounts, setup_test_pool, UserSpec};

// Around Times Square; the others are a few miles out, Boston is ~190 mi.
const ORIGIN: (f64, f64) = (40.7580, -73.9855);
const MIDTOWN: (f64, f64) = (40.7527, -73.9772);
const HARLEM: (f64, f64) = (40.8116, -73.9465);
const BOSTON: (f64, f64) = (42.3601, -71.0589);

fn user(id: i64, name: &str, position: Option<(f64, f64)>) -> UserSpec<'_> {
    UserSpec {
        id,
        first_name: name,
        ghost_mode: false,
        featured: false,
        position,
    }
}

#[tokio::test]
async fn nearby_orders_by_distance_and_drops_users_outside_the_radius() {
    let pool = setup_test_pool().await;
    insert_user_spec(&pool, user(1, "viewer", Some(ORIGIN))).await;
    insert_user_spec(&pool, user(2, "harlem", Some(HARLEM))).await;
    insert_user_spec(&pool, user(3, "midtown", Some(MIDTOWN))).await;
    insert_user_spec(&pool, user(4, "boston", Some(BOSTON))).await;

    let users = nearby_service::nearby_users(&pool, 1, DEFAULT_RADIUS_MILES)
        .await
        .unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 2]);
    assert!(users[0].distance_mi.unwrap() < users[1].distance_mi.unwrap());
}

#[tokio::test]
async fn ghost_users_are_hidden_and_featured_users_always_show() {
    let pool = setup_test_pool().await;
    insert_user_spec(&pool, user(1, "viewer", Some(ORIGIN))).await;
    insert_user_spec(
        &pool,
        UserSpec {
            ghost_mode: true,
            ..user(2, "ghost", Some(MIDTOWN))
        },
    )
    .await;
    insert_user_spec(
        &pool,
        UserSpec {
            featured: true,
            ..user(3, "featured-far", Some(BOSTON))
        },
    )
    .await;

    let users = nearby_service::nearby_users(&pool, 1, DEFAULT_RADIUS_MILES)
        .await
        .unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(users[0].featured);
    assert!(users[0].distance_mi.unwrap() > DEFAULT_RADIUS_MILES);
}

#[tokio::test]
async fn viewer_without_a_position_only_sees_featured_users() {
    let pool = setup_test_pool().await;
    insert_user_spec(&pool, user(1, "viewer", None)).await;
    insert_user_spec(&pool, user(2, "midtown", Some(MIDTOWN))).await;
    insert_user_spec(
        &pool,
        UserSpec {
            featured: true,
            ..user(3, "featured", Some(BOSTON))
        },
    )
    .await;

    let users = nearby_service::nearby_users(&pool, 1, DEFAULT_RADIUS_MILES)
        .await
        .unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3]);
    assert!(users[0].distance_mi.is_none());
}

#[tokio::test]
async fn nearby_users_carry_their_connection_score() {
    let pool = setup_test_pool().await;
    insert_user_spec(&pool, user(1, "viewer", Some(ORIGIN))).await;
    insert_user_spec(&pool, user(2, "midtown", Some(MIDTOWN))).await;
    link_social_accounts(&pool, 1, 4).await;
    link_social_accounts(&pool, 2, 4).await;

    insert_connection(&pool, 1, 2, "youtube").await;
    insert_connection(&pool, 1, 2, "twitter").await;

    let users = nearby_service::nearby_users(&pool, 1, DEFAULT_RADIUS_MILES)
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].category, ConnectionCategory::Sent);
    assert_eq!(users[0].connection_percentage, 50);
}

#[tokio::test]
async fn the_viewer_is_never_part_of_the_results() {
    let pool = setup_test_pool().await;
    insert_user_spec(
        &pool,
        UserSpec {
            featured: true,
            ..user(1, "viewer", Some(ORIGIN))
        },
    )
    .await;

    let users = nearby_service::nearby_users(&pool, 1, DEFAULT_RADIUS_MILES)
        .await
        .unwrap();
    assert!(users.is_empty());
}
