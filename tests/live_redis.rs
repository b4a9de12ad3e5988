//! Live tests against a running Redis server.
//!
//! - Marked `#[ignore]`; run with `cargo test --test live_redis -- --ignored`.
//! - Connects to `REDIS_URL`, defaulting to `redis://127.0.0.1:6379/0`.
//! - Keys carry a random suffix, except the greeting key, which is cleared first.

mod common;

use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;
use uuid::Uuid;

use hellohub::application::cache::{CacheError, KvCache};
use hellohub::application::greeting::HELLO_CACHE_KEY;
use hellohub::infra::{
    cache::RedisCache,
    db::SqliteRepositories,
    http::{ApiState, build_router},
};

use common::{get, post_json, send_json};

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/0".to_string())
}

fn unique_key(prefix: &str) -> String {
    format!("hellohub_test:{prefix}:{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore]
async fn live_redis_set_get_delete() -> TestResult<()> {
    let cache = RedisCache::connect(&redis_url()).await?;
    cache.ping().await?;

    let key = unique_key("roundtrip");
    assert_eq!(cache.get(&key).await?, None);

    cache.set(&key, "hi", Duration::from_secs(60)).await?;
    assert_eq!(cache.get(&key).await?.as_deref(), Some("hi"));

    cache.delete(&key).await?;
    assert_eq!(cache.get(&key).await?, None);
    cache.delete(&key).await?;

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_redis_entries_expire() -> TestResult<()> {
    let cache = RedisCache::connect(&redis_url()).await?;
    let key = unique_key("expiry");

    cache.set(&key, "short-lived", Duration::from_secs(1)).await?;
    assert!(cache.get(&key).await?.is_some());

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    assert_eq!(cache.get(&key).await?, None);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_redis_rejects_zero_ttl() -> TestResult<()> {
    let cache = RedisCache::connect(&redis_url()).await?;
    let key = unique_key("zero");

    let err = cache
        .set(&key, "never", Duration::ZERO)
        .await
        .expect_err("zero ttl");
    assert!(matches!(err, CacheError::InvalidArgument(_)));
    assert_eq!(cache.get(&key).await?, None);

    Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn live_redis_greeting_invalidated_by_message(pool: SqlitePool) {
    let cache = RedisCache::connect(&redis_url())
        .await
        .expect("redis reachable");
    cache.delete(HELLO_CACHE_KEY).await.expect("clear greeting");

    let state = ApiState::new(
        Arc::new(SqliteRepositories::new(pool)),
        Arc::new(cache),
        Duration::from_secs(60),
    );
    let router = build_router(state);

    let (_, first) = send_json(&router, get("/api/hello")).await;
    assert_eq!(first["source"], "api");

    let (_, second) = send_json(&router, get("/api/hello")).await;
    assert_eq!(second["source"], "cache");

    send_json(&router, post_json("/api/users", json!({ "username": "redis" }))).await;
    let (status, _) = send_json(
        &router,
        post_json("/api/messages", json!({ "content": "invalidate" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, third) = send_json(&router, get("/api/hello")).await;
    assert_eq!(third["source"], "api");

    let (_, health) = send_json(&router, get("/api/health")).await;
    assert_eq!(health["redis"], "connected");
}
