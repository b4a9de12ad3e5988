mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

use hellohub::infra::http::build_router;

use common::{api_state, get, post_json, send, send_json};

#[sqlx::test(migrations = "./migrations")]
async fn create_user_echoes_username(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    for name in ["alice", "bob the builder", "Zoë"] {
        let (status, body) =
            send_json(&router, post_json("/api/users", json!({ "username": name }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["username"], name);
        assert!(body["id"].as_i64().is_some());
        assert!(body["created_at"].as_str().is_some_and(|ts| ts.ends_with('Z')));
    }

    let (status, body) = send_json(&router, get("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("user list")
        .iter()
        .filter_map(|user| user["username"].as_str())
        .collect();
    assert_eq!(names, ["alice", "bob the builder", "Zoë"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_conflicts(pool: SqlitePool) {
    let router = build_router(api_state(pool));
    let payload = json!({ "username": "carol" });

    let (status, _) = send_json(&router, post_json("/api/users", payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&router, post_json("/api/users", payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "duplicate");
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_username_surfaces_as_server_error(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, body) = send_json(&router, post_json("/api/users", json!({}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "repo_error");
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_message_feed_has_zeroed_analytics(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, body) = send_json(&router, get("/api/messages")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "messages": [],
            "analytics": { "total": 0, "avg_length": 0.0, "by_hour": {} }
        })
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn message_feed_aggregates_content(pool: SqlitePool) {
    let router = build_router(api_state(pool));
    send_json(&router, post_json("/api/users", json!({ "username": "dave" }))).await;

    for content in ["hi", "hello!"] {
        let (status, body) = send_json(
            &router,
            post_json("/api/messages", json!({ "content": content })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["content"], content);
        assert_eq!(body["user_id"], 1);
    }

    let (status, body) = send_json(&router, get("/api/messages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["messages"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["analytics"]["total"], 2);
    assert_eq!(body["analytics"]["avg_length"], 4.0);

    let by_hour = body["analytics"]["by_hour"]
        .as_object()
        .expect("by_hour object");
    let counted: u64 = by_hour.values().filter_map(|v| v.as_u64()).sum();
    assert_eq!(counted, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn message_for_unknown_user_fails(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, body) = send_json(
        &router,
        post_json("/api/messages", json!({ "content": "orphan", "user_id": 42 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "repo_error");
}

#[sqlx::test(migrations = "./migrations")]
async fn hello_is_cached_until_a_message_is_posted(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, first) = send_json(&router, get("/api/hello")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["source"], "api");

    let (_, second) = send_json(&router, get("/api/hello")).await;
    assert_eq!(second["source"], "cache");
    assert_eq!(second["message"], first["message"]);

    send_json(&router, post_json("/api/users", json!({ "username": "erin" }))).await;
    let (status, _) = send_json(
        &router,
        post_json("/api/messages", json!({ "content": "bust it", "user_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, third) = send_json(&router, get("/api/hello")).await;
    assert_eq!(third["source"], "api");
}

#[sqlx::test(migrations = "./migrations")]
async fn sample_demo_reports_age_statistics(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, body) = send_json(&router, get("/api/pandas-demo")).await;

    assert_eq!(status, StatusCode::OK);
    insta::assert_json_snapshot!(body, @r#"
    {
      "sample_data": [
        {
          "age": 25,
          "city": "NYC",
          "name": "Alice"
        },
        {
          "age": 30,
          "city": "LA",
          "name": "Bob"
        },
        {
          "age": 35,
          "city": "Chicago",
          "name": "Charlie"
        },
        {
          "age": 28,
          "city": "Seattle",
          "name": "Diana"
        }
      ],
      "statistics": {
        "max_age": 35,
        "mean_age": 29.5,
        "min_age": 25
      }
    }
    "#);
}

#[sqlx::test(migrations = "./migrations")]
async fn health_reports_connected_dependencies(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, body) = send_json(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["redis"], "connected");
    assert!(body["timestamp"].as_str().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn health_degrades_when_database_is_gone(pool: SqlitePool) {
    let state = common::api_state(pool.clone());
    let router = build_router(state);
    pool.close().await;

    let (status, body) = send_json(&router, get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}

#[sqlx::test(migrations = "./migrations")]
async fn index_serves_html(pool: SqlitePool) {
    let router = build_router(api_state(pool));

    let (status, bytes) = send(&router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(bytes).expect("utf-8 body");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Cached greeting"));
}
