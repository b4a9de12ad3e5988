use axum::Json;
use axum::extract::State;
use time::OffsetDateTime;
use tracing::warn;

use crate::infra::http::api::models::{ConnectionStatus, HealthResponse, HealthStatus};
use crate::infra::http::api::state::ApiState;

/// Always answers 200; degraded dependencies are reported in the body.
pub async fn health(State(state): State<ApiState>) -> Json<HealthResponse> {
    let database_ok = match state.db.health_check().await {
        Ok(()) => true,
        Err(err) => {
            warn!(target = "hellohub::health", error = %err, "database health check failed");
            false
        }
    };
    let cache_ok = state.greeting.cache_reachable().await;

    Json(HealthResponse {
        status: if database_ok {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        },
        database: ConnectionStatus::from_reachable(database_ok),
        redis: ConnectionStatus::from_reachable(cache_ok),
        timestamp: OffsetDateTime::now_utc(),
    })
}
