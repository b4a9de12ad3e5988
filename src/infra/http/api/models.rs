use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::sample::{AgeStatistics, SamplePerson};

/// Fields are optional so an absent value is reported by the store, not the extractor.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserCreateRequest {
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MessageCreateRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SampleDemoResponse {
    pub sample_data: Vec<SamplePerson>,
    pub statistics: AgeStatistics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub database: ConnectionStatus,
    pub redis: ConnectionStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
