use std::time::Duration;

use async_trait::async_trait;
use redis::{Client, aio::ConnectionManager};
use tracing::info;

use crate::application::cache::{CacheError, KvCache};
use crate::infra::error::InfraError;

/// Redis-backed cache sharing one multiplexed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn connect(url: &str) -> Result<Self, InfraError> {
        let client = Client::open(url)
            .map_err(|err| InfraError::cache(format!("invalid redis url: {err}")))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|err| InfraError::cache(format!("failed to connect to redis: {err}")))?;

        info!(target = "hellohub::cache", "connected to redis");
        Ok(Self { connection })
    }
}

/// Whole seconds for `SET ... EX`; Redis rejects `EX 0`.
fn expire_seconds(key: &str, ttl: Duration) -> Result<u64, CacheError> {
    match ttl.as_secs() {
        0 => Err(CacheError::InvalidArgument(format!(
            "ttl for `{key}` must be at least one second"
        ))),
        seconds => Ok(seconds),
    }
}

#[async_trait]
impl KvCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("GET")
            .arg(key)
            .query_async::<_, Option<String>>(&mut conn)
            .await
            .map_err(CacheError::unavailable)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let seconds = expire_seconds(key, ttl)?;
        let mut conn = self.connection.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(seconds)
            .query_async::<_, ()>(&mut conn)
            .await
            .map_err(CacheError::unavailable)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("DEL")
            .arg(key)
            .query_async::<_, i64>(&mut conn)
            .await
            .map(|_| ())
            .map_err(CacheError::unavailable)
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(CacheError::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_second_ttls_are_rejected() {
        for ttl in [Duration::ZERO, Duration::from_millis(500)] {
            let err = expire_seconds("hello_message", ttl).expect_err("sub-second ttl");
            assert!(matches!(err, CacheError::InvalidArgument(_)));
        }
    }

    #[test]
    fn ttl_is_truncated_to_whole_seconds() {
        assert_eq!(
            expire_seconds("hello_message", Duration::from_millis(1_500)).expect("ttl"),
            1
        );
        assert_eq!(
            expire_seconds("hello_message", Duration::from_secs(60)).expect("ttl"),
            60
        );
    }
}
