//! The cached hello greeting.

use std::{sync::Arc, time::Duration};

use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use crate::application::cache::{CacheError, KvCache};

pub const HELLO_CACHE_KEY: &str = "hello_message";
pub const HELLO_MESSAGE: &str = "Hello, World! Welcome to the hellohub demo service";
pub const DEFAULT_HELLO_TTL: Duration = Duration::from_secs(60);

const SOURCE: &str = "application::greeting";

#[derive(Debug, Error)]
pub enum GreetingError {
    #[error(transparent)]
    Cache(#[from] CacheError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GreetingSource {
    Cache,
    Api,
}

#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub message: String,
    pub source: GreetingSource,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Clone)]
pub struct GreetingService {
    cache: Arc<dyn KvCache>,
    ttl: Duration,
}

impl GreetingService {
    pub fn new(cache: Arc<dyn KvCache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Returns the cached greeting when present, otherwise stores a fresh one.
    pub async fn hello(&self) -> Result<Greeting, GreetingError> {
        if let Some(message) = self.cache.get(HELLO_CACHE_KEY).await? {
            counter!("hellohub_hello_cache_hit_total").increment(1);
            return Ok(Greeting {
                message,
                source: GreetingSource::Cache,
                timestamp: OffsetDateTime::now_utc(),
            });
        }

        counter!("hellohub_hello_cache_miss_total").increment(1);
        self.cache
            .set(HELLO_CACHE_KEY, HELLO_MESSAGE, self.ttl)
            .await?;
        debug!(
            target = SOURCE,
            ttl_secs = self.ttl.as_secs(),
            "stored fresh greeting"
        );

        Ok(Greeting {
            message: HELLO_MESSAGE.to_string(),
            source: GreetingSource::Api,
            timestamp: OffsetDateTime::now_utc(),
        })
    }

    pub async fn invalidate(&self) -> Result<(), GreetingError> {
        self.cache.delete(HELLO_CACHE_KEY).await?;
        Ok(())
    }

    pub async fn cache_reachable(&self) -> bool {
        self.cache.ping().await.is_ok()
    }
}
