//! Key-value cache backends.
//!
//! - [`RedisCache`]: shared Redis instance, used in deployments.
//! - [`MemoryCache`]: process-local map with the same expiry semantics,
//!   used for single-process runs and tests.

mod memory;
mod redis_cache;

pub use memory::MemoryCache;
pub use redis_cache::RedisCache;
