pub mod catalog;
pub mod connection;

use std::time::Duration;

use thiserror::Error;

pub use catalog::{load_snapshot, load_universe, load_weights, weight_key, weights_from_values};
pub use connection::connect;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[source] redis::RedisError),
    #[error("store unavailable: connect timed out after {0:?}")]
    ConnectTimeout(Duration),
    #[error("store query failed: {0}")]
    QueryFailed(#[source] redis::RedisError),
    #[error("malformed weight at `{key}`: `{value}` is not a number")]
    MalformedWeight { key: String, value: String },
    #[error(transparent)]
    Shape(#[from] fuzzyrec_core::SnapshotError),
}
