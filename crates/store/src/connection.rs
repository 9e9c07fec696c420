use std::time::Duration;

use redis::aio::ConnectionManager;
use redis::Client;
use tokio::time::timeout;

use crate::StoreError;

/// Open a managed async connection to the affinity store.
///
/// Connection failures map to `StoreError::Unavailable`; a dial that does not
/// complete inside `connect_timeout` maps to `StoreError::ConnectTimeout`.
/// Either one is fatal at bootstrap, there is no snapshot to serve without it.
pub async fn connect(
    url: &str,
    connect_timeout: Duration,
) -> Result<ConnectionManager, StoreError> {
    let client = Client::open(url).map_err(StoreError::Unavailable)?;

    match timeout(connect_timeout, ConnectionManager::new(client)).await {
        Ok(Ok(manager)) => Ok(manager),
        Ok(Err(error)) => Err(StoreError::Unavailable(error)),
        Err(_) => Err(StoreError::ConnectTimeout(connect_timeout)),
    }
}
