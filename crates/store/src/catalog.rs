//! Read-only access to the item/profile catalogs and the affinity matrix.
//!
//! The store holds the item and profile universes as sets and one weight per
//! item/profile pair under a composite key. The whole matrix is fetched with
//! a single batched MGET over the cartesian product rather than one round
//! trip per cell.

use fuzzyrec_core::config::StoreConfig;
use fuzzyrec_core::{Matrix, Snapshot};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::debug;

use crate::StoreError;

/// Composite weight key: item and profile joined with a fixed separator.
///
/// Known limitation, kept from the original data layout: an identifier that
/// itself contains `|` can collide with another pair's key. The store schema
/// does not guard against this.
pub fn weight_key(item: &str, profile: &str) -> String {
    format!("{item}|{profile}")
}

/// Keys for the full cartesian product in item-major, profile-minor order,
/// matching the `row * profiles + col` de-flattening on the way back.
fn weight_keys(items: &[String], profiles: &[String]) -> Vec<String> {
    let mut keys = Vec::with_capacity(items.len() * profiles.len());
    for item in items {
        for profile in profiles {
            keys.push(weight_key(item, profile));
        }
    }
    keys
}

/// Fetch the item and profile universes.
pub async fn load_universe(
    conn: &mut ConnectionManager,
    items_key: &str,
    profiles_key: &str,
) -> Result<(Vec<String>, Vec<String>), StoreError> {
    let items: Vec<String> = conn.smembers(items_key).await.map_err(StoreError::QueryFailed)?;
    let profiles: Vec<String> =
        conn.smembers(profiles_key).await.map_err(StoreError::QueryFailed)?;
    Ok((items, profiles))
}

/// De-flatten one MGET reply into the weight matrix.
///
/// A missing key (`None`) or an empty value is weight 0. A present value that
/// does not parse as a number aborts the whole load; no partial matrix is
/// ever returned.
pub fn weights_from_values(
    items: &[String],
    profiles: &[String],
    values: &[Option<String>],
) -> Result<Matrix, StoreError> {
    let mut matrix = Matrix::new(items.len(), profiles.len());

    for (i, item) in items.iter().enumerate() {
        for (j, profile) in profiles.iter().enumerate() {
            let position = i * profiles.len() + j;
            let Some(value) = values.get(position).and_then(Option::as_ref) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let weight = value.parse::<f32>().map_err(|_| StoreError::MalformedWeight {
                key: weight_key(item, profile),
                value: value.clone(),
            })?;
            matrix.set(i, j, weight);
        }
    }

    Ok(matrix)
}

/// Fetch the full item-by-profile weight matrix in one batched round trip.
pub async fn load_weights(
    conn: &mut ConnectionManager,
    items: &[String],
    profiles: &[String],
) -> Result<Matrix, StoreError> {
    if items.is_empty() || profiles.is_empty() {
        return Ok(Matrix::new(items.len(), profiles.len()));
    }

    let keys = weight_keys(items, profiles);
    let values: Vec<Option<String>> =
        conn.mget(&keys).await.map_err(StoreError::QueryFailed)?;

    weights_from_values(items, profiles, &values)
}

/// Load a complete snapshot: both universes plus the weight matrix.
///
/// This is the only I/O in the system and runs at bootstrap, never inside the
/// per-request path.
pub async fn load_snapshot(
    conn: &mut ConnectionManager,
    store: &StoreConfig,
) -> Result<Snapshot, StoreError> {
    let (items, profiles) = load_universe(conn, &store.items_key, &store.profiles_key).await?;
    debug!(
        event_name = "store.universe.loaded",
        items = items.len(),
        profiles = profiles.len(),
        "catalog universes fetched"
    );

    let weights = load_weights(conn, &items, &profiles).await?;
    Ok(Snapshot::new(items, profiles, weights)?)
}

#[cfg(test)]
mod tests {
    use super::{weight_key, weight_keys, weights_from_values};
    use crate::StoreError;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn weight_key_joins_with_pipe() {
        assert_eq!(weight_key("example.org/a", "p1"), "example.org/a|p1");
    }

    #[test]
    fn keys_enumerate_item_major_profile_minor() {
        let keys = weight_keys(&names(&["a", "b"]), &names(&["p1", "p2"]));
        assert_eq!(keys, vec!["a|p1", "a|p2", "b|p1", "b|p2"]);
    }

    #[test]
    fn values_deflatten_in_key_order() {
        let items = names(&["a", "b"]);
        let profiles = names(&["p1", "p2"]);
        let values = vec![
            Some("0.1".to_string()),
            Some("0.2".to_string()),
            Some("0.3".to_string()),
            Some("0.4".to_string()),
        ];

        let matrix = weights_from_values(&items, &profiles, &values).expect("parse");
        assert_eq!(matrix.get(0, 0), 0.1);
        assert_eq!(matrix.get(0, 1), 0.2);
        assert_eq!(matrix.get(1, 0), 0.3);
        assert_eq!(matrix.get(1, 1), 0.4);
    }

    #[test]
    fn missing_and_empty_values_default_to_zero() {
        let items = names(&["a", "b"]);
        let profiles = names(&["p1"]);
        let values = vec![None, Some(String::new())];

        let matrix = weights_from_values(&items, &profiles, &values).expect("parse");
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(1, 0), 0.0);
    }

    #[test]
    fn unparsable_value_aborts_the_whole_load() {
        let items = names(&["a", "b"]);
        let profiles = names(&["p1"]);
        let values = vec![Some("0.5".to_string()), Some("not-a-number".to_string())];

        let error = weights_from_values(&items, &profiles, &values).expect_err("must fail");
        assert!(matches!(
            error,
            StoreError::MalformedWeight { ref key, ref value }
                if key == "b|p1" && value == "not-a-number"
        ));
    }

    #[test]
    fn short_reply_leaves_missing_tail_at_zero() {
        let items = names(&["a", "b"]);
        let profiles = names(&["p1"]);
        let values = vec![Some("0.9".to_string())];

        let matrix = weights_from_values(&items, &profiles, &values).expect("parse");
        assert_eq!(matrix.get(0, 0), 0.9);
        assert_eq!(matrix.get(1, 0), 0.0);
    }
}
