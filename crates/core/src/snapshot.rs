//! Immutable snapshot of the affinity universe plus the request-time facade.

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use crate::inference::compose;
use crate::matrix::Matrix;
use crate::session::ItemIndex;
use crate::similarity::profile_similarities;

/// Point-in-time copy of the item universe, profile universe and the
/// item-by-profile weight matrix.
///
/// A snapshot is read-only for its whole lifetime. Refreshing means loading a
/// new snapshot and swapping the shared `Arc` wholesale, never mutating in
/// place, so concurrent readers cannot observe a half-updated matrix.
#[derive(Clone, Debug)]
pub struct Snapshot {
    items: Vec<String>,
    profiles: Vec<String>,
    weights: Matrix,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("weight matrix is {rows}x{cols} but universe is {items} items by {profiles} profiles")]
    DimensionMismatch { rows: usize, cols: usize, items: usize, profiles: usize },
}

impl Snapshot {
    pub fn new(
        items: Vec<String>,
        profiles: Vec<String>,
        weights: Matrix,
    ) -> Result<Self, SnapshotError> {
        if weights.rows() != items.len() || weights.cols() != profiles.len() {
            return Err(SnapshotError::DimensionMismatch {
                rows: weights.rows(),
                cols: weights.cols(),
                items: items.len(),
                profiles: profiles.len(),
            });
        }
        Ok(Self { items, profiles, weights })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }
}

/// Request-time facade over a loaded snapshot.
///
/// Holds the item lookup built once from the snapshot; `recommend` is pure
/// CPU work over shared immutable data and is safe to call from any number of
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct Recommender {
    snapshot: Arc<Snapshot>,
    index: ItemIndex,
}

impl Recommender {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        let index = ItemIndex::new(snapshot.items());
        Self { snapshot, index }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Score every item in the universe against the visited list.
    ///
    /// Total over its input domain: once a snapshot exists this cannot fail,
    /// it only ever returns a map with one entry per universe item.
    pub fn recommend(&self, visited: &[String]) -> BTreeMap<String, f32> {
        let session = self.index.session_vector(visited);
        let similarities = profile_similarities(self.snapshot.weights(), &session);
        compose(self.snapshot.weights(), &similarities, self.snapshot.items())
    }
}
