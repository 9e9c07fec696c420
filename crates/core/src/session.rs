//! Session representation: a binary indicator vector over the item universe.

use std::collections::HashMap;

/// Item identifier to index-position lookup, built once per snapshot and
/// reused by every request served against it.
#[derive(Clone, Debug, Default)]
pub struct ItemIndex {
    positions: HashMap<String, usize>,
    len: usize,
}

impl ItemIndex {
    pub fn new(items: &[String]) -> Self {
        let positions =
            items.iter().enumerate().map(|(position, item)| (item.clone(), position)).collect();
        Self { positions, len: items.len() }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indicator vector aligned to the item universe: 1.0 where a visited
    /// identifier is part of the universe, 0.0 everywhere else. Identifiers
    /// the universe does not know are ignored.
    pub fn session_vector(&self, visited: &[String]) -> Vec<f32> {
        let mut session = vec![0.0; self.len];
        for item in visited {
            if let Some(&position) = self.positions.get(item) {
                session[position] = 1.0;
            }
        }
        session
    }
}
