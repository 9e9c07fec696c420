//! Mamdani min-max composition over profile similarities and the weight
//! matrix.
//!
//! Each profile votes a clipped strength for an item — the minimum of the
//! profile's similarity and the item/profile weight — and the item's score is
//! the strongest vote across profiles.

use std::collections::BTreeMap;

use crate::matrix::Matrix;

/// Per-item recommendation scores.
///
/// With zero profiles the maximum over the empty vote set is defined as 0.0,
/// so every item scores 0.0 rather than erroring.
pub fn compose(
    weights: &Matrix,
    similarities: &[f32],
    items: &[String],
) -> BTreeMap<String, f32> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let score = weights
                .row(i)
                .iter()
                .zip(similarities.iter())
                .map(|(weight, strength)| strength.min(*weight))
                .fold(0.0_f32, f32::max);
            (item.clone(), score)
        })
        .collect()
}
