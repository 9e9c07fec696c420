//! Session-to-profile similarity: mean co-activation of two aligned vectors.

use crate::matrix::Matrix;

/// Inner product of the two vectors divided by their length.
///
/// Returns 0.0 when the vectors differ in length or are zero-length. The
/// snapshot invariants rule both cases out, but the contract stays explicit
/// so the boundary is testable.
pub fn similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    dot / a.len() as f32
}

/// One similarity per profile, in profile order.
///
/// Transposes the items-by-profiles matrix so each profile column becomes a
/// contiguous row, then scores it against the session vector.
pub fn profile_similarities(weights: &Matrix, session: &[f32]) -> Vec<f32> {
    let by_profile = weights.transposed();
    (0..by_profile.rows()).map(|profile| similarity(session, by_profile.row(profile))).collect()
}
