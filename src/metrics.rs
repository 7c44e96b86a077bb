use crate::distance::squared_euclidean;
use crate::{Labels, Matrix, Vector};
use std::collections::BTreeMap;

/// Within-cluster sum of squared Euclidean distances to each point's own centroid.
///
/// Points whose cluster has no centroid contribute nothing.
pub fn inertia(x: &Matrix, labels: &Labels, centroids: &[Option<Vector>]) -> f64 {
    x.rows()
        .into_iter()
        .zip(labels.iter())
        .filter_map(|(point, &label)| {
            centroids
                .get(label)
                .and_then(Option::as_ref)
                .map(|centroid| squared_euclidean(&point, &centroid.view()))
        })
        .sum()
}

/// Occurrences of each distinct label, ascending by label.
pub fn label_counts(labels: &Labels) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &label in labels.iter() {
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}
