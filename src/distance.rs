//! Point dissimilarity.
//!
//! Both clusterers measure points with [`Metric::Euclidean`] unless told otherwise.
//! Callers validate that points share a dimension before measuring them.

use ndarray::ArrayView1;

/// Distance used to compare two points of equal dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Metric {
    /// Norm of the difference vector.
    #[default]
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
}

impl Metric {
    pub fn distance(&self, a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
        match self {
            Metric::Euclidean => euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
        }
    }
}

/// Euclidean norm of `a - b`.
#[inline]
pub fn euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    squared_euclidean(a, b).sqrt()
}

#[inline]
pub(crate) fn squared_euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
}

#[inline]
fn manhattan(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .sum::<f64>()
}
