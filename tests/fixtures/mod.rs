//! Sample point sets shared by the integration tests and the demos.

#![allow(dead_code)]

use clusterkit::Matrix;
use ndarray::Array2;

fn from_pairs(pairs: &[[f64; 2]]) -> Matrix {
    Array2::from(pairs.to_vec())
}

/// Two eyes, a nose, a mouth and a face outline, plus a few stray points.
pub fn smiley_face() -> Matrix {
    from_pairs(&[
        [1.0, 5.0],
        [1.25, 5.35],
        [1.25, 5.75],
        [1.5, 6.25],
        [1.75, 6.75],
        [2.0, 6.5],
        [3.0, 7.75],
        [3.5, 8.25],
        [3.75, 8.75],
        [3.95, 9.1],
        [4.0, 8.5],
        [2.5, 7.25],
        [2.25, 7.75],
        [2.0, 6.5],
        [2.75, 8.25],
        [4.5, 8.9],
        [9.0, 5.0],
        [8.75, 5.85],
        [9.0, 6.25],
        [8.0, 7.0],
        [8.5, 6.25],
        [8.5, 6.75],
        [8.25, 7.65],
        [7.0, 8.25],
        [6.0, 8.75],
        [5.5, 8.25],
        [5.25, 8.75],
        [4.9, 8.75],
        [5.0, 8.5],
        [7.5, 7.75],
        [7.75, 8.25],
        [6.75, 8.0],
        [6.25, 8.25],
        [4.5, 8.9],
        [5.0, 1.0],
        [1.25, 4.65],
        [1.25, 4.25],
        [1.5, 3.75],
        [1.75, 3.25],
        [2.0, 3.5],
        [3.0, 2.25],
        [3.5, 1.75],
        [3.75, 8.75],
        [3.95, 0.9],
        [4.0, 1.5],
        [2.5, 2.75],
        [2.25, 2.25],
        [2.0, 3.5],
        [2.75, 1.75],
        [4.5, 1.1],
        [5.0, 9.0],
        [8.75, 5.15],
        [8.0, 2.25],
        [8.25, 3.0],
        [8.5, 4.75],
        [8.5, 4.25],
        [8.25, 3.35],
        [7.0, 1.75],
        [8.0, 3.5],
        [6.0, 1.25],
        [5.5, 1.75],
        [5.25, 1.25],
        [4.9, 1.25],
        [5.0, 1.5],
        [7.5, 2.25],
        [7.75, 2.75],
        [6.75, 2.0],
        [6.25, 1.75],
        [4.5, 1.1],
        [3.0, 4.5],
        [7.0, 4.5],
        [5.0, 3.0],
        [4.0, 3.35],
        [6.0, 3.35],
        [4.25, 3.25],
        [5.75, 3.25],
        [3.5, 3.75],
        [6.5, 3.75],
        [3.25, 4.0],
        [6.75, 4.0],
        [3.75, 3.55],
        [6.25, 3.55],
        [4.75, 3.05],
        [5.25, 3.05],
        [4.5, 3.15],
        [5.5, 3.15],
        [4.0, 6.5],
        [4.0, 6.75],
        [4.0, 6.25],
        [3.75, 6.5],
        [4.25, 6.5],
        [4.25, 6.75],
        [3.75, 6.25],
        [6.0, 6.5],
        [6.0, 6.75],
        [6.0, 6.25],
        [5.75, 6.75],
        [5.75, 6.25],
        [6.25, 6.75],
        [6.25, 6.25],
        [9.5, 9.5],
        [2.5, 9.5],
        [1.0, 8.0],
    ])
}

/// Eruption duration (minutes) and waiting time (minutes) of the Old Faithful geyser.
pub fn old_faithful() -> Matrix {
    from_pairs(&[
        [3.600, 79.0],
        [1.800, 54.0],
        [2.283, 62.0],
        [3.333, 74.0],
        [2.883, 55.0],
        [4.533, 85.0],
        [1.950, 51.0],
        [1.833, 54.0],
        [4.700, 88.0],
        [3.600, 85.0],
        [1.600, 52.0],
        [4.350, 85.0],
        [3.917, 84.0],
        [4.200, 78.0],
        [1.750, 62.0],
        [1.800, 51.0],
        [4.700, 83.0],
        [2.167, 52.0],
        [4.800, 84.0],
        [1.750, 47.0],
    ])
}
