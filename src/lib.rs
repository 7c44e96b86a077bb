//! Density-based and centroid-based clustering over dense `f64` point sets.
//!
//! Points are rows of a [`Matrix`]. Two clusterers are provided:
//! - [`DBSCAN`]: neighborhood expansion, `0` marks noise, clusters are numbered from `1`
//! - [`KMeans`]: random contiguous initial partition refined for a fixed number of iterations
//!
//! ```rust
//! use clusterkit::{DBSCAN, KMeans, NOISE};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [0.2, 0.1], [0.1, 0.2], [9.0, 9.0]];
//!
//! let labels = DBSCAN::new(0.5, 2).fit_predict(&x).unwrap();
//! assert_eq!(labels[0], labels[1]);
//! assert_eq!(labels[3], NOISE);
//!
//! let (clusters, centers) = KMeans::new(2).random_state(7).cluster(&x).unwrap();
//! assert_eq!(clusters.iter().map(|c| c.nrows()).sum::<usize>(), 4);
//! assert_eq!(centers.len(), 2);
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod cluster;
pub mod dataset;
pub mod distance;
pub mod error;
pub mod metrics;
pub mod report;

pub use cluster::{DBSCAN, KMeans, NOISE, NeighborSearch};
pub use distance::Metric;
pub use error::{Error, Result};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Labels = Array1<usize>;
