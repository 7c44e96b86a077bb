//! Clustering algorithms for unsupervised learning.
//!
//! This module provides:
//! - `DBSCAN`: density-based clustering with noise, brute-force or grid neighbor search
//! - `KMeans`: centroid-based partitioning with a fixed iteration count
//!
//! # Examples
//!
//! ## DBSCAN Clustering
//! ```rust
//! use clusterkit::{DBSCAN, NOISE, NeighborSearch};
//! use ndarray::array;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.2, 1.1],
//!     [1.1, 1.2],
//!     [8.0, 8.0],
//!     [8.1, 8.1],
//!     [8.2, 7.9],
//!     [15.0, 1.0] // Outlier
//! ];
//!
//! let mut dbscan = DBSCAN::new(1.0, 2).algorithm(NeighborSearch::Grid);
//! let labels = dbscan.fit_predict(&x).unwrap();
//!
//! assert_eq!(dbscan.get_n_clusters(), Some(2));
//! assert_eq!(labels[6], NOISE);
//! ```
//!
//! ## K-Means Clustering
//! ```rust
//! use clusterkit::KMeans;
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let x = array![
//!     [1.0, 1.0],
//!     [1.5, 2.0],
//!     [3.0, 4.0],
//!     [5.0, 7.0],
//!     [3.5, 5.0],
//!     [4.5, 5.0]
//! ];
//!
//! let mut kmeans = KMeans::new(2).iters(100);
//! kmeans.fit_with_rng(&x, &mut StdRng::seed_from_u64(42)).unwrap();
//!
//! let centers = kmeans.cluster_centers.as_ref().unwrap();
//! println!("Cluster centers: {:?}", centers);
//! println!("Inertia: {:.4}", kmeans.inertia.unwrap());
//! ```

mod dbscan;
mod kmeans;
mod neighbors;

pub use dbscan::{DBSCAN, NOISE};
pub use kmeans::KMeans;
pub use neighbors::NeighborSearch;
