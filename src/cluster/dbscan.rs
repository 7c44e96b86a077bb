use super::neighbors::NeighborSearch;
use crate::dataset::validate_points;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::{Labels, Matrix};
use std::collections::{HashSet, VecDeque};

/// Label of a point that no core point reached.
pub const NOISE: usize = 0;

/// Density clusterer.
///
/// Clusters are numbered from `1` in order of discovery; points never reached from a core
/// point keep [`NOISE`]. A core point writes its label onto every point of its
/// neighborhood, replacing labels set by earlier core points, so a border point shared by
/// two touching clusters ends up with the label of the last core point that reached it.
#[derive(Clone, Debug)]
pub struct DBSCAN {
    pub labels: Option<Labels>,
    pub core_sample_indices: Option<Vec<usize>>,
    eps: f64,
    min_samples: usize,
    metric: Metric,
    algorithm: NeighborSearch,
}

impl DBSCAN {
    /// `eps` is the inclusive neighborhood radius; `min_samples` counts the point itself.
    /// Both are validated by `fit`.
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self {
            labels: None,
            core_sample_indices: None,
            eps,
            min_samples,
            metric: Metric::Euclidean,
            algorithm: NeighborSearch::BruteForce,
        }
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn algorithm(mut self, algorithm: NeighborSearch) -> Self {
        self.algorithm = algorithm;
        self
    }

    fn validate(&self, x: &Matrix) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "eps",
                message: "must be finite and > 0",
            });
        }
        if self.min_samples == 0 {
            return Err(Error::InvalidParameter {
                name: "min_samples",
                message: "must be at least 1",
            });
        }
        validate_points(x)
    }

    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        self.validate(x)?;

        let n_samples = x.nrows();
        let index = self.algorithm.build(x, self.eps, self.metric);

        let mut labels = Labels::from_elem(n_samples, NOISE);
        let mut visited = vec![false; n_samples];
        let mut core_samples = Vec::new();
        let mut next_label = NOISE + 1;

        for seed in 0..n_samples {
            if visited[seed] {
                continue;
            }

            let mut queue = VecDeque::from([seed]);
            while let Some(point) = queue.pop_front() {
                if visited[point] {
                    continue;
                }
                visited[point] = true;

                let neighbors = index.region_query(point);
                if neighbors.len() < self.min_samples {
                    continue;
                }
                core_samples.push(point);

                if labels[point] == NOISE {
                    log::debug!("{:<32}{:<32}", "dbscan new cluster", next_label);
                    labels[point] = next_label;
                    next_label += 1;
                }

                let label = labels[point];
                for &neighbor in &neighbors {
                    labels[neighbor] = label;
                }
                queue.extend(neighbors.into_iter().filter(|&neighbor| !visited[neighbor]));
            }
        }

        core_samples.sort_unstable();

        self.labels = Some(labels);
        self.core_sample_indices = Some(core_samples);

        log::info!(
            "{:<32}{:<16}{:<16}",
            "dbscan fit",
            format!("clusters {}", self.get_n_clusters().unwrap_or(0)),
            format!("noise {}", self.get_n_noise_points().unwrap_or(0)),
        );

        Ok(())
    }

    pub fn fit_predict(&mut self, x: &Matrix) -> Result<Labels> {
        self.fit(x)?;
        self.labels.clone().ok_or(Error::NotFitted("DBSCAN"))
    }

    /// Label every point of `x`; same as [`DBSCAN::fit_predict`].
    pub fn cluster(&mut self, x: &Matrix) -> Result<Labels> {
        self.fit_predict(x)
    }

    pub fn get_n_clusters(&self) -> Option<usize> {
        self.labels.as_ref().map(|labels| {
            labels
                .iter()
                .filter(|&&label| label != NOISE)
                .collect::<HashSet<_>>()
                .len()
        })
    }

    pub fn get_n_noise_points(&self) -> Option<usize> {
        self.labels
            .as_ref()
            .map(|labels| labels.iter().filter(|&&label| label == NOISE).count())
    }

    pub fn is_core_sample(&self, sample_idx: usize) -> Option<bool> {
        self.core_sample_indices
            .as_ref()
            .map(|core_indices| core_indices.binary_search(&sample_idx).is_ok())
    }
}

impl Default for DBSCAN {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}
