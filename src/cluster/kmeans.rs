use crate::dataset::validate_points;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::metrics::inertia;
use crate::{Labels, Matrix, Vector};
use ndarray::ArrayView1;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Centroid clusterer.
///
/// Starts from a random permutation of the points split into `k` contiguous partitions,
/// then runs exactly `iters` rounds of centroid recomputation and nearest-centroid
/// reassignment. There is no convergence check. A cluster that loses all of its points
/// has no centroid and can never win a point back.
#[derive(Clone, Debug)]
pub struct KMeans {
    pub clusters: Option<Vec<Matrix>>,
    pub cluster_centers: Option<Vec<Option<Vector>>>,
    pub labels: Option<Labels>,
    pub inertia: Option<f64>,
    n_clusters: usize,
    iters: usize,
    random_state: Option<u64>,
    metric: Metric,
}

impl KMeans {
    pub fn new(n_clusters: usize) -> Self {
        Self {
            clusters: None,
            cluster_centers: None,
            labels: None,
            inertia: None,
            n_clusters,
            iters: 150,
            random_state: None,
            metric: Metric::Euclidean,
        }
    }

    pub fn iters(mut self, iters: usize) -> Self {
        self.iters = iters;
        self
    }

    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    fn validate(&self, x: &Matrix) -> Result<()> {
        if self.n_clusters == 0 {
            return Err(Error::InvalidParameter {
                name: "n_clusters",
                message: "must be at least 1",
            });
        }
        if x.nrows() == 0 {
            return Err(Error::EmptyInput);
        }
        validate_points(x)
    }

    /// Fit with a generator seeded from `random_state`, or the thread-local generator.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        match self.random_state {
            Some(seed) => self.fit_with_rng(x, &mut StdRng::seed_from_u64(seed)),
            None => self.fit_with_rng(x, &mut rand::thread_rng()),
        }
    }

    /// Fit drawing the initial shuffle from `rng`.
    pub fn fit_with_rng<R: Rng + ?Sized>(&mut self, x: &Matrix, rng: &mut R) -> Result<()> {
        self.validate(x)?;

        let mut labels = self.initial_partition(x.nrows(), rng);
        let mut centroids: Vec<Option<Vector>> = vec![None; self.n_clusters];

        for iteration in 0..self.iters {
            centroids = self.compute_centroids(x, &labels);
            log::debug!("{:<32}{:<32}", "kmeans iteration", iteration);

            for (i, point) in x.rows().into_iter().enumerate() {
                labels[i] = self.nearest(&point, &centroids, labels[i]);
            }

            for (k, centroid) in centroids.iter().enumerate() {
                if centroid.is_some() && !labels.iter().any(|&label| label == k) {
                    log::warn!("{:<32}{:<32}", "kmeans cluster emptied", k);
                }
            }
        }

        let clusters = self.partition(x, &labels);
        let inertia = match self.iters {
            0 => None,
            _ => Some(inertia(x, &labels, &centroids)),
        };

        log::info!(
            "{:<32}{:<16}{:<16}",
            "kmeans fit",
            format!("iters {}", self.iters),
            format!("inertia {:.4}", inertia.unwrap_or(f64::NAN)),
        );

        self.clusters = Some(clusters);
        self.cluster_centers = Some(centroids);
        self.labels = Some(labels);
        self.inertia = inertia;

        Ok(())
    }

    pub fn fit_predict(&mut self, x: &Matrix) -> Result<Labels> {
        self.fit(x)?;
        self.labels.clone().ok_or(Error::NotFitted("KMeans"))
    }

    /// Fit and return `(clusters, centers)`, both indexed by cluster id.
    ///
    /// `centers[k]` is the centroid snapshot used for the final assignment, `None` when
    /// cluster `k` had no points at that time (or when no iteration ran).
    pub fn cluster(&mut self, x: &Matrix) -> Result<(Vec<Matrix>, Vec<Option<Vector>>)> {
        self.fit(x)?;
        let clusters = self.clusters.clone().ok_or(Error::NotFitted("KMeans"))?;
        let centers = self.cluster_centers.clone().ok_or(Error::NotFitted("KMeans"))?;
        Ok((clusters, centers))
    }

    /// Assign each row of `x` to its nearest existing centroid.
    pub fn predict(&self, x: &Matrix) -> Result<Labels> {
        let centroids = self
            .cluster_centers
            .as_ref()
            .ok_or(Error::NotFitted("KMeans"))?;

        let (first, sample) = centroids
            .iter()
            .enumerate()
            .find_map(|(k, centroid)| centroid.as_ref().map(|c| (k, c)))
            .ok_or(Error::NotFitted("KMeans"))?;

        if x.ncols() != sample.len() {
            return Err(Error::DimensionMismatch {
                expected: sample.len(),
                found: x.ncols(),
            });
        }

        Ok(x
            .rows()
            .into_iter()
            .map(|point| self.nearest(&point, centroids, first))
            .collect())
    }

    /// Index of the strictly closest centroid, scanning upward so the lowest index wins
    /// ties. Clusters without a centroid are never chosen; `current` is kept when no
    /// distance beats infinity.
    fn nearest(&self, point: &ArrayView1<f64>, centroids: &[Option<Vector>], current: usize) -> usize {
        let mut min_distance = f64::INFINITY;
        let mut closest = current;
        for (k, centroid) in centroids.iter().enumerate() {
            if let Some(centroid) = centroid {
                let distance = self.metric.distance(&centroid.view(), point);
                if distance < min_distance {
                    min_distance = distance;
                    closest = k;
                }
            }
        }
        closest
    }

    /// Clusters left without points at the end of the run.
    pub fn empty_clusters(&self) -> Option<Vec<usize>> {
        self.clusters.as_ref().map(|clusters| {
            clusters
                .iter()
                .enumerate()
                .filter(|(_, members)| members.nrows() == 0)
                .map(|(k, _)| k)
                .collect()
        })
    }

    /// Shuffle the indices and cut them into `n_clusters` runs whose lengths differ by at
    /// most one, longer runs first.
    fn initial_partition<R: Rng + ?Sized>(&self, n_samples: usize, rng: &mut R) -> Labels {
        let mut order: Vec<usize> = (0..n_samples).collect();
        order.shuffle(rng);

        let base = n_samples / self.n_clusters;
        let extra = n_samples % self.n_clusters;

        let mut labels = Labels::zeros(n_samples);
        let mut start = 0;
        for k in 0..self.n_clusters {
            let len = base + usize::from(k < extra);
            for &i in &order[start..start + len] {
                labels[i] = k;
            }
            start += len;
        }
        labels
    }

    fn compute_centroids(&self, x: &Matrix, labels: &Labels) -> Vec<Option<Vector>> {
        let mut sums = Matrix::zeros((self.n_clusters, x.ncols()));
        let mut counts = vec![0usize; self.n_clusters];

        for (point, &label) in x.rows().into_iter().zip(labels.iter()) {
            let mut sum = sums.row_mut(label);
            sum += &point;
            counts[label] += 1;
        }

        sums.rows()
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| match count {
                0 => None,
                _ => Some(sum.mapv(|v| v / count as f64)),
            })
            .collect()
    }

    fn partition(&self, x: &Matrix, labels: &Labels) -> Vec<Matrix> {
        (0..self.n_clusters)
            .map(|k| {
                let members: Vec<usize> = labels
                    .iter()
                    .enumerate()
                    .filter(|&(_, &label)| label == k)
                    .map(|(i, _)| i)
                    .collect();
                x.select(ndarray::Axis(0), &members)
            })
            .collect()
    }
}

impl Default for KMeans {
    fn default() -> Self {
        Self::new(8)
    }
}
