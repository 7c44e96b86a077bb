//! eps-neighborhood queries for the density clusterer.
//!
//! [`NeighborSearch::BruteForce`] scans every point for every query, O(n) per query and
//! O(n²) per clustering run. It is the reference behavior and the default.
//!
//! [`NeighborSearch::Grid`] buckets points into a uniform grid and only measures points in
//! adjacent cells. It returns exactly the same indices, in the same ascending order, using
//! the same distance computation, so a run with either backend yields the same labels.

use crate::distance::Metric;
use crate::Matrix;
use std::collections::HashMap;

/// Backend used to answer eps-neighborhood queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborSearch {
    /// Exhaustive scan of the whole point set.
    #[default]
    BruteForce,
    /// Uniform grid with cells of side `2 * eps`.
    Grid,
}

impl NeighborSearch {
    pub(crate) fn build<'a>(&self, x: &'a Matrix, eps: f64, metric: Metric) -> Neighborhoods<'a> {
        match self {
            NeighborSearch::BruteForce => Neighborhoods::BruteForce(BruteForce { x, eps, metric }),
            NeighborSearch::Grid => Neighborhoods::Grid(Grid::new(x, eps, metric)),
        }
    }
}

pub(crate) enum Neighborhoods<'a> {
    BruteForce(BruteForce<'a>),
    Grid(Grid<'a>),
}

impl Neighborhoods<'_> {
    /// Indices within `eps` (inclusive) of `point_idx`, itself included, ascending.
    pub(crate) fn region_query(&self, point_idx: usize) -> Vec<usize> {
        match self {
            Neighborhoods::BruteForce(index) => index.region_query(point_idx),
            Neighborhoods::Grid(index) => index.region_query(point_idx),
        }
    }
}

pub(crate) struct BruteForce<'a> {
    x: &'a Matrix,
    eps: f64,
    metric: Metric,
}

impl BruteForce<'_> {
    fn region_query(&self, point_idx: usize) -> Vec<usize> {
        let point = self.x.row(point_idx);
        let mut neighbors = Vec::new();

        for i in 0..self.x.nrows() {
            let distance = self.metric.distance(&self.x.row(i), &point);
            if distance <= self.eps {
                neighbors.push(i);
            }
        }

        neighbors
    }
}

type Cell = Vec<i64>;

pub(crate) struct Grid<'a> {
    x: &'a Matrix,
    eps: f64,
    metric: Metric,
    side: f64,
    cells: HashMap<Cell, Vec<usize>>,
}

impl<'a> Grid<'a> {
    fn new(x: &'a Matrix, eps: f64, metric: Metric) -> Self {
        // Two points within eps differ by at most eps per coordinate under either metric,
        // so with cells of side 2 * eps their cell coordinates differ by at most one.
        let side = 2.0 * eps;
        let mut cells: HashMap<Cell, Vec<usize>> = HashMap::new();
        for i in 0..x.nrows() {
            cells.entry(Self::cell_of(x, i, side)).or_default().push(i);
        }
        Self {
            x,
            eps,
            metric,
            side,
            cells,
        }
    }

    fn cell_of(x: &Matrix, point_idx: usize, side: f64) -> Cell {
        x.row(point_idx)
            .iter()
            .map(|v| (v / side).floor() as i64)
            .collect()
    }

    fn region_query(&self, point_idx: usize) -> Vec<usize> {
        let point = self.x.row(point_idx);
        let home = Self::cell_of(self.x, point_idx, self.side);

        let mut neighbors: Vec<usize> = self
            .adjacent_cells(&home)
            .into_iter()
            .flat_map(|members| members.iter().copied())
            .filter(|&i| self.metric.distance(&self.x.row(i), &point) <= self.eps)
            .collect();

        neighbors.sort_unstable();
        neighbors
    }

    /// Occupied cells within Chebyshev distance 1 of `home`.
    fn adjacent_cells(&self, home: &Cell) -> Vec<&Vec<usize>> {
        let n_offsets = 3usize.checked_pow(home.len() as u32).unwrap_or(usize::MAX);

        if n_offsets > self.cells.len() {
            return self
                .cells
                .iter()
                .filter(|(cell, _)| {
                    cell.iter()
                        .zip(home.iter())
                        .all(|(a, b)| a.abs_diff(*b) <= 1)
                })
                .map(|(_, members)| members)
                .collect();
        }

        let mut found = Vec::new();
        let mut offset = vec![-1i64; home.len()];
        loop {
            // Offsets past the i64 range would alias a saturated cell already visited.
            let cell: Option<Cell> = home
                .iter()
                .zip(offset.iter())
                .map(|(c, o)| c.checked_add(*o))
                .collect();
            if let Some(members) = cell.as_ref().and_then(|cell| self.cells.get(cell)) {
                found.push(members);
            }

            // Odometer increment over {-1, 0, 1}^D.
            let mut dim = 0;
            while dim < offset.len() && offset[dim] == 1 {
                offset[dim] = -1;
                dim += 1;
            }
            if dim == offset.len() {
                break;
            }
            offset[dim] += 1;
        }
        found
    }
}
