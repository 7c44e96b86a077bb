use crate::error::{Error, Result};
use crate::Matrix;
use ndarray::s;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::Rng;

/// Build a point set from row vectors, rejecting ragged input.
///
/// The dimension of the first row is the dimension of the whole set.
/// An empty slice yields a `0 x 0` matrix.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<Matrix> {
    let n_features = match rows.first() {
        Some(row) => row.len(),
        None => return Ok(Matrix::zeros((0, 0))),
    };

    let mut flat = Vec::with_capacity(rows.len() * n_features);
    for row in rows {
        if row.len() != n_features {
            return Err(Error::DimensionMismatch {
                expected: n_features,
                found: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }

    Matrix::from_shape_vec((rows.len(), n_features), flat).map_err(|_| Error::InvalidParameter {
        name: "rows",
        message: "could not be arranged into a matrix",
    })
}

/// Shape checks shared by both clusterers.
pub(crate) fn validate_points(x: &Matrix) -> Result<()> {
    if x.nrows() > 0 && x.ncols() == 0 {
        return Err(Error::InvalidParameter {
            name: "x",
            message: "points must have at least one feature",
        });
    }
    Ok(())
}

/// Gaussian blobs around each row of `centers`, `n_per_center` points each,
/// emitted center by center.
pub fn blobs<R: Rng + ?Sized>(
    centers: &Matrix,
    n_per_center: usize,
    std_dev: f64,
    rng: &mut R,
) -> Result<Matrix> {
    let invalid_std = Error::InvalidParameter {
        name: "std_dev",
        message: "must be finite and non-negative",
    };
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(invalid_std);
    }
    let normal = Normal::new(0.0, std_dev).map_err(|_| invalid_std)?;

    let n_features = centers.ncols();
    let mut out = Matrix::zeros((centers.nrows() * n_per_center, n_features));

    for (i, center) in centers.rows().into_iter().enumerate() {
        let mut blob = Matrix::random_using((n_per_center, n_features), normal, rng);
        for mut row in blob.rows_mut() {
            row += &center;
        }
        out.slice_mut(s![i * n_per_center..(i + 1) * n_per_center, ..])
            .assign(&blob);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_from_rows() {
        let x = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(x.shape(), &[3, 2]);
        assert_eq!(x[[2, 1]], 6.0);
    }

    #[test]
    fn test_from_rows_dimension_mismatch() {
        let err = from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn test_from_rows_empty() {
        let x = from_rows(&[]).unwrap();
        assert_eq!(x.nrows(), 0);
    }

    #[test]
    fn test_validate_points_requires_features() {
        assert!(validate_points(&Matrix::zeros((3, 0))).is_err());
        assert!(validate_points(&Matrix::zeros((0, 0))).is_ok());
        assert!(validate_points(&array![[1.0]]).is_ok());
    }

    #[test]
    fn test_blobs_are_centered() {
        let centers = array![[0.0, 0.0], [100.0, 100.0]];
        let mut rng = StdRng::seed_from_u64(3);
        let x = blobs(&centers, 50, 0.5, &mut rng).unwrap();
        assert_eq!(x.shape(), &[100, 2]);

        let first = x.slice(s![..50, ..]).mean_axis(ndarray::Axis(0)).unwrap();
        let second = x.slice(s![50.., ..]).mean_axis(ndarray::Axis(0)).unwrap();
        assert!(first.iter().all(|v| v.abs() < 1.0));
        assert!(second.iter().all(|v| (v - 100.0).abs() < 1.0));
    }

    #[test]
    fn test_blobs_invalid_std() {
        let centers = array![[0.0, 0.0]];
        let mut rng = StdRng::seed_from_u64(3);
        for std_dev in [-1.0, f64::NAN, f64::INFINITY] {
            let err = blobs(&centers, 5, std_dev, &mut rng).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "std_dev", .. }));
        }
        assert!(blobs(&centers, 5, 0.0, &mut rng).is_ok());
    }
}
