//! Synthetic sparse-regression datasets

use crate::error::{Error, Result};
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Normal, StandardNormal};

/// Draw a random vector with exactly `nonzeros` nonzero entries
///
/// Entries are sampled from `N(mean, std_dev)`; `dim - nonzeros` positions,
/// chosen uniformly without replacement, are then zeroed out.
pub fn random_sparse_vector<R: Rng + ?Sized>(
    dim: usize,
    nonzeros: usize,
    mean: f64,
    std_dev: f64,
    rng: &mut R,
) -> Result<Array1<f64>> {
    if nonzeros > dim {
        return Err(Error::InvalidParameter(format!(
            "nonzeros ({nonzeros}) exceeds dimension ({dim})"
        )));
    }
    let normal =
        Normal::new(mean, std_dev).map_err(|e| Error::InvalidParameter(e.to_string()))?;

    let mut w = Array1::from_shape_fn(dim, |_| rng.sample(normal));
    for idx in rand::seq::index::sample(rng, dim, dim - nonzeros) {
        w[idx] = 0.0;
    }

    Ok(w)
}

/// Generate a noisy linear dataset `y = Xw + ε`
///
/// `X` has standard-normal entries and `ε ~ N(0, noise_scale)`. When
/// `weights` is `None` a sparse ground-truth vector is drawn via
/// [`random_sparse_vector`]. Returns `(X, y, w)` so callers can compare the
/// recovered weights against the ground truth.
pub fn generate_dataset<R: Rng + ?Sized>(
    dim: usize,
    num_items: usize,
    nonzeros: usize,
    noise_scale: f64,
    weights: Option<&Array1<f64>>,
    rng: &mut R,
) -> Result<(Array2<f64>, Array1<f64>, Array1<f64>)> {
    let x = Array2::from_shape_fn((num_items, dim), |_| rng.sample::<f64, _>(StandardNormal));

    let w = match weights {
        Some(w) => {
            if w.len() != dim {
                return Err(Error::DimensionMismatch {
                    context: "supplied weights vs requested dimension",
                    expected: dim,
                    got: w.len(),
                });
            }
            w.clone()
        }
        None => random_sparse_vector(dim, nonzeros, 0.0, 1.0, rng)?,
    };

    let noise =
        Normal::new(0.0, noise_scale).map_err(|e| Error::InvalidParameter(e.to_string()))?;
    let epsilon = Array1::from_shape_fn(num_items, |_| rng.sample(noise));

    let y = x.dot(&w) + epsilon;

    Ok((x, y, w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_sparse_vector_nonzero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        let w = random_sparse_vector(20, 5, 0.0, 1.0, &mut rng).unwrap();

        assert_eq!(w.len(), 20);
        // Normal draws are almost surely nonzero, so the count is exact.
        assert_eq!(w.iter().filter(|&&v| v != 0.0).count(), 5);
    }

    #[test]
    fn test_random_sparse_vector_rejects_excess_nonzeros() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = random_sparse_vector(3, 4, 0.0, 1.0, &mut rng);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_generate_dataset_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let (x, y, w) = generate_dataset(10, 50, 3, 0.1, None, &mut rng).unwrap();

        assert_eq!(x.dim(), (50, 10));
        assert_eq!(y.len(), 50);
        assert_eq!(w.len(), 10);
    }

    #[test]
    fn test_generate_dataset_seeded_determinism() {
        let gen = || {
            let mut rng = StdRng::seed_from_u64(99);
            generate_dataset(5, 8, 2, 1.0, None, &mut rng).unwrap()
        };

        let (xa, ya, wa) = gen();
        let (xb, yb, wb) = gen();

        assert_eq!(xa, xb);
        assert_eq!(ya, yb);
        assert_eq!(wa, wb);
    }

    #[test]
    fn test_generate_dataset_with_supplied_weights() {
        let mut rng = StdRng::seed_from_u64(1);
        let w = array![1.0, -2.0];
        let (x, y, w_out) = generate_dataset(2, 4, 0, 0.0, Some(&w), &mut rng).unwrap();

        assert_eq!(w_out, w);
        // Zero noise, so y is exactly Xw.
        assert_eq!(y, x.dot(&w));
    }

    #[test]
    fn test_generate_dataset_weight_dimension_checked() {
        let mut rng = StdRng::seed_from_u64(1);
        let w = array![1.0, -2.0, 0.5];
        let result = generate_dataset(2, 4, 0, 1.0, Some(&w), &mut rng);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }
}
