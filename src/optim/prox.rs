//! Proximal soft-thresholding operator

use ndarray::{Array1, ArrayView1};

/// Elementwise soft-thresholding, the proximal operator of the L1 norm
///
/// `soft_threshold(z, t)[i] = sign(z[i]) * max(|z[i]| - t, 0)`
///
/// Shrinks every coordinate's magnitude by `threshold`, clamping to zero once
/// the magnitude drops below it. Never flips a sign, and is the identity when
/// `threshold` is zero.
///
/// # Example
///
/// ```
/// use disperso::optim::soft_threshold;
/// use ndarray::array;
///
/// let z = array![0.5, -0.05, 0.0];
/// assert_eq!(soft_threshold(z.view(), 0.1), array![0.4, 0.0, 0.0]);
/// ```
pub fn soft_threshold(z: ArrayView1<f64>, threshold: f64) -> Array1<f64> {
    z.mapv(|zi| zi.signum() * (zi.abs() - threshold).max(0.0))
}

/// Subgradient of `|x|` at `x`, using the convention `sign(0) = 0`
///
/// Distinct from `f64::signum`, which maps zero to ±1.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
