//! Initial root placement
//!
//! Both simultaneous-iteration methods start from the same guess set:
//! n = deg(p) points evenly spaced on a circle whose radius is the
//! classical magnitude bound |a₀/aₙ|^(1/n). The angular grid is offset by
//! θ/(n+1) so that no guess lands on the real axis — for real-coefficient
//! polynomials a real starting point sits exactly on the conjugate
//! symmetry line and can cancel against its mirror image.

use crate::polynomial::Polynomial;
use nalgebra::DVector;
use num_complex::Complex;
use std::f64::consts::PI;

/// Place deg(p) initial guesses on the starting circle
///
/// - radius r = |a₀/aₙ|^(1/n)
/// - angular step θ = 2π/n, offset θ/(n+1)
/// - guess k = r · exp(i·(θ·k + offset)) for k in [0, n)
///
/// Pure and deterministic: the same polynomial always produces the same
/// guesses, which is what makes `solve` reproducible run to run.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::polynomial::Polynomial;
/// use polyroot_rs::solver::initial_roots;
///
/// let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
/// let guesses = initial_roots(&poly);
///
/// assert_eq!(guesses.len(), 3);
/// // All guesses sit on the unit circle (|a0/a3| = 1)
/// for g in guesses.iter() {
///     assert!((g.norm() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn initial_roots(poly: &Polynomial) -> DVector<Complex<f64>> {
    let n = poly.degree();

    let radius = (poly.constant_term() / poly.leading_coefficient())
        .abs()
        .powf(1.0 / n as f64);

    let theta = 2.0 * PI / n as f64;
    let offset = theta / (n + 1) as f64;

    DVector::from_fn(n, |k, _| {
        Complex::from_polar(radius, theta * k as f64 + offset)
    })
}

// =================================================================================================
// Tests
// =================================================================================================
