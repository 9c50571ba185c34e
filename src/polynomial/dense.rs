//! Dense univariate polynomial over real coefficients
//!
//! # Coefficient Convention
//!
//! Coefficients are stored in ascending power order:
//! - `coefficients[0]` = constant term (a₀)
//! - `coefficients[n]` = leading coefficient (aₙ)
//! - Polynomial: p(x) = a₀ + a₁x + a₂x² + ... + aₙxⁿ
//!
//! # Evaluation
//!
//! Evaluation uses Horner's method, accumulating from the leading
//! coefficient down:
//!
//! ```text
//! result = aₙ
//! for i = n-1 downto 0: result = aᵢ + x * result
//! ```
//!
//! The combined Horner-Ruffini pass additionally maintains a companion
//! accumulator q such that p(x)/q(x) is the Newton correction, which is
//! exactly what the Aberth-Ehrlich update consumes. Computing both in one
//! pass avoids a second O(n) sweep over the coefficients.

use nalgebra::DVector;
use num_complex::Complex;
use std::fmt;

// =================================================================================================
// Polynomial
// =================================================================================================

/// Dense univariate polynomial with real coefficients
///
/// # Invariants
///
/// Enforced at construction:
/// - at least two coefficients (degree ≥ 1)
/// - non-zero leading coefficient
///
/// Both conditions fail fast with an error message; the solvers never see
/// a polynomial for which the initial-circle radius or the per-degree
/// angular step would be undefined.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::polynomial::Polynomial;
///
/// // (x - 1)(x - 3)(x - 2)^2 = 12 - 28x + 23x^2 - 8x^3 + x^4
/// let poly = Polynomial::from_coefficients(vec![12.0, -28.0, 23.0, -8.0, 1.0]).unwrap();
/// assert_eq!(poly.degree(), 4);
///
/// // Degree 0 is rejected
/// assert!(Polynomial::from_coefficients(vec![1.0]).is_err());
///
/// // Zero leading coefficient is rejected
/// assert!(Polynomial::from_coefficients(vec![1.0, 2.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    /// Coefficients in ascending power order, length = degree + 1
    coefficients: DVector<f64>,
}

impl Polynomial {

    // ======================================= constructors =======================================

    /// Create from a coefficient vector (ascending power order)
    ///
    /// Fails when the vector has fewer than two entries or when the
    /// leading coefficient is zero.
    pub fn new(coefficients: DVector<f64>) -> Result<Self, String> {
        if coefficients.len() < 2 {
            return Err(format!(
                "Polynomial requires at least 2 coefficients (degree >= 1), got {}",
                coefficients.len()
            ));
        }
        if coefficients[coefficients.len() - 1] == 0.0 {
            return Err("Leading coefficient must be non-zero".to_string());
        }

        Ok(Self { coefficients })
    }

    /// Create from a plain `Vec<f64>` (ascending power order)
    pub fn from_coefficients(coefficients: Vec<f64>) -> Result<Self, String> {
        Self::new(DVector::from_vec(coefficients))
    }

    // ======================================== accessors =========================================

    /// Degree of the polynomial (number of roots)
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficient vector (ascending power order)
    pub fn coefficients(&self) -> &DVector<f64> {
        &self.coefficients
    }

    /// Constant term a₀
    pub fn constant_term(&self) -> f64 {
        self.coefficients[0]
    }

    /// Leading coefficient aₙ (non-zero by construction)
    pub fn leading_coefficient(&self) -> f64 {
        self.coefficients[self.coefficients.len() - 1]
    }

    // ======================================== evaluation ========================================

    /// Evaluate p(x) with Horner's method
    ///
    /// Accumulates from the leading coefficient down, one multiply-add per
    /// coefficient. O(n) per call.
    pub fn evaluate(&self, x: Complex<f64>) -> Complex<f64> {
        let n = self.coefficients.len();
        let mut result = Complex::new(self.coefficients[n - 1], 0.0);

        for i in (0..n - 1).rev() {
            result = Complex::new(self.coefficients[i], 0.0) + x * result;
        }

        result
    }

    /// Evaluate p(x) and its Ruffini companion q(x) in one pass
    ///
    /// Maintains two accumulators from the leading coefficient down:
    ///
    /// ```text
    /// q ← q * x + p
    /// p ← aᵢ + x * p
    /// ```
    ///
    /// On exit p is the polynomial value and p/q is the Newton step.
    /// Aberth-Ehrlich needs both; one synthetic-division pass saves the
    /// second sweep a separate derivative evaluation would cost.
    pub fn evaluate_with_companion(&self, x: Complex<f64>) -> (Complex<f64>, Complex<f64>) {
        let n = self.coefficients.len();
        let mut q = Complex::new(0.0, 0.0);
        let mut p = Complex::new(self.coefficients[n - 1], 0.0);

        for i in (0..n - 1).rev() {
            q = q * x + p;
            p = Complex::new(self.coefficients[i], 0.0) + x * p;
        }

        (p, q)
    }

    /// Largest |p(r)| over a candidate root vector
    ///
    /// Diagnostic used by tests and the comparison driver: for a good
    /// root set the residual is small relative to the coefficient
    /// magnitudes. NaN residuals are skipped by the max fold — check
    /// finiteness of the roots separately before trusting this value.
    pub fn max_residual(&self, roots: &DVector<Complex<f64>>) -> f64 {
        roots
            .iter()
            .map(|r| self.evaluate(*r).norm())
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Highest power first, skipping zero terms: "x^3 - 1"
        let n = self.coefficients.len();
        let mut first = true;

        for i in (0..n).rev() {
            let a = self.coefficients[i];
            if a == 0.0 {
                continue;
            }

            if first {
                if a < 0.0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if a < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = a.abs();
            match i {
                0 => write!(f, "{}", magnitude)?,
                1 => {
                    if magnitude == 1.0 {
                        write!(f, "x")?;
                    } else {
                        write!(f, "{}x", magnitude)?;
                    }
                }
                _ => {
                    if magnitude == 1.0 {
                        write!(f, "x^{}", i)?;
                    } else {
                        write!(f, "{}x^{}", magnitude, i)?;
                    }
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
