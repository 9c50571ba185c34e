//! Durand-Kerner simultaneous root iteration
//!
//! # Mathematical Background
//!
//! Durand-Kerner (also called the Weierstrass method) refines all n root
//! estimates of p at once. Writing the monic factorization
//! p(x) = aₙ·Π(x − rⱼ), the update for estimate i is:
//!
//! ```text
//! r_i ← r_i − p(r_i) / Π_{j≠i} (r_i − r_j)
//! ```
//!
//! The denominator plays the role of the derivative of the factored
//! form with the other estimates held fixed, so each step is a Newton
//! step against the current guesses for the remaining roots.
//!
//! # Characteristics
//!
//! - **Convergence**: linear near a simple root
//! - **Cost per root per iteration**: one Horner evaluation O(n) plus an
//!   O(n) product of pairwise differences
//! - **Memory**: the two root vectors of the engine, O(n)
//!
//! # Degeneracy
//!
//! When two estimates coincide — repeated true roots with unlucky
//! initialization — the pairwise product is exactly zero and the
//! division produces an infinite or NaN estimate that propagates into
//! subsequent iterations. This is deliberately not guarded: the caller
//! detects it through [`RootsResult::all_finite`].
//!
//! # Example
//!
//! ```rust
//! use polyroot_rs::polynomial::Polynomial;
//! use polyroot_rs::solver::{DurandKernerSolver, RootSolver, SolverConfiguration};
//!
//! let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
//! let solver = DurandKernerSolver::new();
//! let result = solver.solve(&poly, &SolverConfiguration::default()).unwrap();
//!
//! assert!(result.is_converged());
//! ```

use crate::polynomial::Polynomial;
use crate::solver::engine::{self, UpdateRule};
use crate::solver::initial::initial_roots;
use crate::solver::traits::{RootSolver, RootsResult, SolverConfiguration};
use nalgebra::DVector;
use num_complex::Complex;

// =================================================================================================
// Durand-Kerner solver
// =================================================================================================

/// Durand-Kerner (Weierstrass) simultaneous iteration
///
/// Cheap per-step, linear convergence; the baseline the Aberth-Ehrlich
/// variant is measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurandKernerSolver;

impl DurandKernerSolver {
    /// Create a new Durand-Kerner solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use polyroot_rs::solver::{DurandKernerSolver, RootSolver};
    ///
    /// let solver = DurandKernerSolver::new();
    /// assert_eq!(solver.name(), "Durand-Kerner");
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl UpdateRule for DurandKernerSolver {
    fn next_estimate(
        &self,
        poly: &Polynomial,
        previous: &DVector<Complex<f64>>,
        index: usize,
    ) -> Complex<f64> {
        let mut denominator = Complex::new(1.0, 0.0);
        for (j, other) in previous.iter().enumerate() {
            if j != index {
                denominator *= previous[index] - *other;
            }
        }

        previous[index] - poly.evaluate(previous[index]) / denominator
    }
}

impl RootSolver for DurandKernerSolver {
    fn solve(
        &self,
        poly: &Polynomial,
        config: &SolverConfiguration,
    ) -> Result<RootsResult, String> {
        config.validate()?;

        let mut result = engine::run(poly, self, initial_roots(poly), config);

        result.add_metadata("solver", self.name());
        result.add_metadata("epsilon", &config.epsilon.to_string());
        result.add_metadata("max iterations", &config.max_iterations.to_string());

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Durand-Kerner"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
