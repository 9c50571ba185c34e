//! Root solver traits and types
//!
//! # Design Philosophy
//!
//! This module follows the same pattern throughout the crate:
//! - Central enum `Method` selects the simultaneous-iteration variant
//! - `SolverConfiguration` carries the numerical parameters with
//!   documented defaults
//! - `RootsResult` carries the root vector plus convergence diagnostics
//!
//! # Stability Guarantee
//!
//! - `RootSolver` trait: STABLE since v0.1.0
//! - `Method` enum: the two-valued selector of the public interface
//! - Core structures: STABLE (fields won't be removed)

use crate::polynomial::Polynomial;
use nalgebra::DVector;
use num_complex::Complex;
use std::collections::HashMap;

// =================================================================================================
// Method selection
// =================================================================================================

/// Simultaneous-iteration method selector
///
/// Both methods refine all root estimates at once from the previous full
/// root vector; they differ in the per-root correction:
///
/// - **Durand-Kerner**: divides p(root) by the product of pairwise
///   differences from the other estimates. Linear convergence, cheap
///   steps.
/// - **Aberth-Ehrlich**: Newton step adjusted by a pairwise-reciprocal
///   correction sum. Faster convergence per iteration at a higher
///   per-step cost.
///
/// The trade-off between the two is exactly what the comparison driver
/// and the benches surface; the core exposes them as interchangeable
/// strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Durand-Kerner (Weierstrass) iteration
    DurandKerner,

    /// Aberth-Ehrlich iteration
    AberthEhrlich,
}

impl Method {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            Method::DurandKerner => "Durand-Kerner",
            Method::AberthEhrlich => "Aberth-Ehrlich",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Default convergence tolerance
pub const DEFAULT_EPSILON: f64 = 1e-14;

/// Default iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000_000;

/// Configuration for the iteration engine
///
/// # Defaults
///
/// - `epsilon`: 1e-14 — L2 norm of the step between successive root
///   vectors at or below which the run is converged
/// - `max_iterations`: 1e8 — hard safety cap against non-convergence
///
/// The defaults reproduce the reference behavior; both are recognized
/// options rather than hard-coded literals.
///
/// # Examples
///
/// ```rust
/// use polyroot_rs::solver::SolverConfiguration;
///
/// // Reference defaults
/// let config = SolverConfiguration::default();
/// assert_eq!(config.epsilon, 1e-14);
///
/// // Loose tolerance, tight cap
/// let config = SolverConfiguration::new(1e-10, 10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolverConfiguration {
    /// Convergence tolerance on the L2 step norm
    pub epsilon: f64,

    /// Iteration cap (safety valve, not a time-based timeout)
    pub max_iterations: usize,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfiguration {
    /// Create a configuration with explicit parameters
    pub fn new(epsilon: f64, max_iterations: usize) -> Self {
        Self { epsilon, max_iterations }
    }

    /// Validate that parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), String> {
        if self.epsilon <= 0.0 || !self.epsilon.is_finite() {
            return Err("Epsilon must be positive and finite".to_string());
        }
        if self.max_iterations == 0 {
            return Err("Maximum iterations must be positive".to_string());
        }
        Ok(())
    }
}

// =================================================================================================
// Termination
// =================================================================================================

/// Terminal state of an iteration run
///
/// `Exhausted` is reported, not treated as a hard failure: the result is
/// still returned with its diagnostics and the caller decides whether it
/// is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Step norm dropped to or below epsilon
    Converged,

    /// Iteration cap reached without convergence
    ///
    /// Also reported when a numerical degeneracy drives the step norm to
    /// NaN: the norm test fails, the loop exits, and the non-finite norm
    /// remains visible in the result.
    Exhausted,
}

impl Termination {
    /// Returns true if this state indicates successful convergence
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, Termination::Converged)
    }
}

// =================================================================================================
// Result
// =================================================================================================

/// Root vector plus convergence diagnostics
///
/// Always produced, even on non-convergence or numerical degeneracy; the
/// caller inspects `termination`, `last_step_norm` and `all_finite()` to
/// judge the quality of the root set.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::polynomial::Polynomial;
/// use polyroot_rs::solver::{solve, Method, SolverConfiguration};
///
/// let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
/// let result = solve(&poly, Method::DurandKerner, &SolverConfiguration::default()).unwrap();
///
/// assert_eq!(result.len(), 3);
/// assert!(result.is_converged());
/// assert!(result.all_finite());
/// ```
#[derive(Debug, Clone)]
pub struct RootsResult {
    /// Root estimates, one per degree
    pub roots: DVector<Complex<f64>>,

    /// Iterations consumed
    pub iterations: usize,

    /// L2 norm of the final step between successive root vectors
    pub last_step_norm: f64,

    /// How the run terminated
    pub termination: Termination,

    /// Diagnostic metadata (solver name, parameters) for reproducibility
    metadata: HashMap<String, String>,
}

impl RootsResult {
    /// Create a new result
    pub fn new(
        roots: DVector<Complex<f64>>,
        iterations: usize,
        last_step_norm: f64,
        termination: Termination,
    ) -> Self {
        Self {
            roots,
            iterations,
            last_step_norm,
            termination,
            metadata: HashMap::new(),
        }
    }

    /// Number of roots (the polynomial's degree)
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// True when the root vector is empty (never the case for a valid solve)
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// True when the run converged within the cap
    pub fn is_converged(&self) -> bool {
        self.termination.is_converged()
    }

    /// True when every root estimate is finite
    ///
    /// A zero denominator in either update rule (coinciding estimates,
    /// e.g. repeated true roots with unlucky initialization) propagates
    /// as infinite or NaN values rather than an error; this probe is how
    /// a caller detects that degeneracy.
    pub fn all_finite(&self) -> bool {
        self.roots.iter().all(|r| r.re.is_finite() && r.im.is_finite())
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Stable interface for simultaneous root-finding methods
///
/// # Implementing a New Method
///
/// ```rust
/// use polyroot_rs::polynomial::Polynomial;
/// use polyroot_rs::solver::{
///     initial_roots, RootSolver, RootsResult, SolverConfiguration, Termination,
/// };
///
/// struct MyMethod;
///
/// impl RootSolver for MyMethod {
///     fn solve(
///         &self,
///         poly: &Polynomial,
///         config: &SolverConfiguration,
///     ) -> Result<RootsResult, String> {
///         config.validate()?;
///         // ... place initial guesses, iterate to convergence ...
///         let roots = initial_roots(poly);
///         Ok(RootsResult::new(roots, 0, f64::INFINITY, Termination::Exhausted))
///     }
///
///     fn name(&self) -> &str {
///         "My Method"
///     }
/// }
/// ```
pub trait RootSolver {
    /// Find all complex roots of `poly`
    ///
    /// Returns the root vector and diagnostics, or an error for an
    /// invalid configuration. Non-convergence is NOT an error: it is
    /// reported through [`Termination::Exhausted`] in the result.
    fn solve(&self, poly: &Polynomial, config: &SolverConfiguration)
        -> Result<RootsResult, String>;

    /// Human-readable method name
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Method Tests ======

    #[test]
    fn test_method_names() {
        assert_eq!(Method::DurandKerner.name(), "Durand-Kerner");
        assert_eq!(Method::AberthEhrlich.name(), "Aberth-Ehrlich");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(format!("{}", Method::DurandKerner), "Durand-Kerner");
    }

    // ====== Configuration Tests ======

    #[test]
    fn test_default_configuration() {
        let config = SolverConfiguration::default();
        assert_eq!(config.epsilon, 1e-14);
        assert_eq!(config.max_iterations, 100_000_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_epsilon_rejected() {
        let config = SolverConfiguration::new(-1e-14, 100);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Epsilon"));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = SolverConfiguration::new(1e-14, 0);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Maximum iterations"));
    }

    // ====== Termination Tests ======

    #[test]
    fn test_termination_flags() {
        assert!(Termination::Converged.is_converged());
        assert!(!Termination::Exhausted.is_converged());
    }

    // ====== Result Tests ======

    #[test]
    fn test_result_metadata() {
        let roots = DVector::from_vec(vec![Complex::new(1.0, 0.0)]);
        let mut result = RootsResult::new(roots, 10, 1e-15, Termination::Converged);

        result.add_metadata("solver", "Durand-Kerner");
        assert_eq!(result.get_metadata("solver"), Some("Durand-Kerner"));
        assert_eq!(result.get_metadata("missing"), None);
    }

    #[test]
    fn test_all_finite_detects_nan() {
        let roots = DVector::from_vec(vec![
            Complex::new(1.0, 0.0),
            Complex::new(f64::NAN, 0.0),
        ]);
        let result = RootsResult::new(roots, 5, f64::NAN, Termination::Exhausted);

        assert!(!result.all_finite());
    }

    #[test]
    fn test_all_finite_detects_infinity() {
        let roots = DVector::from_vec(vec![Complex::new(0.0, f64::INFINITY)]);
        let result = RootsResult::new(roots, 5, 1.0, Termination::Exhausted);

        assert!(!result.all_finite());
    }
}
