//! Numerical root-finding solvers
//!
//! This module provides the trait, configuration, iteration engine and
//! concrete methods for finding all complex roots of a polynomial by
//! simultaneous iteration.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **Polynomial** (`polynomial::Polynomial`) - WHAT to solve
//!    - Coefficient vector and evaluation primitives
//!
//! 2. **Configuration** (`SolverConfiguration`) - the stopping policy
//!    - Convergence tolerance, iteration cap
//!
//! 3. **Solver** (`RootSolver` trait) - HOW to solve
//!    - The per-root update rule (Durand-Kerner or Aberth-Ehrlich)
//!    - Shares one fork-join iteration engine
//!
//! This separation allows:
//! - The same polynomial solved with both methods
//! - Direct iteration-count and timing comparisons
//! - New methods without touching the engine or the trait
//!
//! # Workflow
//!
//! ```text
//! ┌────────────────┐
//! │  Polynomial    │  (coefficients, Horner evaluation)
//! └───────┬────────┘
//!         │
//! ┌───────▼────────┐
//! │ Initial circle │  radius |a0/an|^(1/n), offset grid
//! └───────┬────────┘
//!         │
//! ┌───────▼────────┐     one update task per root,
//! │ Iteration      │ ◄── barrier join per iteration,
//! │ engine         │     L2 step-norm convergence test
//! └───────┬────────┘
//!         │
//! ┌───────▼────────┐
//! │ RootsResult    │  roots + iterations + last step norm
//! └────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use polyroot_rs::polynomial::Polynomial;
//! use polyroot_rs::solver::{solve, Method, SolverConfiguration};
//!
//! // x^3 - 1
//! let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0])?;
//!
//! let result = solve(&poly, Method::AberthEhrlich, &SolverConfiguration::default())?;
//!
//! println!("{} roots in {} iterations", result.len(), result.iterations);
//! assert!(result.is_converged());
//! # Ok::<(), String>(())
//! ```
//!
//! # Error Handling
//!
//! All solver entry points return `Result<RootsResult, String>`:
//! - Invalid configuration (non-positive epsilon, zero cap) is an error
//! - Non-convergence is NOT an error: the result reports
//!   `Termination::Exhausted` with full diagnostics
//! - Numerical degeneracy (coinciding estimates dividing by zero) flows
//!   through as non-finite roots, detectable via
//!   `RootsResult::all_finite()`

// =================================================================================================
// Module Declarations
// =================================================================================================
mod engine;
mod initial;
mod methods;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand the per-root updates to Rayon is an execution
// concern, not a method concern, so it lives here rather than in the
// engine or the individual methods.
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex in
// every sweep.  Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default polynomial degree above which the iteration engine switches
/// to parallel per-root updates.
///
/// The crossover sits at degree 32.  Each update task already does O(n)
/// work (a Horner pass plus a pairwise sum over the other estimates), so
/// the dispatch overhead amortizes at a much lower count than it would
/// for element-wise arithmetic.
const DEFAULT_PARALLEL_THRESHOLD: usize = 32;

/// Runtime-configurable parallel-execution threshold.
///
/// Read via [`parallel_threshold()`], written via [`set_parallel_threshold()`].
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The iteration engine updates roots sequentially when the degree is
/// below this value, and fans out one Rayon task per root when it is at
/// or above it — but only when the crate is compiled with the `parallel`
/// feature.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.  A zero threshold would force parallel
/// dispatch even for a degree-1 solve, which is never the intended
/// behaviour.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64);
/// assert_eq!(parallel_threshold(), 64);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises threshold-mutating tests; the threshold is process-global
/// and the test harness runs threads in parallel.
#[cfg(test)]
static THRESHOLD_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and
/// restores it on drop.
///
/// Only compiled in test builds.  Prevents one test from leaking a
/// modified threshold value into the next, and holds
/// [`THRESHOLD_TEST_LOCK`] for its lifetime so concurrent test threads
/// never observe each other's values.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }

    /// Threshold value that was in effect when the guard was taken.
    pub(crate) fn saved(&self) -> usize {
        self.previous
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring to any value never
        // panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    Method,
    RootSolver,
    RootsResult,
    SolverConfiguration,
    Termination,
    DEFAULT_EPSILON,
    DEFAULT_MAX_ITERATIONS,
};

pub use initial::initial_roots;

pub use methods::{AberthEhrlichSolver, DurandKernerSolver};

// =================================================================================================
// Solver Facade
// =================================================================================================

use crate::polynomial::Polynomial;

/// Find all complex roots of `poly` with the selected method
///
/// Places the initial guesses, runs the iteration engine to convergence
/// or to the iteration cap, and returns the root vector with its
/// diagnostics. Progress is observable through the returned iteration
/// count and final step norm — the core never prints.
///
/// # Example
///
/// ```rust
/// use polyroot_rs::polynomial::Polynomial;
/// use polyroot_rs::solver::{solve, Method, SolverConfiguration};
///
/// // (x - 2)(x + 3)(x - 5)(x + 7)(x - 11)
/// let poly = Polynomial::from_coefficients(
///     vec![-2310.0, 727.0, 382.0, -72.0, -8.0, 1.0],
/// )?;
///
/// let durand = solve(&poly, Method::DurandKerner, &SolverConfiguration::default())?;
/// let aberth = solve(&poly, Method::AberthEhrlich, &SolverConfiguration::default())?;
///
/// // Same root set, typically far fewer Aberth-Ehrlich iterations
/// assert!(durand.is_converged());
/// assert!(aberth.is_converged());
/// # Ok::<(), String>(())
/// ```
pub fn solve(
    poly: &Polynomial,
    method: Method,
    config: &SolverConfiguration,
) -> Result<RootsResult, String> {
    match method {
        Method::DurandKerner => DurandKernerSolver::new().solve(poly, config),
        Method::AberthEhrlich => AberthEhrlichSolver::new().solve(poly, config),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Threshold Tests ======

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 32);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let guard = ThresholdGuard::save(42);
        let before = guard.saved();
        assert_eq!(parallel_threshold(), 42);
        drop(guard);

        // Reacquire to read the restored value without racing other
        // threshold tests.
        let reread = ThresholdGuard::save(99);
        assert_eq!(reread.saved(), before);
    }

    // ====== Facade Tests ======

    #[test]
    fn test_facade_dispatches_durand_kerner() {
        let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
        let result = solve(&poly, Method::DurandKerner, &SolverConfiguration::default()).unwrap();

        assert_eq!(result.get_metadata("solver"), Some("Durand-Kerner"));
        assert!(result.is_converged());
    }

    #[test]
    fn test_facade_dispatches_aberth_ehrlich() {
        let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
        let result = solve(&poly, Method::AberthEhrlich, &SolverConfiguration::default()).unwrap();

        assert_eq!(result.get_metadata("solver"), Some("Aberth-Ehrlich"));
        assert!(result.is_converged());
    }

    #[test]
    fn test_facade_propagates_configuration_errors() {
        let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
        let bad = SolverConfiguration::new(-1.0, 100);

        assert!(solve(&poly, Method::DurandKerner, &bad).is_err());
        assert!(solve(&poly, Method::AberthEhrlich, &bad).is_err());
    }
}
