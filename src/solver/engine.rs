//! Fork-join iteration engine
//!
//! Both methods share the same control loop; only the per-root update
//! rule differs. Each iteration:
//!
//! 1. Freeze the current root vector into `previous`
//! 2. Dispatch one update task per root index — every task reads only
//!    the frozen `previous` vector and writes only its own slot of
//!    `current`
//! 3. Join all tasks (the barrier), then compute the L2 norm of
//!    `current - previous`
//!
//! Iterations are strictly sequential at the barrier boundary; updates
//! within one iteration are unordered with respect to each other. The
//! index partition of `current` is what makes the parallel phase
//! race-free without locking: under the `parallel` feature the slot
//! split is literally Rayon's mutable slice split.
//!
//! # Termination
//!
//! The loop always runs at least one sweep, so the first convergence
//! check compares two genuine iterates. It stops when the step norm
//! drops to epsilon (Converged) or the iteration cap is reached
//! (Exhausted). A NaN step norm — the documented zero-denominator
//! degeneracy — fails the `norm > epsilon` test and exits the loop the
//! same way; the non-finite norm stays visible in the result.

use crate::polynomial::Polynomial;
use crate::solver::traits::{RootsResult, SolverConfiguration, Termination};
use nalgebra::DVector;
use num_complex::Complex;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Update rule seam
// =================================================================================================

/// Per-root update strategy
///
/// Given the frozen previous root vector, compute the next estimate for
/// one index. Implementations must not read anything that mutates during
/// an iteration — `previous` is the only root state they see.
///
/// `Sync` is required so the same rule instance can be shared across the
/// parallel update tasks.
pub(crate) trait UpdateRule: Sync {
    /// Next estimate for `previous[index]`
    fn next_estimate(
        &self,
        poly: &Polynomial,
        previous: &DVector<Complex<f64>>,
        index: usize,
    ) -> Complex<f64>;
}

// =================================================================================================
// Iteration loop
// =================================================================================================

/// Run the iteration engine from `initial` to a terminal state
///
/// Owns the root vector storage for the duration of the solve; nothing
/// is shared across concurrent solves. Assumes `config` has already been
/// validated by the calling method.
pub(crate) fn run<R: UpdateRule>(
    poly: &Polynomial,
    rule: &R,
    initial: DVector<Complex<f64>>,
    config: &SolverConfiguration,
) -> RootsResult {
    let n = initial.len();
    let mut current = initial;
    let mut previous = DVector::from_element(n, Complex::new(0.0, 0.0));

    let mut iterations = 0;
    // Placeholder past any epsilon: the first check always iterates.
    let mut norm = f64::INFINITY;

    while norm > config.epsilon && iterations < config.max_iterations {
        previous.copy_from(&current);

        sweep(poly, rule, &previous, &mut current);

        norm = (&current - &previous).norm();
        iterations += 1;
    }

    let termination = if norm <= config.epsilon {
        Termination::Converged
    } else {
        Termination::Exhausted
    };

    RootsResult::new(current, iterations, norm, termination)
}

/// One synchronized sweep: update every slot of `current` from `previous`
///
/// The parallel dispatch mirrors the crate-wide threshold policy: below
/// the configured degree the per-root tasks are too small to amortize
/// Rayon's dispatch overhead, so the sweep stays sequential.
fn sweep<R: UpdateRule>(
    poly: &Polynomial,
    rule: &R,
    previous: &DVector<Complex<f64>>,
    current: &mut DVector<Complex<f64>>,
) {
    let n = previous.len();

    if n >= crate::solver::parallel_threshold() {
        #[cfg(feature = "parallel")]
        current
            .as_mut_slice()
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, slot)| *slot = rule.next_estimate(poly, previous, index));
        #[cfg(not(feature = "parallel"))]
        for index in 0..n {
            current[index] = rule.next_estimate(poly, previous, index);
        }
    } else {
        for index in 0..n {
            current[index] = rule.next_estimate(poly, previous, index);
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
