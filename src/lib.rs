//! polyroot-rs: Simultaneous Polynomial Root Finding
//!
//! Finds all complex roots of a univariate real-coefficient polynomial
//! with two competing simultaneous-iteration methods, Durand-Kerner and
//! Aberth-Ehrlich.
//!
//! # Architecture
//!
//! polyroot-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Method**
//!    - The polynomial defines the equations (what to solve)
//!    - The solvers provide the iteration (how to solve)
//!
//! 2. **Interchangeable Strategies**
//!    - Both methods sit behind one stable `RootSolver` trait
//!    - One shared fork-join iteration engine, two update rules
//!    - Identical inputs, directly comparable diagnostics
//!
//! # Quick Start
//!
//! ```rust
//! use polyroot_rs::polynomial::Polynomial;
//! use polyroot_rs::solver::{solve, Method, SolverConfiguration};
//!
//! // 1. Describe the problem: x^3 - 1, ascending coefficient order
//! let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0])?;
//!
//! // 2. Pick the stopping policy (defaults: epsilon 1e-14, cap 1e8)
//! let config = SolverConfiguration::default();
//!
//! // 3. Run a method
//! let result = solve(&poly, Method::AberthEhrlich, &config)?;
//!
//! // 4. Inspect roots and diagnostics
//! println!("{} roots in {} iterations", result.len(), result.iterations);
//! println!("final step norm: {:.3e}", result.last_step_norm);
//! assert!(result.is_converged());
//! # Ok::<(), String>(())
//! ```
//!
//! # Parallelism
//!
//! With the `parallel` feature (on by default) each iteration fans the
//! per-root updates out over Rayon and joins them before the convergence
//! test. Every update reads only the frozen previous root vector and
//! writes only its own slot, so the fan-out needs no locks. The
//! sequential/parallel crossover is tunable at runtime via
//! [`solver::set_parallel_threshold`].
//!
//! # Modules
//!
//! - [`polynomial`]: polynomial representation and evaluation (equations)
//! - [`solver`]: simultaneous-iteration methods (numerics)

// Core modules
pub mod polynomial;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use polyroot_rs::prelude::*;
    //! ```
    pub use crate::polynomial::Polynomial;
    pub use crate::solver::{solve,
                            AberthEhrlichSolver,
                            DurandKernerSolver,
                            Method,
                            RootSolver,
                            RootsResult,
                            SolverConfiguration,
                            Termination};
}
