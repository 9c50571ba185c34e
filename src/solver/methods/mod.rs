//! Simultaneous-iteration methods
//!
//! This module contains the concrete implementations of the
//! [`RootSolver`](crate::solver::RootSolver) trait.
//!
//! # Architecture
//!
//! The separation between the abstract solver interface
//! (`solver::traits`), the shared iteration loop (`solver::engine`) and
//! the concrete update rules here follows the Open-Closed Principle:
//! - **Open** for extension: a new method is one `UpdateRule` plus a
//!   `RootSolver` impl
//! - **Closed** for modification: the trait and the engine are stable
//!
//! # Available Methods
//!
//! - **[`DurandKernerSolver`]**: Weierstrass-style product correction
//!   - Convergence: linear
//!   - Cost: 1 Horner pass + pairwise product per root per iteration
//!   - Use: baseline, robustness comparisons
//!
//! - **[`AberthEhrlichSolver`]**: damped Newton with reciprocal correction
//!   - Convergence: superlinear
//!   - Cost: 1 Horner-Ruffini pass + reciprocal sum per root per iteration
//!   - Use: **fewer iterations on the same input**, the usual choice
//!
//! # Example
//!
//! ```rust
//! use polyroot_rs::polynomial::Polynomial;
//! use polyroot_rs::solver::{
//!     AberthEhrlichSolver, DurandKernerSolver, RootSolver, SolverConfiguration,
//! };
//!
//! let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
//! let config = SolverConfiguration::default();
//!
//! let durand = DurandKernerSolver::new().solve(&poly, &config)?;
//! let aberth = AberthEhrlichSolver::new().solve(&poly, &config)?;
//!
//! // Same root set, different iteration counts
//! assert_eq!(durand.len(), aberth.len());
//! # Ok::<(), String>(())
//! ```

pub mod aberth_ehrlich;
pub mod durand_kerner;

// Re-exports for convenience
pub use aberth_ehrlich::AberthEhrlichSolver;
pub use durand_kerner::DurandKernerSolver;
