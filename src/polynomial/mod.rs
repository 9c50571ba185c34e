//! Polynomial representation and evaluation
//!
//! This module provides the problem side of the crate: a validated dense
//! polynomial over real coefficients, together with the evaluation
//! primitives the root finders consume.
//!
//! # Core Concepts
//!
//! - **Polynomial**: dense coefficient vector, index = power of x
//! - **Horner evaluation**: O(n) nested multiplication, no explicit powers
//! - **Horner-Ruffini evaluation**: one O(n) pass producing both p(x) and
//!   the companion value q(x) whose ratio p/q is the Newton step
//!
//! # Architecture
//!
//! The polynomial is **separate from the numerical solvers**:
//! - The polynomial provides the **equations** (what to solve)
//! - The solver provides the **method** to find the roots (how to solve)
//!
//! This separation allows the same polynomial to be handed to different
//! methods (Durand-Kerner, Aberth-Ehrlich) and the results compared.
//!
//! # Example
//!
//! ```rust
//! use polyroot_rs::polynomial::Polynomial;
//! use num_complex::Complex;
//!
//! // p(x) = x^3 - 1, coefficients in ascending power order
//! let poly = Polynomial::from_coefficients(vec![-1.0, 0.0, 0.0, 1.0]).unwrap();
//!
//! assert_eq!(poly.degree(), 3);
//! let p = poly.evaluate(Complex::new(1.0, 0.0));
//! assert!(p.norm() < 1e-12);
//! ```

// module declaration
pub mod dense;

// re-export commonly used types for convenience
pub use dense::Polynomial;
