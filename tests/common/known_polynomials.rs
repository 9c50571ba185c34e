//! Polynomials with known factorizations for testing
//!
//! Each fixture pairs a coefficient vector with the exact root multiset,
//! making it possible to validate solver output up to permutation and
//! numerical tolerance.

use num_complex::Complex;
use polyroot_rs::polynomial::Polynomial;

/// A polynomial together with its exact roots
pub struct KnownPolynomial {
    pub name: &'static str,
    pub coefficients: Vec<f64>,
    pub roots: Vec<Complex<f64>>,
    /// Tolerance the solvers can realistically deliver for this root
    /// set: tight for simple roots, loose where multiplicity limits the
    /// attainable accuracy.
    pub tolerance: f64,
}

impl KnownPolynomial {
    pub fn polynomial(&self) -> Polynomial {
        Polynomial::from_coefficients(self.coefficients.clone()).unwrap()
    }

    /// True when every root is simple (full 1e-14 convergence possible)
    pub fn has_simple_roots_only(&self) -> bool {
        self.tolerance < 1e-6
    }
}

/// x³ − 1: one real root, one conjugate pair
pub fn cube_roots_of_unity() -> KnownPolynomial {
    let half_sqrt3 = 3.0f64.sqrt() / 2.0;
    KnownPolynomial {
        name: "x^3 - 1",
        coefficients: vec![-1.0, 0.0, 0.0, 1.0],
        roots: vec![
            Complex::new(1.0, 0.0),
            Complex::new(-0.5, half_sqrt3),
            Complex::new(-0.5, -half_sqrt3),
        ],
        tolerance: 1e-8,
    }
}

/// x⁸ + 15x⁴ − 16 = (x⁴ − 1)(x⁴ + 16): real, imaginary and complex roots
pub fn octic_mixed() -> KnownPolynomial {
    // x^4 + 16 roots: magnitude 2 at the four diagonal angles, sqrt(2)(±1±i)
    let s = 2.0f64.sqrt();
    KnownPolynomial {
        name: "x^8 + 15x^4 - 16",
        coefficients: vec![-16.0, 0.0, 0.0, 0.0, 15.0, 0.0, 0.0, 0.0, 1.0],
        roots: vec![
            Complex::new(1.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(0.0, -1.0),
            Complex::new(s, s),
            Complex::new(s, -s),
            Complex::new(-s, s),
            Complex::new(-s, -s),
        ],
        tolerance: 1e-8,
    }
}

/// (x − 2)(x + 3)(x − 5)(x + 7)(x − 11): five distinct real roots
pub fn quintic_distinct() -> KnownPolynomial {
    KnownPolynomial {
        name: "(x-2)(x+3)(x-5)(x+7)(x-11)",
        coefficients: vec![-2310.0, 727.0, 382.0, -72.0, -8.0, 1.0],
        roots: vec![
            Complex::new(2.0, 0.0),
            Complex::new(-3.0, 0.0),
            Complex::new(5.0, 0.0),
            Complex::new(-7.0, 0.0),
            Complex::new(11.0, 0.0),
        ],
        tolerance: 1e-7,
    }
}

/// (x − 1)(x − 3)(x − 2)²: a double root among simple ones
pub fn quartic_double_root() -> KnownPolynomial {
    KnownPolynomial {
        name: "(x-1)(x-3)(x-2)^2",
        coefficients: vec![12.0, -28.0, 23.0, -8.0, 1.0],
        roots: vec![
            Complex::new(1.0, 0.0),
            Complex::new(3.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(2.0, 0.0),
        ],
        // The double root limits accuracy to about sqrt(evaluation noise)
        tolerance: 1e-2,
    }
}

/// (x − 2)⁴: quadruple root, the strongest degeneracy stress test
pub fn quartic_quadruple_root() -> KnownPolynomial {
    KnownPolynomial {
        name: "(x-2)^4",
        coefficients: vec![16.0, -32.0, 24.0, -8.0, 1.0],
        roots: vec![
            Complex::new(2.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(2.0, 0.0),
            Complex::new(2.0, 0.0),
        ],
        // Multiplicity 4: attainable accuracy is roughly noise^(1/4)
        tolerance: 5e-2,
    }
}

/// x − c: the degree-1 boundary case
pub fn linear(c: f64) -> KnownPolynomial {
    KnownPolynomial {
        name: "x - c",
        coefficients: vec![-c, 1.0],
        roots: vec![Complex::new(c, 0.0)],
        tolerance: 1e-10,
    }
}

/// The fixtures with simple roots only (full-precision convergence)
pub fn simple_root_fixtures() -> Vec<KnownPolynomial> {
    vec![cube_roots_of_unity(), octic_mixed(), quintic_distinct(), linear(4.0)]
}

/// Every fixture, including the repeated-root stress cases
pub fn all_fixtures() -> Vec<KnownPolynomial> {
    vec![
        cube_roots_of_unity(),
        octic_mixed(),
        quintic_distinct(),
        quartic_double_root(),
        quartic_quadruple_root(),
        linear(4.0),
    ]
}
