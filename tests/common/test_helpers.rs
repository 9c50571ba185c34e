//! Helper functions for integration tests

use nalgebra::DVector;
use num_complex::Complex;

/// Assert that a found root vector matches an expected multiset
///
/// Greedy nearest-neighbour pairing: each expected root claims the
/// closest unclaimed found root. Order-independent, multiplicity-aware.
pub fn assert_roots_match(
    found: &DVector<Complex<f64>>,
    expected: &[Complex<f64>],
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        found.len(),
        expected.len(),
        "{}: expected {} roots, found {}",
        message,
        expected.len(),
        found.len()
    );

    let mut claimed = vec![false; found.len()];

    for want in expected {
        let mut best: Option<(usize, f64)> = None;

        for (i, got) in found.iter().enumerate() {
            if claimed[i] {
                continue;
            }
            let distance = (*got - *want).norm();
            if best.is_none() || distance < best.unwrap().1 {
                best = Some((i, distance));
            }
        }

        let (index, distance) = best.expect("more expected roots than found roots");
        assert!(
            distance < tolerance,
            "{}: no unclaimed root within {} of {} (closest was {} away)",
            message,
            tolerance,
            want,
            distance
        );
        claimed[index] = true;
    }
}

/// Relative error |a - b| / max(|b|, 1)
pub fn relative_error(a: f64, b: f64) -> f64 {
    (a - b).abs() / b.abs().max(1.0)
}
