//! Method comparison driver
//!
//! Runs both simultaneous-iteration methods over a fixed set of example
//! polynomials and prints roots, iteration counts, final step norms and
//! wall-clock timings. This is the reporting layer the core library
//! deliberately does not contain: the solvers expose diagnostics as
//! return values, and this driver turns them into output.
//!
//! ```bash
//! cargo run --release --example compare
//! ```

use polyroot_rs::polynomial::Polynomial;
use polyroot_rs::solver::{solve, Method, SolverConfiguration, DEFAULT_EPSILON};
use std::time::Instant;

/// Run one method and report its result
fn report(poly: &Polynomial, method: Method, config: &SolverConfiguration) {
    let start = Instant::now();
    let result = match solve(poly, method, config) {
        Ok(result) => result,
        Err(message) => {
            eprintln!("{}: {}", method, message);
            return;
        }
    };
    let elapsed = start.elapsed();

    println!("{}", method);
    for root in result.roots.iter() {
        println!("  {:.12}", root);
    }
    println!("  {} iterations", result.iterations);
    println!("  {:e} last step", result.last_step_norm);
    if !result.is_converged() {
        println!("  (iteration cap reached before convergence)");
    }
    if !result.all_finite() {
        println!("  (non-finite estimates: coinciding roots hit a zero denominator)");
    }
    println!("  {:.3?} elapsed", elapsed);
}

/// Run both methods on one polynomial
fn compare(coefficients: Vec<f64>, config: &SolverConfiguration) -> Result<(), String> {
    let poly = Polynomial::from_coefficients(coefficients)?;

    println!("p(x) = {}", poly);
    report(&poly, Method::DurandKerner, config);
    report(&poly, Method::AberthEhrlich, config);
    println!();

    Ok(())
}

fn main() -> Result<(), String> {
    let full_precision = SolverConfiguration::default();

    // Repeated roots stall the step norm at the evaluation noise floor,
    // so those runs get a bounded cap and report Exhausted instead of
    // grinding against the default 1e8.
    let bounded = SolverConfiguration::new(DEFAULT_EPSILON, 1_000_000);

    // x^3 - 1
    compare(vec![-1.0, 0.0, 0.0, 1.0], &full_precision)?;

    // x^8 + 15x^4 - 16
    compare(
        vec![-16.0, 0.0, 0.0, 0.0, 15.0, 0.0, 0.0, 0.0, 1.0],
        &full_precision,
    )?;

    // (x-2)(x+3)(x-5)(x+7)(x-11)
    compare(
        vec![-2310.0, 727.0, 382.0, -72.0, -8.0, 1.0],
        &full_precision,
    )?;

    // (x-1)(x-3)(x-2)^2
    compare(vec![12.0, -28.0, 23.0, -8.0, 1.0], &bounded)?;

    // (x-2)^4
    compare(vec![16.0, -32.0, 24.0, -8.0, 1.0], &bounded)?;

    Ok(())
}
