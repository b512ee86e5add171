use super::params::Params;
use crate::problem::{FunctionProblem, Problem};
use crate::status::{Status, StatusCode};
use crate::time::Stopwatch;

/// Uses the Newton-Raphson method to solve the given root-finding problem starting from `initial_guess`.
pub fn solve(
    problem: &dyn Problem,
    initial_guess: f64,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let status = Status::new(initial_guess);
    solve_with_status(status, problem, params, callback)
}

/// Uses the Newton-Raphson method to solve the given root-finding problem starting from a particular [`Status`].
pub fn solve_with_status(
    status: Status,
    problem: &dyn Problem,
    params: &Params,
    callback: Option<&dyn Fn(&Status) -> bool>,
) -> Status {
    let mut status = status;
    let watch = Stopwatch::start();
    let mut step: usize = 0;
    let mut stop = false;

    if params.verbose > 0 {
        println!(
            "{:>10} {:>10} {:>14} {:>14} {:>14}",
            "step", "time", "x", "f(x)", "dx",
        )
    }

    loop {
        // update steps and time
        status.steps = step;
        let elapsed = watch.elapsed();
        status.time = elapsed;

        // handle step limit (inclusive bound)
        if step > params.max_steps {
            status.code = StatusCode::MaxSteps;
            stop = true;
        }

        // handle time limit
        if !stop && params.time_limit > 0.0 && elapsed >= params.time_limit {
            status.code = StatusCode::TimeLimit;
            stop = true;
        }

        // handle callback
        if let Some(callback_fn) = callback {
            if !stop && callback_fn(&status) {
                status.code = StatusCode::Callback;
                stop = true;
            }
        };

        if !stop {
            // evaluate the function and its slope at the current estimate
            let x = status.x;
            let fx = problem.eval(x);
            let dfx = problem.derivative(x);
            status.fx = fx;

            if dfx.abs() < params.dtol {
                // no usable update direction: keep the estimate as it is
                status.code = StatusCode::Stalled;
                stop = true;
            } else {
                let dx = -fx / dfx;
                status.x = x + dx;
                status.dx = dx;

                // check for convergence
                if problem.is_converged(&status, params.tol) {
                    status.code = StatusCode::Converged;
                    stop = true;
                }
            }
        }

        // handle progress output
        if params.verbose > 0 && (step % params.verbose == 0 || stop) {
            println!(
                "{:10} {:10.2} {:14.6e} {:14.6e} {:14.6e}",
                step, elapsed, status.x, status.fx, status.dx,
            )
        }

        // terminate
        if stop {
            break;
        }
        step += 1;
    }
    status
}

/// Finds an approximate root of `f` using the Newton-Raphson method.
///
/// `df` must evaluate the derivative of `f`. The call always returns a
/// value: if the iteration stalls on a vanishing derivative or exhausts
/// `max_steps` without converging, the last computed estimate is returned
/// as is. Use [`solve`] to obtain a [`Status`] that tells these exits
/// apart.
pub fn find_root(
    f: impl Fn(f64) -> f64,
    df: impl Fn(f64) -> f64,
    initial_guess: f64,
    tol: f64,
    max_steps: usize,
) -> f64 {
    let problem = FunctionProblem::new(f, df);
    let params = Params::new().with_tol(tol).with_max_steps(max_steps);
    solve(&problem, initial_guess, &params, None).x
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use test_case::test_case;

    const SQRT3: f64 = 1.732_050_807_568_877_2;

    #[test]
    fn sqrt3() {
        let root = find_root(|x| x * x - 3.0, |x| 2.0 * x, 1.0, 1e-15, 100);
        assert!((root - SQRT3).abs() < 1e-14);
    }

    #[test]
    fn sqrt3_status() {
        let problem = FunctionProblem::new(|x| x * x - 3.0, |x| 2.0 * x);
        let params = Params::new().with_tol(1e-15).with_max_steps(100);
        let status = solve(&problem, 1.0, &params, None);
        assert!(matches!(status.code, StatusCode::Converged));
        assert!((status.x - SQRT3).abs() < 1e-14);
        assert!(status.steps <= 100);
    }

    #[test]
    fn linear_in_one_update() {
        let problem = FunctionProblem::new(|x| x - 5.0, |_| 1.0);
        let params = Params::new().with_tol(1e-10).with_max_steps(10);
        let status = solve(&problem, 0.0, &params, None);
        assert_eq!(status.x, 5.0);
        assert!(matches!(status.code, StatusCode::Converged));
        assert_eq!(status.steps, 1);
    }

    #[test]
    fn zero_derivative_stalls() {
        let problem = FunctionProblem::new(|x| x * x - 3.0, |_| 0.0);
        let status = solve(&problem, 1.0, &Params::new(), None);
        assert!(matches!(status.code, StatusCode::Stalled));
        assert_eq!(status.x, 1.0);
        assert_eq!(status.steps, 0);
    }

    #[test]
    fn step_limit_is_inclusive() {
        let evals = Cell::new(0);
        let f = |x: f64| {
            evals.set(evals.get() + 1);
            x * x - 2.0
        };
        // a tolerance of zero cannot be met, so the cap decides after a
        // single update
        let root = find_root(f, |x| 2.0 * x, 1.0, 0.0, 0);
        assert_eq!(root, 1.5);
        assert_eq!(evals.get(), 1);
    }

    #[test]
    fn step_limit_reports_max_steps() {
        let problem = FunctionProblem::new(|x| x * x - 2.0, |x| 2.0 * x);
        let params = Params::new().with_tol(0.0).with_max_steps(3);
        let status = solve(&problem, 1.0, &params, None);
        assert!(matches!(status.code, StatusCode::MaxSteps));
        assert!((status.x - 2.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn idempotent_near_the_root() {
        let tol = 1e-12;
        let first = find_root(|x| x * x - 3.0, |x| 2.0 * x, 1.0, tol, 100);
        let second = find_root(|x| x * x - 3.0, |x| 2.0 * x, first, tol, 100);
        assert!((second - first).abs() <= tol);
    }

    #[test_case(1e-3)]
    #[test_case(1e-6)]
    #[test_case(1e-9)]
    #[test_case(1e-12)]
    fn tolerance_bounds_the_error(tol: f64) {
        let root = find_root(|x| x * x - 3.0, |x| 2.0 * x, 1.0, tol, 100);
        assert!((root - SQRT3).abs() <= tol);
    }

    #[test]
    fn callback_stops_the_iteration() {
        let problem = FunctionProblem::new(|x| x * x - 3.0, |x| 2.0 * x);
        let callback = |status: &Status| status.steps >= 2;
        let status = solve(&problem, 1.0, &Params::new(), Some(&callback));
        assert!(matches!(status.code, StatusCode::Callback));
        assert_eq!(status.steps, 2);
    }

    #[test]
    fn warm_start_resumes_from_a_status() {
        let problem = FunctionProblem::new(|x| x * x - 3.0, |x| 2.0 * x);
        let coarse = solve(&problem, 1.0, &Params::new().with_tol(1e-2), None);
        let params = Params::new().with_tol(1e-15);
        let refined = solve_with_status(coarse, &problem, &params, None);
        assert!(matches!(refined.code, StatusCode::Converged));
        assert!((refined.x - SQRT3).abs() < 1e-14);
    }

    #[test]
    fn non_finite_values_pass_through() {
        // the function is undefined left of 2, so the iterates turn NaN
        let problem =
            FunctionProblem::new(|x: f64| (x - 2.0).sqrt(), |x: f64| 0.5 / (x - 2.0).sqrt());
        let params = Params::new().with_max_steps(5);
        let status = solve(&problem, 0.0, &params, None);
        assert!(matches!(status.code, StatusCode::MaxSteps));
        assert!(status.x.is_nan());
    }
}
