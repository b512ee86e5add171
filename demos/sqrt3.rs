//! Approximates √3 as the positive root of x² - 3.

use runewt::newton::{self, Params};
use runewt::problem::FunctionProblem;

fn main() {
    let root = runewt::find_root(|x| x * x - 3.0, |x| 2.0 * x, 1.0, 1e-15, 100);
    println!("Result is: {:.15e}", root);

    // the same solve through the status-reporting interface
    let problem = FunctionProblem::new(|x| x * x - 3.0, |x| 2.0 * x);
    let params = Params::new()
        .with_tol(1e-15)
        .with_max_steps(100)
        .with_verbose(1);
    let status = newton::solve(&problem, 1.0, &params, None);
    println!("{:?} after {} steps", status.code, status.steps);
}
