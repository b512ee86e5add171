use crate::problem::Problem;
use crate::Status;

/// Evaluates the function at the estimate contained in a [`Status`].
///
/// A value close to zero confirms that the estimate is a root of the
/// problem rather than the leftover of a stalled or capped iteration.
pub fn residual(problem: &dyn Problem, status: &Status) -> f64 {
    problem.eval(status.x)
}
