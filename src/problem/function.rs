//! Root-finding problem defined by a pair of closures
use super::Problem;

/// A root-finding problem wrapping closures for the function and its derivative
pub struct FunctionProblem<F, D> {
    f: F,
    df: D,
}

impl<F, D> FunctionProblem<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    /// Creates a problem from the function `f` and its derivative `df`.
    pub fn new(f: F, df: D) -> FunctionProblem<F, D> {
        FunctionProblem { f, df }
    }
}

impl<F, D> Problem for FunctionProblem<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}
