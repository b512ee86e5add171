use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Possible outcomes of a root-finding routine
pub enum StatusCode {
    /// Iteration not started
    Initialized,
    /// Root found (up to defined tolerance)
    Converged,
    /// Derivative numerically indistinguishable from zero
    Stalled,
    /// Maximum number of steps reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Stopped by the callback function
    Callback,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing information about the current estimate and state of the root-finding routine
pub struct Status {
    /// Current estimate of the root
    pub x: f64,
    /// Function value at the most recently evaluated point
    pub fx: f64,
    /// Signed size of the most recent Newton update
    pub dx: f64,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Status {
    /// Create a [`Status`] struct seeded with the initial guess `x0`
    pub fn new(x0: f64) -> Status {
        Status {
            x: x0,
            fx: f64::INFINITY,
            dx: f64::INFINITY,
            code: StatusCode::Initialized,
            steps: 0,
            time: 0.0,
        }
    }
}
