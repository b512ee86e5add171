/// Parameters of the Newton-Raphson method
#[derive(Debug)]
pub struct Params {
    /// Termination tolerance on the distance of successive estimates
    pub tol: f64,
    /// Threshold below which the derivative is treated as vanishing
    pub dtol: f64,
    /// Maximum number of steps (the bound is inclusive, so up to `max_steps + 1` updates are conducted)
    pub max_steps: usize,
    /// Frequency of logging (`0` for no logging)
    pub verbose: usize,
    /// Time limit (in seconds)
    pub time_limit: f64,
}

impl Params {
    const DEFAULT_TOL: f64 = 1e-8;
    const DEFAULT_DTOL: f64 = 1e-12;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            tol: Self::DEFAULT_TOL,
            dtol: Self::DEFAULT_DTOL,
            max_steps: usize::MAX,
            verbose: 0,
            time_limit: f64::INFINITY,
        }
    }

    /// Sets the termination tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the vanishing-derivative threshold.
    pub fn with_dtol(mut self, dtol: f64) -> Self {
        self.dtol = dtol;
        self
    }

    /// Sets the maximum number of steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Sets the logging frequency.
    pub fn with_verbose(mut self, verbose: usize) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the time limit.
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }
}
