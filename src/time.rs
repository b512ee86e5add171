//! Elapsed-time measurement on native and wasm targets

/// Stopwatch measuring the runtime of a solver loop
pub struct Stopwatch {
    #[cfg(not(feature = "wasm"))]
    start: std::time::Instant,
    #[cfg(feature = "wasm")]
    start: f64,
}

impl Stopwatch {
    /// Starts a new stopwatch.
    #[cfg(not(feature = "wasm"))]
    pub fn start() -> Stopwatch {
        Stopwatch {
            start: std::time::Instant::now(),
        }
    }

    /// Starts a new stopwatch.
    #[cfg(feature = "wasm")]
    pub fn start() -> Stopwatch {
        Stopwatch { start: now_ms() }
    }

    /// Returns the elapsed time in seconds.
    #[cfg(not(feature = "wasm"))]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Returns the elapsed time in seconds.
    #[cfg(feature = "wasm")]
    pub fn elapsed(&self) -> f64 {
        (now_ms() - self.start) / 1000.0
    }
}

#[cfg(feature = "wasm")]
fn now_ms() -> f64 {
    web_sys::window()
        .expect("should have a Window")
        .performance()
        .expect("should have a Performance")
        .now()
}
