//! Root-finding problem defined by a dense polynomial
use super::Problem;

/// A polynomial with coefficients stored in ascending order of degree
///
/// `Polynomial::new(vec![-3.0, 0.0, 1.0])` represents `x² - 3`. Evaluation
/// uses Horner's rule; the derivative is evaluated from the same
/// coefficients.
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from its coefficients (ascending order of degree).
    pub fn new(coeffs: Vec<f64>) -> Polynomial {
        Polynomial { coeffs }
    }

    /// Returns the degree of the polynomial (`0` for a constant).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }
}

impl Problem for Polynomial {
    fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (k, &c)| acc * x + k as f64 * c)
    }
}
