//! Readout math for the exponential-growth and logarithm playgrounds.
//!
//! `y = a·bˣ + k` and `y = a·log_b(x) + k`, plus the derived quantities
//! the pages report (percent change, doubling time, half life). Pure
//! functions of the slider parameters; the table helpers exist so the
//! table tab and the tests sample the same rows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from model evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("logarithm undefined for x = {0}; x must be positive")]
    LogDomain(f64),
}

/// x values shown in the exponential table tab.
pub const EXP_TABLE_X_VALUES: [f64; 10] =
    [-3.0, -2.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// x values shown in the logarithm table tab.
pub const LOG_TABLE_X_VALUES: [f64; 7] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];

/// `y = a·bˣ + k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentialModel {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

impl Default for ExponentialModel {
    fn default() -> Self {
        Self { a: 1.0, b: 2.0, k: 0.0 }
    }
}

impl ExponentialModel {
    pub fn evaluate(&self, x: f64) -> f64 {
        self.a * self.b.powf(x) + self.k
    }

    /// Per-step percentage change implied by the growth factor.
    pub fn percent_change(&self) -> f64 {
        (self.b - 1.0) * 100.0
    }

    /// Steps for the unshifted term to double. Only defined for growth
    /// (`b > 1`).
    pub fn doubling_time(&self) -> Option<f64> {
        if self.b <= 1.0 {
            return None;
        }
        Some(2.0_f64.ln() / self.b.ln())
    }

    /// Steps for the unshifted term to halve. Only defined for decay
    /// (`b < 1`).
    pub fn half_life(&self) -> Option<f64> {
        if self.b >= 1.0 {
            return None;
        }
        Some(0.5_f64.ln() / self.b.ln())
    }

    /// Sample `(x, y)` rows for a table.
    pub fn table(&self, xs: &[f64]) -> Vec<(f64, f64)> {
        xs.iter().map(|&x| (x, self.evaluate(x))).collect()
    }
}

/// `y = a·log_b(x) + k`, with the base nudged off the degenerate
/// `b = 1` (see [`clamp_log_base`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicModel {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

impl Default for LogarithmicModel {
    fn default() -> Self {
        Self { a: 1.0, b: 2.0, k: 0.0 }
    }
}

impl LogarithmicModel {
    /// Evaluate via change of base. The logarithm's domain is the one
    /// place in this crate where an operation can fail.
    pub fn evaluate(&self, x: f64) -> Result<f64, ModelError> {
        if x <= 0.0 {
            return Err(ModelError::LogDomain(x));
        }
        let base = clamp_log_base(self.b);
        Ok(self.a * (x.ln() / base.ln()) + self.k)
    }

    /// Sample `(x, y)` rows for a table. Fails on the first
    /// out-of-domain x.
    pub fn table(&self, xs: &[f64]) -> Result<Vec<(f64, f64)>, ModelError> {
        xs.iter()
            .map(|&x| self.evaluate(x).map(|y| (x, y)))
            .collect()
    }
}

/// A base of exactly 1 would put `ln(base)` at zero; the playground
/// nudges it to 1.05 instead of erroring.
pub fn clamp_log_base(value: f64) -> f64 {
    if value == 1.0 {
        1.05
    } else {
        value
    }
}
