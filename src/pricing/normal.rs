//! Standard normal distribution functions.
//!
//! The cumulative distribution uses the Abramowitz and Stegun rational
//! approximation to the error function (formula 7.1.26). Its maximum absolute
//! error is [`ERF_MAX_ABS_ERROR`]; any price tolerance used to invert the
//! model must stay coarser than that bound.

use std::f64::consts::{PI, SQRT_2};

/// Maximum absolute error of [`NormalDistribution::erf`].
pub const ERF_MAX_ABS_ERROR: f64 = 1.5e-7;

/// Abramowitz and Stegun 7.1.26 coefficient a1.
pub const ERF_A1: f64 = 0.254829592;
/// Abramowitz and Stegun 7.1.26 coefficient a2.
pub const ERF_A2: f64 = -0.284496736;
/// Abramowitz and Stegun 7.1.26 coefficient a3.
pub const ERF_A3: f64 = 1.421413741;
/// Abramowitz and Stegun 7.1.26 coefficient a4.
pub const ERF_A4: f64 = -1.453152027;
/// Abramowitz and Stegun 7.1.26 coefficient a5.
pub const ERF_A5: f64 = 1.061405429;
/// Abramowitz and Stegun 7.1.26 coefficient p.
pub const ERF_P: f64 = 0.3275911;

/// Standard normal distribution N(0, 1).
pub struct NormalDistribution;

impl NormalDistribution {
    /// Approximation of the error function.
    ///
    /// Odd by construction: `erf(-x) == -erf(x)` exactly, so
    /// `cumulative(x) + cumulative(-x)` sums to one up to rounding.
    #[must_use]
    pub fn erf(x: f64) -> f64 {
        let sign = if x < 0.0 { -1.0 } else { 1.0 };
        let x = x.abs();

        let t = 1.0 / (1.0 + ERF_P * x);
        let poly = ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t;

        sign * (1.0 - poly * (-x * x).exp())
    }

    /// Probability density at `x`: `exp(-x²/2) / √(2π)`.
    #[must_use]
    pub fn density(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

    /// Cumulative probability P(Z ≤ x).
    #[must_use]
    pub fn cumulative(x: f64) -> f64 {
        0.5 * (1.0 + Self::erf(x / SQRT_2))
    }
}
