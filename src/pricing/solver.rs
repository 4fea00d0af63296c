//! Bisection solver for implied volatility.
//!
//! Finds the volatility that makes the Black-Scholes price equal the observed
//! market price. Bisection is used instead of Newton-Raphson: it cannot
//! overshoot or diverge where vega is flat, and at most
//! [`DEFAULT_MAX_ITERATIONS`] cheap model evaluations are needed.
//!
//! The search relies on the option price being strictly increasing in
//! volatility over the bracket, which holds for both calls and puts.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::normal::ERF_MAX_ABS_ERROR;
use super::types::{ImpliedVolRequest, ImpliedVolResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Lower end of the volatility bracket (0.1%).
pub const DEFAULT_MIN_VOLATILITY: f64 = 0.001;
/// Upper end of the volatility bracket (500%).
pub const DEFAULT_MAX_VOLATILITY: f64 = 5.0;
/// Absolute price difference accepted as a match.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// Model evaluations before the search is declared exhausted.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Lower volatility bound of the search bracket.
    pub min_volatility: f64,
    /// Upper volatility bound of the search bracket.
    pub max_volatility: f64,
    /// Convergence tolerance for the price difference.
    pub tolerance: f64,
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_volatility: DEFAULT_MIN_VOLATILITY,
            max_volatility: DEFAULT_MAX_VOLATILITY,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the volatility bracket.
    #[must_use]
    pub fn with_bounds(mut self, min_volatility: f64, max_volatility: f64) -> Self {
        self.min_volatility = min_volatility;
        self.max_volatility = max_volatility;
        self
    }

    /// Checks that the configuration describes a usable search.
    ///
    /// The tolerance must be coarser than the error of the normal CDF
    /// approximation, otherwise reachable prices could be reported as
    /// exhausted.
    pub fn validate(&self) -> Result<(), PricingError> {
        let invalid = |message: String| Err(PricingError::InvalidConfig { message });

        if !self.min_volatility.is_finite() || !self.max_volatility.is_finite() {
            return invalid(format!(
                "volatility bounds must be finite, got [{}, {}]",
                self.min_volatility, self.max_volatility
            ));
        }
        if self.min_volatility <= 0.0 {
            return invalid(format!(
                "lower volatility bound must be positive, got {}",
                self.min_volatility
            ));
        }
        if self.min_volatility >= self.max_volatility {
            return invalid(format!(
                "lower volatility bound {} must be below upper bound {}",
                self.min_volatility, self.max_volatility
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance <= ERF_MAX_ABS_ERROR {
            return invalid(format!(
                "tolerance must be finite and above {ERF_MAX_ABS_ERROR:e}, got {}",
                self.tolerance
            ));
        }
        if self.max_iterations == 0 {
            return invalid("max iterations must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Solves for implied volatility with the default configuration.
///
/// # Errors
/// - [`PricingError::InvalidParameter`] for a non-positive market price,
///   spot or strike, a negative time to expiry, or non-finite inputs
/// - [`PricingError::Domain`] for a zero time to expiry
///
/// Non-convergence is not an error here: it is returned as
/// [`ImpliedVolResult::Exhausted`].
///
/// # Example
/// ```
/// use greeks_rs::prelude::*;
///
/// let request = ImpliedVolRequest::call(2.4934, 100.0, 100.0, 30.0 / 365.0, 0.05);
/// let result = solve(&request).unwrap();
/// let iv = result.volatility().unwrap();
/// assert!((iv - 0.2).abs() < 1e-3);
/// ```
pub fn solve(request: &ImpliedVolRequest) -> Result<ImpliedVolResult, PricingError> {
    solve_with(request, &SolverConfig::default())
}

/// Solves for implied volatility by bisection with a custom configuration.
///
/// Each iteration prices the option at the bracket midpoint. A midpoint
/// whose model price lies within `tolerance` of the market price is
/// returned; otherwise the bracket half that still contains the market
/// price is kept. The returned volatility is always strictly inside
/// `[min_volatility, max_volatility]`.
///
/// # Errors
/// As [`solve`], plus [`PricingError::InvalidConfig`] for an unusable
/// configuration.
pub fn solve_with(
    request: &ImpliedVolRequest,
    config: &SolverConfig,
) -> Result<ImpliedVolResult, PricingError> {
    config.validate()?;
    request.validate()?;

    let mut low = config.min_volatility;
    let mut high = config.max_volatility;

    for iteration in 0..config.max_iterations {
        let mid = (low + high) / 2.0;
        let model_price =
            BlackScholes::price(&request.parameters_at(mid))?.price(request.option_type);
        let diff = model_price - request.market_price;
        trace!("bisection step {iteration}: vol={mid:.8} model={model_price:.8} diff={diff:.3e}");

        if diff.abs() < config.tolerance {
            debug!(
                "implied volatility {mid:.6} converged after {} iterations",
                iteration + 1
            );
            return Ok(ImpliedVolResult::Converged {
                volatility: mid,
                iterations: iteration + 1,
            });
        }

        if diff > 0.0 {
            high = mid;
        } else {
            low = mid;
        }
    }

    warn!(
        "implied volatility search exhausted after {} iterations for market price {} ({:?})",
        config.max_iterations, request.market_price, request.option_type
    );
    Ok(ImpliedVolResult::Exhausted {
        iterations: config.max_iterations,
    })
}
