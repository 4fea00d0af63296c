//! Greeks evaluated across a range of spot prices.
//!
//! Produces the series a sensitivity chart plots: call delta, gamma, vega
//! and call theta at evenly spaced spot prices around the current spot.

use super::black_scholes::BlackScholes;
use super::error::PricingError;
use super::types::MarketParameters;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Number of spot prices sampled by [`GreekProfile::compute`].
pub const DEFAULT_PROFILE_POINTS: usize = 80;
/// Lowest sampled spot as a fraction of the current spot.
pub const DEFAULT_LOW_FACTOR: f64 = 0.5;
/// Highest sampled spot as a fraction of the current spot.
pub const DEFAULT_HIGH_FACTOR: f64 = 1.5;

/// Greeks at a single spot price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    /// Spot price the Greeks were evaluated at.
    pub spot: f64,
    /// Call delta.
    pub delta: f64,
    /// Gamma.
    pub gamma: f64,
    /// Vega.
    pub vega: f64,
    /// Call theta per year.
    pub theta: f64,
}

/// Greek profile calculator.
pub struct GreekProfile;

impl GreekProfile {
    /// Evaluates `points` spot prices over `[0.5·S, 1.5·S]`, ends included.
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] if `points < 2`, and any error the
    /// pricing engine reports for `params`.
    pub fn compute(
        params: &MarketParameters,
        points: usize,
    ) -> Result<Vec<ProfilePoint>, PricingError> {
        Self::compute_range(params, DEFAULT_LOW_FACTOR, DEFAULT_HIGH_FACTOR, points)
    }

    /// Evaluates `points` spot prices over `[low_factor·S, high_factor·S]`.
    ///
    /// # Errors
    /// [`PricingError::InvalidParameter`] if `points < 2` or the factors are
    /// not finite with `0 < low_factor < high_factor`, and any error the
    /// pricing engine reports.
    pub fn compute_range(
        params: &MarketParameters,
        low_factor: f64,
        high_factor: f64,
        points: usize,
    ) -> Result<Vec<ProfilePoint>, PricingError> {
        if points < 2 {
            return Err(PricingError::invalid_parameter(
                "points",
                points as f64,
                "must be at least 2",
            ));
        }
        if !low_factor.is_finite() || low_factor <= 0.0 {
            return Err(PricingError::invalid_parameter(
                "low_factor",
                low_factor,
                "must be finite and positive",
            ));
        }
        if !high_factor.is_finite() || high_factor <= low_factor {
            return Err(PricingError::invalid_parameter(
                "high_factor",
                high_factor,
                "must be finite and above low_factor",
            ));
        }
        params.validate()?;

        let step = (high_factor - low_factor) / (points - 1) as f64;
        trace!(
            "greek profile: {points} points over [{:.4}, {:.4}]",
            params.spot * low_factor,
            params.spot * high_factor
        );

        (0..points)
            .map(|i| {
                let spot = params.spot * (low_factor + i as f64 * step);
                let result = BlackScholes::price(&params.with_spot(spot))?;
                Ok(ProfilePoint {
                    spot,
                    delta: result.delta_call,
                    gamma: result.gamma,
                    vega: result.vega,
                    theta: result.theta_call,
                })
            })
            .collect()
    }
}
