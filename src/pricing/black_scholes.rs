//! Black-Scholes pricing model and Greeks calculation.
//!
//! Prices and Greeks for the call and the put are produced by a single
//! evaluation, so every field of a [`PricingResult`] is derived from the same
//! d1, d2 and normal-distribution terms.

use super::error::PricingError;
use super::normal::NormalDistribution;
use super::types::{MarketParameters, PricingResult};
use tracing::trace;

/// Black-Scholes pricing model implementation for European options.
pub struct BlackScholes;

impl BlackScholes {
    /// Calculates the d1 parameter of the Black-Scholes formula.
    ///
    /// d1 = [ln(S/K) + (r + σ²/2)T] / (σ√T)
    ///
    /// # Arguments
    /// - `spot`: Current underlying price (S)
    /// - `strike`: Option strike price (K)
    /// - `rate`: Risk-free interest rate (r)
    /// - `time`: Time to expiration in years (T)
    /// - `vol`: Volatility (σ)
    ///
    /// Not guarded: a zero `time` or `vol` yields a non-finite value.
    #[must_use]
    pub fn d1(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> f64 {
        let sqrt_time = time.sqrt();
        ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * sqrt_time)
    }

    /// Calculates the d2 parameter of the Black-Scholes formula.
    ///
    /// d2 = d1 - σ√T
    #[must_use]
    pub fn d2(d1: f64, vol: f64, time: f64) -> f64 {
        d1 - vol * time.sqrt()
    }

    /// Prices the call and the put and computes the full Greek set.
    ///
    /// For calls: C = S·N(d1) - K·e^(-rT)·N(d2)
    /// For puts:  P = K·e^(-rT)·N(-d2) - S·N(-d1)
    ///
    /// # Errors
    /// - [`PricingError::InvalidParameter`] for negative or non-finite inputs
    /// - [`PricingError::Domain`] for zero time to expiry or zero volatility,
    ///   and for inputs so extreme that a result would not be finite
    pub fn price(params: &MarketParameters) -> Result<PricingResult, PricingError> {
        params.validate()?;

        let MarketParameters {
            spot,
            strike,
            time_to_expiry: time,
            risk_free_rate: rate,
            volatility: vol,
        } = *params;

        let sqrt_time = time.sqrt();
        let d1 = Self::d1(spot, strike, rate, time, vol);
        let d2 = Self::d2(d1, vol, time);
        trace!("black-scholes d1={d1:.6} d2={d2:.6} for {params:?}");

        let nd1 = NormalDistribution::cumulative(d1);
        let nd2 = NormalDistribution::cumulative(d2);
        let n_minus_d1 = NormalDistribution::cumulative(-d1);
        let n_minus_d2 = NormalDistribution::cumulative(-d2);
        let pdf_d1 = NormalDistribution::density(d1);

        let discounted_strike = strike * (-rate * time).exp();
        // Time decay from the diffusion term, common to call and put.
        let decay = -(spot * pdf_d1 * vol) / (2.0 * sqrt_time);

        let result = PricingResult {
            call_price: spot * nd1 - discounted_strike * nd2,
            put_price: discounted_strike * n_minus_d2 - spot * n_minus_d1,
            delta_call: nd1,
            delta_put: nd1 - 1.0,
            gamma: pdf_d1 / (spot * vol * sqrt_time),
            vega: spot * pdf_d1 * sqrt_time,
            theta_call: decay - rate * discounted_strike * nd2,
            theta_put: decay + rate * discounted_strike * n_minus_d2,
            rho_call: time * discounted_strike * nd2,
            rho_put: -time * discounted_strike * n_minus_d2,
        };

        ensure_finite_result(&result)?;
        Ok(result)
    }
}

fn ensure_finite_result(result: &PricingResult) -> Result<(), PricingError> {
    let fields = [
        ("call price", result.call_price),
        ("put price", result.put_price),
        ("call delta", result.delta_call),
        ("put delta", result.delta_put),
        ("gamma", result.gamma),
        ("vega", result.vega),
        ("call theta", result.theta_call),
        ("put theta", result.theta_put),
        ("call rho", result.rho_call),
        ("put rho", result.rho_put),
    ];

    match fields.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(PricingError::domain(format!(
            "{name} evaluated to {value}"
        ))),
        None => Ok(()),
    }
}
