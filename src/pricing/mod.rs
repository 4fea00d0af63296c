//! Black-Scholes pricing, Greeks and implied volatility for European options.
//!
//! # Overview
//!
//! The engine turns market inputs (spot, strike, time to expiry, rate and
//! volatility) into call and put prices plus delta, gamma, vega, theta and
//! rho, all from one evaluation. The solver runs the engine in reverse: given
//! an observed price it bisects the volatility until the model price matches.
//!
//! # Degenerate inputs
//!
//! A zero time to expiry or zero volatility makes d1 divide by zero. Instead
//! of returning NaN the engine reports [`PricingError::Domain`].
//!
//! # Implied volatility
//!
//! The search brackets volatility in `[0.001, 5.0]` and stops when the model
//! price is within `1e-6` of the market price. When no volatility in the
//! bracket fits, the outcome is [`ImpliedVolResult::Exhausted`], never a
//! best guess.
//!
//! # Example
//!
//! ```
//! use greeks_rs::pricing::{BlackScholes, ImpliedVolRequest, MarketParameters, solve};
//!
//! let params = MarketParameters::from_days(100.0, 100.0, 30.0, 0.05, 0.2);
//! let result = BlackScholes::price(&params)?;
//!
//! let request = ImpliedVolRequest::call(
//!     result.call_price,
//!     params.spot,
//!     params.strike,
//!     params.time_to_expiry,
//!     params.risk_free_rate,
//! );
//! let iv = solve(&request)?.into_result()?;
//! assert!((iv - 0.2).abs() < 1e-4);
//! # Ok::<(), greeks_rs::pricing::PricingError>(())
//! ```

mod black_scholes;
mod error;
mod normal;
mod profile;
mod solver;
mod types;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use normal::{
    ERF_A1, ERF_A2, ERF_A3, ERF_A4, ERF_A5, ERF_MAX_ABS_ERROR, ERF_P, NormalDistribution,
};
pub use profile::{
    DEFAULT_HIGH_FACTOR, DEFAULT_LOW_FACTOR, DEFAULT_PROFILE_POINTS, GreekProfile, ProfilePoint,
};
pub use solver::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_VOLATILITY, DEFAULT_MIN_VOLATILITY, DEFAULT_TOLERANCE,
    SolverConfig, solve, solve_with,
};
pub use types::{
    DAYS_PER_YEAR, ImpliedVolRequest, ImpliedVolResult, MarketParameters, OptionGreeks,
    OptionType, PricingResult,
};
