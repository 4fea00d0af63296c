//! Commonly used types and functions.
//!
//! ```
//! use greeks_rs::prelude::*;
//! ```

pub use crate::api::{Request, Response, handle, handle_json};
pub use crate::pricing::{
    BlackScholes, GreekProfile, ImpliedVolRequest, ImpliedVolResult, MarketParameters,
    NormalDistribution, OptionGreeks, OptionType, PricingError, PricingResult, ProfilePoint,
    SolverConfig, solve, solve_with,
};
