//! Value types for option pricing and implied volatility calculation.

use super::error::PricingError;
use serde::{Deserialize, Serialize};

/// Calendar days per year used to convert days to expiry into years.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Option type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (right to buy the underlying at strike price).
    Call,
    /// Put option (right to sell the underlying at strike price).
    Put,
}

/// Instrument and market inputs for one Black-Scholes evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Underlying spot price (S).
    pub spot: f64,
    /// Option strike price (K).
    pub strike: f64,
    /// Time to expiration in years (T), e.g. 30 days = 30.0 / 365.0.
    pub time_to_expiry: f64,
    /// Continuously compounded risk-free rate (r), e.g. 0.05 for 5%.
    pub risk_free_rate: f64,
    /// Annualized volatility (σ), e.g. 0.2 for 20%.
    pub volatility: f64,
}

impl MarketParameters {
    /// Creates new market parameters.
    ///
    /// # Arguments
    /// - `spot`: Underlying spot price
    /// - `strike`: Option strike price
    /// - `time_to_expiry`: Time to expiration in years
    /// - `risk_free_rate`: Risk-free interest rate (annualized)
    /// - `volatility`: Volatility (annualized)
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        }
    }

    /// Creates parameters with the expiry given in calendar days.
    #[must_use]
    pub fn from_days(
        spot: f64,
        strike: f64,
        days_to_expiry: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self::new(
            spot,
            strike,
            days_to_expiry / DAYS_PER_YEAR,
            risk_free_rate,
            volatility,
        )
    }

    /// Returns a copy with a different spot price.
    #[must_use]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different volatility.
    #[must_use]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Checks the parameters before any pricing math runs.
    ///
    /// Negative, non-finite or (for spot and strike) zero values are
    /// [`PricingError::InvalidParameter`]. A zero time to expiry or zero
    /// volatility is a [`PricingError::Domain`] error: the inputs are
    /// well-formed but d1 divides by zero.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_non_negative("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;
        ensure_non_negative("volatility", self.volatility)?;

        if self.time_to_expiry == 0.0 {
            return Err(PricingError::domain(
                "time to expiry is zero, d1 is undefined",
            ));
        }
        if self.volatility == 0.0 {
            return Err(PricingError::domain("volatility is zero, d1 is undefined"));
        }
        Ok(())
    }
}

/// Prices and Greeks for both the call and the put, computed together from
/// a single set of intermediate terms.
///
/// Theta is per year and vega is per unit of volatility (1.0 = 100 vol
/// points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Call price.
    #[serde(rename = "callPrice")]
    pub call_price: f64,
    /// Put price.
    #[serde(rename = "putPrice")]
    pub put_price: f64,
    /// Call delta, N(d1).
    pub delta_call: f64,
    /// Put delta, N(d1) - 1.
    pub delta_put: f64,
    /// Gamma, shared by call and put.
    pub gamma: f64,
    /// Vega, shared by call and put.
    pub vega: f64,
    /// Call theta.
    pub theta_call: f64,
    /// Put theta.
    pub theta_put: f64,
    /// Call rho.
    pub rho_call: f64,
    /// Put rho.
    pub rho_put: f64,
}

impl PricingResult {
    /// Price of the given option type.
    #[must_use]
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price,
            OptionType::Put => self.put_price,
        }
    }

    /// Delta of the given option type.
    #[must_use]
    pub fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.delta_call,
            OptionType::Put => self.delta_put,
        }
    }

    /// Theta of the given option type.
    #[must_use]
    pub fn theta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.theta_call,
            OptionType::Put => self.theta_put,
        }
    }

    /// Rho of the given option type.
    #[must_use]
    pub fn rho(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.rho_call,
            OptionType::Put => self.rho_put,
        }
    }

    /// Selects the figures for one side of the pair.
    #[must_use]
    pub fn for_option(&self, option_type: OptionType) -> OptionGreeks {
        OptionGreeks {
            option_type,
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma,
            vega: self.vega,
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }
}

/// Price and Greeks of a single option, as shown for the selected type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionGreeks {
    /// Which side these figures belong to.
    #[serde(rename = "optionType")]
    pub option_type: OptionType,
    /// Theoretical price.
    pub price: f64,
    /// Delta.
    pub delta: f64,
    /// Gamma.
    pub gamma: f64,
    /// Vega.
    pub vega: f64,
    /// Theta per year.
    pub theta: f64,
    /// Rho.
    pub rho: f64,
}

impl OptionGreeks {
    /// Theta expressed per calendar day.
    #[must_use]
    pub fn daily_theta(&self) -> f64 {
        self.theta / DAYS_PER_YEAR
    }
}

/// Inputs for implied volatility inversion. Volatility is the unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolRequest {
    /// Observed option price to match.
    pub market_price: f64,
    /// Underlying spot price.
    pub spot: f64,
    /// Option strike price.
    pub strike: f64,
    /// Time to expiration in years.
    pub time_to_expiry: f64,
    /// Risk-free interest rate (annualized).
    pub risk_free_rate: f64,
    /// Option type (Call or Put).
    pub option_type: OptionType,
}

impl ImpliedVolRequest {
    /// Creates a new implied volatility request.
    #[must_use]
    pub fn new(
        market_price: f64,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            market_price,
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        }
    }

    /// Creates a request for a call option.
    #[must_use]
    pub fn call(
        market_price: f64,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self::new(
            market_price,
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Call,
        )
    }

    /// Creates a request for a put option.
    #[must_use]
    pub fn put(
        market_price: f64,
        spot: f64,
        strike: f64,
        time_to_expiry: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self::new(
            market_price,
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            OptionType::Put,
        )
    }

    /// Market parameters for this request evaluated at a trial volatility.
    #[must_use]
    pub fn parameters_at(&self, volatility: f64) -> MarketParameters {
        MarketParameters::new(
            self.spot,
            self.strike,
            self.time_to_expiry,
            self.risk_free_rate,
            volatility,
        )
    }

    /// Checks everything but the volatility, which the solver supplies.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("market_price", self.market_price)?;
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_non_negative("time_to_expiry", self.time_to_expiry)?;
        ensure_finite("risk_free_rate", self.risk_free_rate)?;

        if self.time_to_expiry == 0.0 {
            return Err(PricingError::domain(
                "time to expiry is zero, no volatility can be implied",
            ));
        }
        Ok(())
    }
}

/// Terminal state of an implied volatility search.
///
/// A search that runs out of iterations is reported as
/// [`ImpliedVolResult::Exhausted`], never as the last bisection midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ImpliedVolResult {
    /// The model price at `volatility` is within tolerance of the market price.
    Converged {
        /// Implied volatility (e.g. 0.25 = 25%).
        volatility: f64,
        /// Number of model evaluations performed.
        iterations: u32,
    },
    /// No volatility within the search bounds matched the market price.
    Exhausted {
        /// Number of model evaluations performed.
        iterations: u32,
    },
}

impl ImpliedVolResult {
    /// The implied volatility, if the search converged.
    #[must_use]
    pub fn volatility(&self) -> Option<f64> {
        match self {
            ImpliedVolResult::Converged { volatility, .. } => Some(*volatility),
            ImpliedVolResult::Exhausted { .. } => None,
        }
    }

    /// Number of model evaluations performed.
    #[must_use]
    pub fn iterations(&self) -> u32 {
        match self {
            ImpliedVolResult::Converged { iterations, .. }
            | ImpliedVolResult::Exhausted { iterations } => *iterations,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, ImpliedVolResult::Converged { .. })
    }

    /// Converts an exhausted search into [`PricingError::SolverExhausted`].
    pub fn into_result(self) -> Result<f64, PricingError> {
        match self {
            ImpliedVolResult::Converged { volatility, .. } => Ok(volatility),
            ImpliedVolResult::Exhausted { iterations } => {
                Err(PricingError::SolverExhausted { iterations })
            }
        }
    }
}

fn ensure_finite(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid_parameter(
            parameter,
            value,
            "must be finite",
        ))
    }
}

fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    ensure_finite(parameter, value)?;
    if value < 0.0 {
        return Err(PricingError::invalid_parameter(
            parameter,
            value,
            "must be non-negative",
        ));
    }
    Ok(())
}

fn ensure_positive(parameter: &'static str, value: f64) -> Result<(), PricingError> {
    ensure_finite(parameter, value)?;
    if value <= 0.0 {
        return Err(PricingError::invalid_parameter(
            parameter,
            value,
            "must be positive",
        ));
    }
    Ok(())
}
