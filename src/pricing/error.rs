//! Error types for option pricing and implied volatility calculation.

use std::fmt;

/// Errors reported by the pricing engine, the implied volatility solver and
/// the helpers built on them.
///
/// Every variant is a structured outcome for the immediate caller. None of
/// them are retried internally: the math is deterministic, so the same
/// inputs always produce the same failure.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A parameter is negative, zero where it must be positive, or not finite.
    ///
    /// Rejected before any computation takes place.
    InvalidParameter {
        /// Name of the offending parameter (e.g. `"spot"`).
        parameter: &'static str,
        /// Value that was supplied.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// The inputs are valid numbers but the model is undefined for them,
    /// e.g. zero time to expiry or zero volatility dividing by zero in d1.
    Domain {
        /// Description of the degenerate input.
        message: String,
    },

    /// Bisection did not reach the price tolerance within the iteration cap.
    SolverExhausted {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Solver configuration is unusable.
    InvalidConfig {
        /// Description of the invalid setting.
        message: String,
    },
}

impl PricingError {
    /// Builds a [`PricingError::InvalidParameter`].
    #[must_use]
    pub fn invalid_parameter(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        PricingError::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    /// Builds a [`PricingError::Domain`].
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        PricingError::Domain {
            message: message.into(),
        }
    }

    /// Machine-readable error kind, stable across releases.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { .. } => "InvalidParameterError",
            PricingError::Domain { .. } => "DomainError",
            PricingError::SolverExhausted { .. } => "SolverExhausted",
            PricingError::InvalidConfig { .. } => "InvalidConfigError",
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "invalid parameter {parameter}: {reason}, got {value}")
            }
            PricingError::Domain { message } => {
                write!(f, "outside model domain: {message}")
            }
            PricingError::SolverExhausted { iterations } => {
                write!(
                    f,
                    "implied volatility not found after {iterations} iterations"
                )
            }
            PricingError::InvalidConfig { message } => {
                write!(f, "invalid solver configuration: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
