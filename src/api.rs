//! Request dispatch for callers that talk to the engine in JSON.
//!
//! A request names its `action` and carries the market inputs using the
//! short field names of the pricing form (`S`, `K`, `T`, `r`, `sigma`,
//! `optionType`). Responses are plain JSON objects:
//!
//! - `price` → the full [`PricingResult`]
//! - `greeks` → the [`OptionGreeks`] of the selected option type
//! - `implied_vol` → `{ "implied_vol": <number> }`, or
//!   `{ "implied_vol": null }` when no volatility reproduces the price
//! - failures → `{ "error": { "kind": ..., "message": ... } }`
//!
//! Transport (HTTP verbs, status codes) is left to the embedding server.

use crate::pricing::{
    BlackScholes, ImpliedVolRequest, MarketParameters, OptionGreeks, OptionType, PricingError,
    PricingResult, solve,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Error kind reported for malformed JSON or an unknown action.
pub const INVALID_REQUEST_KIND: &str = "InvalidRequest";

/// An inbound request, tagged by its `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Request {
    /// Price both sides and compute every Greek.
    Price {
        /// Spot price.
        #[serde(rename = "S")]
        spot: f64,
        /// Strike price.
        #[serde(rename = "K")]
        strike: f64,
        /// Time to expiry in years.
        #[serde(rename = "T")]
        time_to_expiry: f64,
        /// Risk-free rate.
        #[serde(rename = "r")]
        risk_free_rate: f64,
        /// Volatility.
        #[serde(rename = "sigma")]
        volatility: f64,
    },
    /// Price and Greeks of one option type.
    Greeks {
        /// Spot price.
        #[serde(rename = "S")]
        spot: f64,
        /// Strike price.
        #[serde(rename = "K")]
        strike: f64,
        /// Time to expiry in years.
        #[serde(rename = "T")]
        time_to_expiry: f64,
        /// Risk-free rate.
        #[serde(rename = "r")]
        risk_free_rate: f64,
        /// Volatility.
        #[serde(rename = "sigma")]
        volatility: f64,
        /// Option type to report.
        #[serde(rename = "optionType")]
        option_type: OptionType,
    },
    /// Invert the model for the volatility implied by a market price.
    ImpliedVol {
        /// Observed option price.
        market_price: f64,
        /// Spot price.
        #[serde(rename = "S")]
        spot: f64,
        /// Strike price.
        #[serde(rename = "K")]
        strike: f64,
        /// Time to expiry in years.
        #[serde(rename = "T")]
        time_to_expiry: f64,
        /// Risk-free rate.
        #[serde(rename = "r")]
        risk_free_rate: f64,
        /// Option type the market price refers to.
        #[serde(rename = "optionType")]
        option_type: OptionType,
    },
}

/// Machine-readable error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind, e.g. `"InvalidParameterError"` or `"DomainError"`.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
}

/// Outcome of a dispatched request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    /// Full pricing result.
    Price(PricingResult),
    /// One-sided price and Greeks.
    Greeks(OptionGreeks),
    /// Implied volatility, `None` when the search was exhausted.
    ImpliedVol {
        /// The implied volatility, serialized as `null` when not found.
        implied_vol: Option<f64>,
    },
    /// The request could not be served.
    Error {
        /// Error details.
        error: ErrorBody,
    },
}

impl Response {
    fn error(kind: &str, message: impl Into<String>) -> Self {
        Response::Error {
            error: ErrorBody {
                kind: kind.to_string(),
                message: message.into(),
            },
        }
    }

    /// Returns true if this response reports a failure.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<PricingError> for Response {
    fn from(err: PricingError) -> Self {
        Response::error(err.kind(), err.to_string())
    }
}

/// Dispatches a parsed request to the engine or the solver.
#[must_use]
pub fn handle(request: &Request) -> Response {
    debug!("dispatching {request:?}");
    let response = match *request {
        Request::Price {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
        } => {
            let params =
                MarketParameters::new(spot, strike, time_to_expiry, risk_free_rate, volatility);
            BlackScholes::price(&params).map(Response::Price)
        }
        Request::Greeks {
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            volatility,
            option_type,
        } => {
            let params =
                MarketParameters::new(spot, strike, time_to_expiry, risk_free_rate, volatility);
            BlackScholes::price(&params).map(|result| Response::Greeks(result.for_option(option_type)))
        }
        Request::ImpliedVol {
            market_price,
            spot,
            strike,
            time_to_expiry,
            risk_free_rate,
            option_type,
        } => {
            let iv_request = ImpliedVolRequest::new(
                market_price,
                spot,
                strike,
                time_to_expiry,
                risk_free_rate,
                option_type,
            );
            solve(&iv_request).map(|result| Response::ImpliedVol {
                implied_vol: result.volatility(),
            })
        }
    };

    response.unwrap_or_else(|err| {
        warn!("request rejected: {err}");
        Response::from(err)
    })
}

/// Parses a JSON request, dispatches it and serializes the response.
///
/// Malformed JSON and unknown actions produce an error response of kind
/// [`INVALID_REQUEST_KIND`] rather than a Rust error.
#[must_use]
pub fn handle_json(body: &str) -> String {
    let response = match serde_json::from_str::<Request>(body) {
        Ok(request) => handle(&request),
        Err(err) => {
            warn!("invalid request: {err}");
            Response::error(INVALID_REQUEST_KIND, format!("invalid request: {err}"))
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|err| {
        format!(
            r#"{{"error":{{"kind":"SerializationError","message":"{}"}}}}"#,
            err.to_string().replace('"', "'")
        )
    })
}
