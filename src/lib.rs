//! # greeks-rs
//!
//! Theoretical prices, Greeks and implied volatility for European options
//! under the Black-Scholes model.
//!
//! - [`pricing::BlackScholes`] prices the call and the put and computes delta,
//!   gamma, vega, theta and rho in one pass.
//! - [`pricing::solve`] recovers the volatility implied by a market price by
//!   bisection, with an explicit exhausted outcome.
//! - [`pricing::GreekProfile`] evaluates the Greeks across a range of spot
//!   prices.
//! - [`api`] accepts action-tagged JSON requests and returns JSON results or
//!   structured errors.
//!
//! Every function is pure and keeps no state between calls, so all of them
//! can be called concurrently from any thread.

pub mod api;
pub mod prelude;
pub mod pricing;
