//! Feeds JSON requests through the dispatch layer, the way an HTTP handler
//! would, and logs the responses.

use greeks_rs::prelude::*;
use serde_json::json;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting implied volatility service example");

    let requests = [
        json!({
            "action": "implied_vol",
            "market_price": 2.4854,
            "S": 100.0, "K": 100.0, "T": 30.0 / 365.0, "r": 0.05,
            "optionType": "call"
        }),
        json!({
            "action": "implied_vol",
            "market_price": 150.0,
            "S": 100.0, "K": 100.0, "T": 30.0 / 365.0, "r": 0.05,
            "optionType": "call"
        }),
        json!({
            "action": "greeks",
            "S": 100.0, "K": 105.0, "T": 0.5, "r": 0.03, "sigma": 0.25,
            "optionType": "put"
        }),
        json!({ "action": "price", "S": 100.0, "K": 100.0, "T": 0.0, "r": 0.05, "sigma": 0.2 }),
        json!({ "action": "calibrate" }),
    ];

    for request in &requests {
        let response = handle_json(&request.to_string());
        info!("{} -> {}", request, response);
    }

    // Typed access keeps "not found" distinct from any number
    let request = ImpliedVolRequest::put(3.0, 100.0, 100.0, 0.25, 0.05);
    match solve(&request)? {
        ImpliedVolResult::Converged {
            volatility,
            iterations,
        } => info!(
            "Put implied vol {:.2}% after {} iterations",
            volatility * 100.0,
            iterations
        ),
        ImpliedVolResult::Exhausted { iterations } => {
            warn!("No implied vol found after {} iterations", iterations)
        }
    }

    Ok(())
}
