//! Prices an at-the-money call and put and prints the Greeks for each side,
//! then the Greek profile across spot prices.

use greeks_rs::pricing::DEFAULT_PROFILE_POINTS;
use greeks_rs::prelude::*;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let params = MarketParameters::from_days(100.0, 100.0, 30.0, 0.05, 0.2);
    info!("Pricing {:?}", params);

    let result = BlackScholes::price(&params)?;
    for option_type in [OptionType::Call, OptionType::Put] {
        let greeks = result.for_option(option_type);
        info!(
            "{:?}: price={:.4} delta={:.4} gamma={:.6} theta={:.6} ({:.6}/day) vega={:.4} rho={:.4}",
            option_type,
            greeks.price,
            greeks.delta,
            greeks.gamma,
            greeks.theta,
            greeks.daily_theta(),
            greeks.vega,
            greeks.rho
        );
    }

    let profile = GreekProfile::compute(&params, DEFAULT_PROFILE_POINTS)?;
    for point in profile.iter().step_by(10) {
        info!(
            "spot={:>8.2} delta={:.4} gamma={:.6} vega={:.4} theta={:.4}",
            point.spot, point.delta, point.gamma, point.vega, point.theta
        );
    }

    match BlackScholes::price(&params.with_volatility(0.0)) {
        Ok(_) => info!("zero volatility unexpectedly priced"),
        Err(e) => info!("Zero volatility rejected: [{}] {}", e.kind(), e),
    }

    Ok(())
}
