use greeks_rs::prelude::*;
use greeks_rs::pricing::{DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_VOLATILITY, DEFAULT_MIN_VOLATILITY};

#[test]
fn round_trip_recovers_volatility() {
    let sigma = 0.2;
    let params = MarketParameters::new(100.0, 100.0, 30.0 / 365.0, 0.05, sigma);
    let price = BlackScholes::price(&params).unwrap().call_price;

    let request = ImpliedVolRequest::call(price, 100.0, 100.0, 30.0 / 365.0, 0.05);
    let iv = solve(&request).unwrap().into_result().unwrap();
    assert!((iv - sigma).abs() < 1e-4);
}

#[test]
fn round_trip_for_puts_across_strikes() {
    for (strike, sigma) in [(85.0, 0.45), (100.0, 0.15), (115.0, 0.6)] {
        let params = MarketParameters::new(100.0, strike, 0.4, 0.02, sigma);
        let price = BlackScholes::price(&params).unwrap().put_price;

        let request = ImpliedVolRequest::put(price, 100.0, strike, 0.4, 0.02);
        let iv = solve(&request).unwrap().volatility().unwrap();
        assert!((iv - sigma).abs() < 1e-4, "K={strike}: {iv} vs {sigma}");
    }
}

#[test]
fn reference_inversion() {
    let request = ImpliedVolRequest::call(2.4854, 100.0, 100.0, 30.0 / 365.0, 0.05);
    let iv = solve(&request).unwrap().volatility().unwrap();
    assert!((iv - 0.2).abs() < 1e-3);
}

#[test]
fn converged_volatility_stays_in_bounds() {
    let prices = [0.01, 0.5, 2.0, 10.0, 40.0, 90.0];
    for market_price in prices {
        for option_type in [OptionType::Call, OptionType::Put] {
            let request =
                ImpliedVolRequest::new(market_price, 100.0, 100.0, 1.0, 0.05, option_type);
            if let Some(iv) = solve(&request).unwrap().volatility() {
                assert!((DEFAULT_MIN_VOLATILITY..=DEFAULT_MAX_VOLATILITY).contains(&iv));
            }
        }
    }
}

#[test]
fn unreachable_call_price_has_no_solution() {
    let request = ImpliedVolRequest::call(101.0, 100.0, 100.0, 30.0 / 365.0, 0.05);
    let result = solve(&request).unwrap();
    assert_eq!(result.volatility(), None);
    assert_eq!(result.iterations(), DEFAULT_MAX_ITERATIONS);

    let err = result.into_result().unwrap_err();
    assert_eq!(err.kind(), "SolverExhausted");
}

#[test]
fn narrower_bracket_excludes_solution() {
    let params = MarketParameters::new(100.0, 100.0, 0.5, 0.05, 0.8);
    let price = BlackScholes::price(&params).unwrap().call_price;
    let request = ImpliedVolRequest::call(price, 100.0, 100.0, 0.5, 0.05);

    let config = SolverConfig::new().with_bounds(0.05, 0.5);
    let result = solve_with(&request, &config).unwrap();
    assert!(!result.is_converged());

    let iv = solve(&request).unwrap().volatility().unwrap();
    assert!((iv - 0.8).abs() < 1e-4);
}

#[test]
fn invalid_request_never_searches() {
    let request = ImpliedVolRequest::put(f64::NAN, 100.0, 100.0, 0.5, 0.05);
    assert!(matches!(
        solve(&request),
        Err(PricingError::InvalidParameter {
            parameter: "market_price",
            ..
        })
    ));

    let request = ImpliedVolRequest::put(3.0, 100.0, 100.0, -0.5, 0.05);
    assert!(matches!(
        solve(&request),
        Err(PricingError::InvalidParameter {
            parameter: "time_to_expiry",
            ..
        })
    ));
}
