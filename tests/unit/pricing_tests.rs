use greeks_rs::prelude::*;

const SIGMA_GRID_STEPS: usize = 200;

fn reference() -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 30.0 / 365.0, 0.05, 0.2)
}

#[test]
fn reference_scenario_greeks() {
    let result = BlackScholes::price(&reference()).unwrap();

    assert!((result.delta_call - 0.5396).abs() < 1e-3);
    assert!((result.call_price - 2.4934).abs() < 1e-3);
    assert!((result.gamma - 0.0692).abs() < 1e-3);
    assert!((result.delta_put - (result.delta_call - 1.0)).abs() < 1e-12);
}

#[test]
fn single_evaluation_is_internally_consistent() {
    let params = MarketParameters::new(120.0, 100.0, 0.75, 0.03, 0.35);
    let result = BlackScholes::price(&params).unwrap();

    // Vega and gamma share n(d1): vega = gamma * S^2 * sigma * T
    let from_gamma = result.gamma * params.spot * params.spot * params.volatility
        * params.time_to_expiry;
    assert!((result.vega - from_gamma).abs() < 1e-9);

    // Rho terms are the discounted strike legs scaled by T
    let discount = (-params.risk_free_rate * params.time_to_expiry).exp();
    let strike_legs = params.strike * discount * params.time_to_expiry;
    assert!((result.rho_call - result.rho_put - strike_legs).abs() < 1e-9);
}

#[test]
fn price_strictly_increases_with_volatility() {
    for option_type in [OptionType::Call, OptionType::Put] {
        for strike in [90.0, 100.0, 110.0] {
            let base = MarketParameters::new(100.0, strike, 0.5, 0.05, 0.2);
            let mut previous = f64::NEG_INFINITY;

            for i in 0..=SIGMA_GRID_STEPS {
                let sigma = 0.05 + (5.0 - 0.05) * i as f64 / SIGMA_GRID_STEPS as f64;
                let price = BlackScholes::price(&base.with_volatility(sigma))
                    .unwrap()
                    .price(option_type);
                assert!(
                    price > previous,
                    "{option_type:?} K={strike} not increasing at sigma={sigma}"
                );
                previous = price;
            }
        }
    }
}

#[test]
fn degenerate_inputs_fail_loudly() {
    let expired = MarketParameters::new(100.0, 90.0, 0.0, 0.05, 0.2);
    match BlackScholes::price(&expired) {
        Err(PricingError::Domain { message }) => assert!(message.contains("time to expiry")),
        other => panic!("expected domain error, got {other:?}"),
    }

    let frozen = MarketParameters::new(100.0, 90.0, 0.5, 0.05, 0.0);
    match BlackScholes::price(&frozen) {
        Err(PricingError::Domain { message }) => assert!(message.contains("volatility")),
        other => panic!("expected domain error, got {other:?}"),
    }
}

#[test]
fn non_finite_inputs_rejected() {
    let params = MarketParameters::new(f64::NAN, 100.0, 0.5, 0.05, 0.2);
    let err = BlackScholes::price(&params).unwrap_err();
    assert_eq!(err.kind(), "InvalidParameterError");

    let params = MarketParameters::new(100.0, f64::INFINITY, 0.5, 0.05, 0.2);
    let err = BlackScholes::price(&params).unwrap_err();
    assert_eq!(err.kind(), "InvalidParameterError");
}

#[test]
fn one_sided_view_matches_pair() {
    let result = BlackScholes::price(&reference()).unwrap();

    let call = result.for_option(OptionType::Call);
    assert_eq!(call.price, result.call_price);
    assert_eq!(call.delta, result.delta_call);
    assert_eq!(call.theta, result.theta_call);
    assert_eq!(call.rho, result.rho_call);

    let put = result.for_option(OptionType::Put);
    assert_eq!(put.price, result.put_price);
    assert_eq!(put.delta, result.delta_put);
    assert_eq!(put.gamma, call.gamma);
}

#[test]
fn greek_profile_spans_half_to_one_and_a_half_spot() {
    let profile = GreekProfile::compute(&reference(), 80).unwrap();
    assert_eq!(profile.len(), 80);
    assert!((profile[0].spot - 50.0).abs() < 1e-9);
    assert!((profile[79].spot - 150.0).abs() < 1e-9);
    assert!(profile[0].delta < 0.01);
    assert!(profile[79].delta > 0.99);

    let peak = profile
        .iter()
        .max_by(|a, b| a.gamma.total_cmp(&b.gamma))
        .unwrap();
    assert!((peak.spot - 100.0).abs() < 5.0);
}

#[test]
fn pricing_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let params = MarketParameters::new(100.0 + i as f64, 100.0, 0.5, 0.05, 0.2);
                BlackScholes::price(&params).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let threaded = handle.join().unwrap();
        let params = MarketParameters::new(100.0 + i as f64, 100.0, 0.5, 0.05, 0.2);
        assert_eq!(threaded, BlackScholes::price(&params).unwrap());
    }
}
