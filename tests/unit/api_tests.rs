use greeks_rs::api::{INVALID_REQUEST_KIND, handle_json};
use greeks_rs::prelude::*;
use serde_json::{Value, json};

fn dispatch(body: Value) -> Value {
    serde_json::from_str(&handle_json(&body.to_string())).unwrap()
}

#[test]
fn implied_vol_contract() {
    let found = dispatch(json!({
        "action": "implied_vol",
        "market_price": 10.4506,
        "S": 100.0,
        "K": 100.0,
        "T": 1.0,
        "r": 0.05,
        "optionType": "call"
    }));
    assert!((found["implied_vol"].as_f64().unwrap() - 0.2).abs() < 1e-4);

    let missing = dispatch(json!({
        "action": "implied_vol",
        "market_price": 1000.0,
        "S": 100.0,
        "K": 100.0,
        "T": 1.0,
        "r": 0.05,
        "optionType": "call"
    }));
    assert!(missing["implied_vol"].is_null());
    assert!(missing.get("error").is_none());
}

#[test]
fn price_response_carries_every_greek() {
    let response = dispatch(json!({
        "action": "price", "S": 100.0, "K": 95.0, "T": 0.25, "r": 0.02, "sigma": 0.3
    }));
    for field in [
        "callPrice",
        "putPrice",
        "delta_call",
        "delta_put",
        "gamma",
        "vega",
        "theta_call",
        "theta_put",
        "rho_call",
        "rho_put",
    ] {
        assert!(response[field].is_number(), "missing {field}");
    }
}

#[test]
fn errors_are_structured() {
    let domain = dispatch(json!({
        "action": "greeks", "S": 100.0, "K": 95.0, "T": 0.25, "r": 0.02,
        "sigma": 0.0, "optionType": "call"
    }));
    assert_eq!(domain["error"]["kind"], "DomainError");
    assert!(domain["error"]["message"].is_string());

    let invalid = dispatch(json!({
        "action": "price", "S": 100.0, "K": -95.0, "T": 0.25, "r": 0.02, "sigma": 0.2
    }));
    assert_eq!(invalid["error"]["kind"], "InvalidParameterError");

    let missing_field = dispatch(json!({ "action": "price", "S": 100.0 }));
    assert_eq!(missing_field["error"]["kind"], INVALID_REQUEST_KIND);
}

#[test]
fn typed_dispatch_matches_engine() {
    let request = Request::Greeks {
        spot: 100.0,
        strike: 100.0,
        time_to_expiry: 30.0 / 365.0,
        risk_free_rate: 0.05,
        volatility: 0.2,
        option_type: OptionType::Call,
    };
    let expected = BlackScholes::price(&MarketParameters::from_days(100.0, 100.0, 30.0, 0.05, 0.2))
        .unwrap()
        .for_option(OptionType::Call);

    match handle(&request) {
        Response::Greeks(greeks) => {
            assert!((greeks.price - expected.price).abs() < 1e-12);
            assert!((greeks.delta - expected.delta).abs() < 1e-12);
        }
        other => panic!("unexpected response {other:?}"),
    }
}
