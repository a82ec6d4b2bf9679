use approx::assert_relative_eq;
use minigrad_ops::{
    OpError, add, add_lists, exp, exp_back, inv, inv_back, is_close, log, log_back, max, neg_list,
    prod, reduce, relu_back, sigmoid, sigmoid_back, sum,
};
use rand::Rng;

const H: f64 = 1e-6;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Central difference (f(x + h) - f(x - h)) / 2h
fn central_difference(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    (f(x + H) - f(x - H)) / (2.0 * H)
}

#[test]
fn test_reference_values() {
    assert_eq!(is_close(1.0, 1.005), 1.0);
    assert_eq!(is_close(1.0, 1.02), 0.0);
    assert_eq!(max(3.0, 5.0), 5.0);
    assert_eq!(max(5.0, 5.0), 5.0);

    assert_eq!(relu_back(-1.0, 7.0), 0.0);
    assert_eq!(relu_back(1.0, 7.0), 7.0);
    assert_eq!(relu_back(0.0, 7.0), 0.0);

    assert_eq!(sum::<f64>(&[]), 0.0);
    assert_eq!(prod::<f64>(&[]), 1.0);
    assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(prod(&[1.0, 2.0, 3.0]), 6.0);

    assert_eq!(add_lists(&[1.0, 2.0, 3.0], &[10.0, 20.0]), vec![11.0, 22.0]);
    assert_eq!(neg_list(&[1.0, -2.0, 3.0]), vec![-1.0, 2.0, -3.0]);

    assert_eq!(reduce(add, &[1.0, 2.0, 3.0], 10.0), 16.0);
    assert_eq!(reduce(|acc: f64, x: f64| acc - x, &[1.0, 2.0, 3.0], 10.0), 4.0);
}

#[test]
fn test_sigmoid_saturation() {
    let high = sigmoid(1000.0);
    let low = sigmoid(-1000.0);
    assert_relative_eq!(high, 1.0, epsilon = 1e-12);
    assert_relative_eq!(low, 0.0, epsilon = 1e-12);
}

#[test]
fn test_domain_errors_raise() {
    init_tracing();

    assert!(matches!(inv(0.0), Err(OpError::DivisionByZero { op: "inv" })));
    assert!(matches!(log(0.0), Err(OpError::Domain { op: "log", .. })));
    assert!(matches!(log(-1.0), Err(OpError::Domain { op: "log", .. })));

    let err = log(-1.0).unwrap_err();
    assert!(err.is_domain_error());
    assert_eq!(err.to_string(), "log: math domain error for input -1");
    assert_eq!(
        inv_back(0.0, 1.0).unwrap_err().to_string(),
        "inv_back: division by zero"
    );
}

#[test]
fn test_backward_matches_finite_differences() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let x: f64 = rng.random_range(0.1..10.0);

        let log_grad = log_back(x, 1.0).unwrap();
        let numeric = central_difference(|v| log(v).unwrap(), x);
        assert_relative_eq!(log_grad, numeric, max_relative = 1e-5, epsilon = 1e-7);

        let inv_grad = inv_back(x, 1.0).unwrap();
        let numeric = central_difference(|v| inv(v).unwrap(), x);
        assert_relative_eq!(inv_grad, numeric, max_relative = 1e-5, epsilon = 1e-7);
    }

    for _ in 0..200 {
        let x: f64 = rng.random_range(-8.0..8.0);

        let numeric = central_difference(sigmoid, x);
        assert_relative_eq!(sigmoid_back(x, 1.0), numeric, max_relative = 1e-5, epsilon = 1e-7);

        let numeric = central_difference(exp, x);
        assert_relative_eq!(exp_back(x, 1.0), numeric, max_relative = 1e-5, epsilon = 1e-7);
    }
}

#[test]
fn test_backward_scales_with_upstream_gradient() {
    let x: f64 = 0.7;
    let d: f64 = -3.5;
    assert_relative_eq!(log_back(x, d).unwrap(), d * log_back(x, 1.0).unwrap(), max_relative = 1e-12);
    assert_relative_eq!(inv_back(x, d).unwrap(), d * inv_back(x, 1.0).unwrap(), max_relative = 1e-12);
    assert_relative_eq!(sigmoid_back(x, d), d * sigmoid_back(x, 1.0), max_relative = 1e-12);
    assert_relative_eq!(exp_back(x, d), d * exp_back(x, 1.0), max_relative = 1e-12);
}
