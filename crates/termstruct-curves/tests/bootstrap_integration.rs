//! Integration tests: bootstrap a discount curve from LIBOR, Future and Swap
//! quotes.
//!
//! | Instrument | Maturity | Quote  |
//! |------------|----------|--------|
//! | LIBOR      | 3M       | 0.15%  |
//! | LIBOR      | 6M       | 0.20%  |
//! | Future     | 9M       | 0.25%  |
//! | Future     | 12M      | 0.28%  |
//! | Swap       | 2Y       | 0.50%  |
//! | Swap       | 3Y       | 0.70%  |
//! | Swap       | 5Y       | 1.10%  |
//! | Swap       | 10Y      | 1.80%  |

use approx::assert_relative_eq;
use proptest::prelude::*;

use termstruct_curves::prelude::*;

fn market() -> Vec<MarketInstrument> {
    vec![
        MarketInstrument::libor(0.25, 0.15).unwrap().with_label("3M"),
        MarketInstrument::libor(0.5, 0.20).unwrap().with_label("6M"),
        MarketInstrument::future(0.75, 0.25).unwrap(),
        MarketInstrument::future(1.0, 0.28).unwrap(),
        MarketInstrument::swap(2.0, 0.50).unwrap(),
        MarketInstrument::swap(3.0, 0.70).unwrap(),
        MarketInstrument::swap(5.0, 1.10).unwrap(),
        MarketInstrument::swap(10.0, 1.80).unwrap(),
    ]
}

#[test]
fn test_libor_and_swap_scenario() {
    let mut builder = CurveBuilder::new();
    builder
        .add_instrument(MarketInstrument::libor(0.25, 0.15).unwrap())
        .add_instrument(MarketInstrument::swap(2.0, 0.50).unwrap());

    let curve = builder.fit().unwrap().clone();
    let dfs = curve.discount_factors();

    let p0 = 1.0 / (1.0 + 0.25 * 0.0015);
    assert_relative_eq!(dfs[0], p0, epsilon = 1e-15);
    assert_relative_eq!(dfs[0], 0.999625, epsilon = 1e-6);

    // Payments at 1Y and 2Y; the 1Y coupon is discounted on the line from
    // (0, 1) through the 3M pillar.
    let rate = 0.005;
    let p_1y = 1.0 + (p0 - 1.0) / 0.25;
    let annuity = 1.0 * p_1y;
    let p_2y = dfs[1];
    assert!((rate * annuity + rate * 1.0 * p_2y - (1.0 - p_2y)).abs() < 1e-10);
}

#[test]
fn test_full_market_bootstrap() {
    let mut builder = CurveBuilder::new();
    builder.add_instruments(market());

    let result = builder.fit_validated().unwrap();
    assert!(result.is_valid(), "{}", result.repricing_report);
    assert!(result.max_error() < 1e-12);

    let curve = result.into_curve();
    assert_eq!(curve.maturities(), &[0.25, 0.5, 0.75, 1.0, 2.0, 3.0, 5.0, 10.0]);

    // Positive rates: strictly decreasing discount factors
    for w in curve.discount_factors().windows(2) {
        assert!(w[1] < w[0], "{} !< {}", w[1], w[0]);
    }

    let zeros = curve.zero_rates();
    assert!(zeros.iter().all(|&z| z > 0.0 && z < 0.02));
    assert_relative_eq!(zeros[0], -(1.0 / (1.0 + 0.25 * 0.0015_f64)).ln() / 0.25, epsilon = 1e-15);

    let fwds = curve.forward_rates();
    assert_eq!(fwds.len(), 7);
    let dfs = curve.discount_factors();
    assert_relative_eq!(fwds[0], (dfs[0] / dfs[1] - 1.0) / 0.25, epsilon = 1e-15);
}

#[test]
fn test_forward_rate_between_arbitrary_points() {
    let mut builder = CurveBuilder::new();
    builder.add_instruments(market());
    builder.fit().unwrap();

    let curve = builder.curve().unwrap();
    let p1 = curve.discount_factor(1.5).unwrap();
    let p2 = curve.discount_factor(4.0).unwrap();

    assert_relative_eq!(
        builder.forward_rate(1.5, 4.0).unwrap(),
        (p1 / p2 - 1.0) / 2.5,
        epsilon = 1e-15
    );
    assert!(builder.forward_rate(4.0, 1.5).is_err());
    assert!(builder.forward_rate(0.1, 1.0).is_err());
}

#[test]
fn test_empty_fit() {
    let mut builder = CurveBuilder::new();
    assert_eq!(builder.fit().unwrap_err(), CurveError::EmptyInput);
    assert!(builder.curve().is_none());
}

#[test]
fn test_future_first_fails() {
    let mut builder = CurveBuilder::new();
    builder
        .add_instrument(MarketInstrument::swap(2.0, 0.5).unwrap())
        .add_instrument(MarketInstrument::future(0.25, 0.1).unwrap());

    assert!(matches!(
        builder.fit(),
        Err(CurveError::PrecedingPointRequired { .. })
    ));
    assert_eq!(builder.instruments().len(), 2);
}

#[test]
fn test_instruments_from_json() {
    let json = r#"[
        {"instrument_type": "LIBOR", "maturity": 0.25, "quote": 0.15, "label": "3M"},
        {"instrument_type": "SWAP", "maturity": 2.0, "quote": 0.50}
    ]"#;
    let instruments: Vec<MarketInstrument> = serde_json::from_str(json).unwrap();

    let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
    assert_eq!(curve.len(), 2);

    let bad = r#"[{"instrument_type": "LIBOR", "maturity": -1.0, "quote": 0.15}]"#;
    assert!(serde_json::from_str::<Vec<MarketInstrument>>(bad).is_err());
}

#[test]
fn test_half_up_rounding_changes_schedule() {
    let instruments = vec![
        MarketInstrument::libor(1.0, 0.5).unwrap(),
        MarketInstrument::swap(2.5, 1.0).unwrap(),
    ];

    let even = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
    let up = bootstrap_curve(
        &instruments,
        &CurveConfig::default().with_payment_rounding(PaymentRounding::HalfUp),
    )
    .unwrap();

    assert_eq!(even.discount_factors()[0], up.discount_factors()[0]);
    assert_ne!(even.discount_factors()[1], up.discount_factors()[1]);
}

fn libor_market() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::btree_map(1u32..=120, 0.0f64..10.0, 1..20).prop_map(|points| {
        points
            .into_iter()
            .map(|(months, quote)| (f64::from(months) / 12.0, quote))
            .collect()
    })
}

fn mixed_market() -> impl Strategy<Value = Vec<MarketInstrument>> {
    (0.05f64..8.0).prop_flat_map(|level| {
        let instruments = vec![
            MarketInstrument::libor(0.25, level * 0.8).unwrap(),
            MarketInstrument::future(0.5, level * 0.9).unwrap(),
            MarketInstrument::libor(0.75, level * 0.95).unwrap(),
            MarketInstrument::swap(1.0, level).unwrap(),
            MarketInstrument::swap(2.0, level * 1.05).unwrap(),
            MarketInstrument::swap(3.5, level * 1.1).unwrap(),
            MarketInstrument::swap(7.0, level * 1.15).unwrap(),
        ];
        Just(instruments).prop_shuffle()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_libor_discount_factors_exact_in_any_order(points in libor_market()) {
        let forward: Vec<MarketInstrument> = points
            .iter()
            .map(|&(t, q)| MarketInstrument::libor(t, q).unwrap())
            .collect();
        let reversed: Vec<MarketInstrument> = forward.iter().rev().cloned().collect();

        let config = CurveConfig::default();
        let a = bootstrap_curve(&forward, &config).unwrap();
        let b = bootstrap_curve(&reversed, &config).unwrap();

        prop_assert_eq!(&a, &b);
        for ((t, df), &(_, q)) in a.points().zip(&points) {
            prop_assert_eq!(df, 1.0 / (1.0 + t * (q / 100.0)));
        }
    }

    #[test]
    fn test_bootstrap_bit_identical_under_permutation(shuffled in mixed_market()) {
        let config = CurveConfig::default();
        let mut sorted = shuffled.clone();
        sorted.sort_by(|a, b| a.maturity().total_cmp(&b.maturity()));

        let a = bootstrap_curve(&shuffled, &config).unwrap();
        let b = bootstrap_curve(&sorted, &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_flat_positive_rates_strictly_decreasing(quote in 0.01f64..10.0, years in 2usize..30) {
        let mut instruments = vec![
            MarketInstrument::libor(0.25, quote).unwrap(),
            MarketInstrument::future(0.5, quote).unwrap(),
            MarketInstrument::libor(0.75, quote).unwrap(),
        ];
        instruments.extend((1..=years).map(|y| MarketInstrument::swap(y as f64, quote).unwrap()));

        let curve = bootstrap_curve(&instruments, &CurveConfig::default()).unwrap();
        for w in curve.discount_factors().windows(2) {
            prop_assert!(w[1] < w[0]);
        }
    }
}
