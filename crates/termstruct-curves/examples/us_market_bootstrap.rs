//! US Market Curve Construction Example
//!
//! Bootstraps a discount curve from LIBOR deposits, Eurodollar futures and
//! par swaps, then compares the other construction methods.
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
//! | Swap       | 7Y       | 1.45%  |
//! | Swap       | 10Y      | 1.80%  |
//!
//! Run with: RUST_LOG=debug cargo run --example us_market_bootstrap

use termstruct_curves::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), CurveError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CurveConfig::default().with_verbose(true);

    // === BOOTSTRAP ===
    let mut builder = CurveBuilder::new().with_config(config.clone());
    builder
        .add_instrument(MarketInstrument::libor(0.25, 0.15)?.with_label("3M"))
        .add_instrument(MarketInstrument::libor(0.5, 0.20)?.with_label("6M"))
        .add_instrument(MarketInstrument::future(0.75, 0.25)?.with_label("EDU"))
        .add_instrument(MarketInstrument::future(1.0, 0.28)?.with_label("EDZ"))
        .add_instrument(MarketInstrument::swap(2.0, 0.50)?.with_label("2Y"))
        .add_instrument(MarketInstrument::swap(3.0, 0.70)?.with_label("3Y"))
        .add_instrument(MarketInstrument::swap(5.0, 1.10)?.with_label("5Y"))
        .add_instrument(MarketInstrument::swap(7.0, 1.45)?.with_label("7Y"))
        .add_instrument(MarketInstrument::swap(10.0, 1.80)?.with_label("10Y"));

    let result = builder.fit_validated()?;
    println!("{result}");

    println!("{:>8} {:>12} {:>10}", "Maturity", "Discount", "Zero %");
    for ((t, df), zero) in result.curve.points().zip(result.curve.zero_rates()) {
        println!("{t:>8.2} {df:>12.8} {:>10.4}", zero * 100.0);
    }

    println!();
    println!("Forward rates between pillars:");
    for (t, fwd) in result.curve.maturities()[1..]
        .iter()
        .zip(result.curve.forward_rates())
    {
        println!("  to {t:>5.2}Y: {:.4}%", fwd * 100.0);
    }
    println!(
        "  2Y -> 5Y: {:.4}%",
        builder.forward_rate(2.0, 5.0)? * 100.0
    );

    // === OTHER METHODS ===
    let mut pseudo = PseudoinverseMethod::new(builder.instruments().to_vec()).with_config(config.clone());
    pseudo.fit_with(builder.curve())?;

    let mut lorimier = LorimierMethod::new(result.curve.zero_rates(), result.curve.maturities().to_vec())
        .with_config(config.clone());
    lorimier.fit()?;

    let mut nelson_siegel =
        NelsonSiegelMethod::new(0.025, -0.024, -0.01, 2.5, result.curve.maturities().to_vec())
            .with_config(config);
    nelson_siegel.fit()?;

    println!();
    println!("{:>8} {:>10} {:>10} {:>10}", "Maturity", "Lorimier", "NS", "Pseudo");
    let ns_zeros = nelson_siegel.zero_rates()?;
    let pseudo_zeros = pseudo.zero_rates()?;
    for (i, &t) in result.curve.maturities().iter().enumerate() {
        println!(
            "{t:>8.2} {:>10.4} {:>10.4} {:>10.4}",
            lorimier.get_yield_at(t)? * 100.0,
            ns_zeros[i] * 100.0,
            pseudo_zeros[i] * 100.0
        );
    }
    println!("Lorimier 6Y yield: {:.4}%", lorimier.get_yield_at(6.0)? * 100.0);

    Ok(())
}
