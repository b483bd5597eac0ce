// ============================================================================
// Basic Usage Example
// ============================================================================

use rational_arith::prelude::*;

fn main() -> NumericResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Rational Arithmetic Example ===\n");

    let half = SimplifiedRational::new(1, 2)?;
    let third = SimplifiedRational::new(1, 3)?;

    println!("Simplified variant:");
    println!("  {} + {} = {}", half, third, half.add(&third)?);
    println!("  {} - {} = {}", half, half, half.sub(&half)?);
    println!("  {} * {} = {}", half, third, half.mul(&third)?);
    println!("  {} / {} = {}", half, third, half.div(&third)?);
    println!("  -({}) = {}", half, half.negate()?);
    println!("  1 / ({}) = {}", third, third.invert()?);
    println!("  2/-4 is stored as {}", SimplifiedRational::new(2, -4)?);

    let plain_half = Rational::new(1, 2)?;
    let plain_third = Rational::new(1, 3)?;

    println!("\nPlain variant (no reduction):");
    println!("  {} + {} = {}", plain_half, plain_third, plain_half.add(&plain_third)?);
    println!("  {} - {} = {}", plain_half, plain_half, plain_half.sub(&plain_half)?);
    println!("  2/-4 is stored as {:?}", Rational::new(2, -4)?);

    println!("\nDecimal view: {} = {}", half.add(&third)?, half.add(&third)?.to_decimal()?);

    println!("\n=== Errors ===");
    let failures = [
        ("construct 1/0", SimplifiedRational::new(1, 0).map(|_| ())),
        ("invert 0/1", SimplifiedRational::ZERO.invert().map(|_| ())),
        ("add nothing", half.add(None).map(|_| ())),
        ("divide by zero", half.div(&SimplifiedRational::ZERO).map(|_| ())),
    ];
    for (label, result) in failures {
        if let Err(err) = result {
            tracing::debug!(?err, "expected failure");
            println!("  {}: {} ({})", label, err, err.kind());
        }
    }

    Ok(())
}
