// ============================================================================
// Basic Usage Example
// ============================================================================

use std::sync::Arc;
use undo_calc::context;
use undo_calc::prelude::*;

fn main() -> CalcResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Undo Calculator Example ===\n");

    let mut calc = CalculatorBuilder::new()
        .replay_history()
        .build(Arc::new(LoggingEventHandler))?;

    println!("Session {}\n", calc.session_id());

    // Forward operations feed the previous result back in
    println!("Applying operations...");
    let r = calc.add(BigDecimal::from(1), BigDecimal::from(2))?;
    println!("  1 + 2 = {}", r);
    let r = calc.subtract(r, BigDecimal::from(1))?;
    println!("  - 1   = {}", r);
    let r = calc.multiply(r, BigDecimal::from(5))?;
    println!("  * 5   = {}", r);
    let r = calc.divide(r, BigDecimal::from(3), Some(4), Some(RoundingMode::HalfUp))?;
    println!("  / 3   = {} (scale 4, half-up)", r);

    println!("\n=== History ===");
    for op in calc.history() {
        println!("  {}", op);
    }

    println!("\n=== Undo ===");
    while calc.can_undo() {
        let r = calc.undo()?;
        println!("  undo -> {}", r);
    }

    println!("\n=== Redo ===");
    while calc.can_redo() {
        let r = calc.redo()?;
        println!("  redo -> {}", r);
    }

    // Invalid input is reported, not recorded
    println!("\n=== Invalid Input ===");
    match calc.divide(r, BigDecimal::from(0), Some(2), Some(RoundingMode::HalfUp)) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {}", e),
    }
    println!("  history still has {} entries", calc.history().len());

    // Thread-bound calculator with guaranteed cleanup
    println!("\n=== Thread-Bound Calculator ===");
    {
        let _guard = context::ResetGuard::new();
        let r = context::add(BigDecimal::new(15.into(), 1), BigDecimal::new(25.into(), 1))?;
        println!("  1.5 + 2.5 = {}", r);
        println!("  undo -> {}", context::undo()?);
    }
    println!("  after guard: {}", context::result());

    Ok(())
}
