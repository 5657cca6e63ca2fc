// ============================================================================
// Engine Module
// Contains the calculator's undo/redo state machine
// ============================================================================

mod calculator;

pub mod factory;

#[cfg(test)]
mod proptest_properties;

pub use calculator::CalculatorEngine;
pub use factory::{create_from_config, CalculatorBuilder};
