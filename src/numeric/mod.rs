// ============================================================================
// Numeric Module
// Decimal arithmetic and error types for the calculator
// ============================================================================
//
// This module provides:
// - CalcError / CalcResult: error types for every calculator operation
// - RoundingMode: closed set of rounding policies for scaled division
// - Division helpers over bigdecimal::BigDecimal
//
// Design principles:
// - No floating-point operations
// - Add, subtract and multiply are exact at any precision
// - Division either rounds to an explicit scale or keeps full precision
// - Fallible arithmetic returns Result (no panics)

mod arithmetic;
mod errors;
mod rounding;

pub use arithmetic::{divide_exact, divide_scaled};
pub use bigdecimal::BigDecimal;
pub use errors::{CalcError, CalcResult};
pub use rounding::RoundingMode;
