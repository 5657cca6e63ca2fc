// ============================================================================
// Context Module
// Binds calculators to execution contexts without passing handles around
// ============================================================================
//
// An owned `CalculatorEngine` per worker is the simplest isolation unit.
// This module covers callers that cannot thread a handle through:
// - Thread-bound: one implicit engine per OS thread, reset via `ResetGuard`
// - Registry: engines keyed by a caller-chosen id (async tasks, requests)

mod local;
mod registry;

pub use local::{
    add, apply, divide, install, multiply, redo, reset, result, subtract, undo, with_calculator,
    ResetGuard,
};
pub use registry::CalculatorRegistry;
