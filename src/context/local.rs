// ============================================================================
// Thread-Bound Calculator
// One implicit calculator per OS thread
// ============================================================================

use crate::domain::OperationKind;
use crate::engine::CalculatorEngine;
use crate::numeric::{CalcResult, RoundingMode};
use bigdecimal::BigDecimal;
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static CALCULATOR: RefCell<CalculatorEngine> = RefCell::new(CalculatorEngine::new());
}

/// Run `f` against the calling thread's calculator.
///
/// The calculator is created on first use with the default configuration.
/// State persists until [`reset`] is called, so a pooled thread that is
/// reused for unrelated work must be reset first (see [`ResetGuard`]).
///
/// # Panics
/// If called re-entrantly from inside `f`.
pub fn with_calculator<R>(f: impl FnOnce(&mut CalculatorEngine) -> R) -> R {
    CALCULATOR.with(|cell| f(&mut cell.borrow_mut()))
}

/// Replace the calling thread's calculator, returning the previous one.
pub fn install(engine: CalculatorEngine) -> CalculatorEngine {
    CALCULATOR.with(|cell| cell.replace(engine))
}

pub fn add(n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.add(n1, n2))
}

pub fn subtract(n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.subtract(n1, n2))
}

pub fn multiply(n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.multiply(n1, n2))
}

pub fn divide(
    n1: BigDecimal,
    n2: BigDecimal,
    scale: Option<i32>,
    rounding_mode: Option<RoundingMode>,
) -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.divide(n1, n2, scale, rounding_mode))
}

pub fn apply(
    kind: OperationKind,
    n1: Option<BigDecimal>,
    n2: Option<BigDecimal>,
) -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.apply(kind, n1, n2))
}

pub fn undo() -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.undo())
}

pub fn redo() -> CalcResult<BigDecimal> {
    with_calculator(|calc| calc.redo())
}

pub fn result() -> BigDecimal {
    with_calculator(|calc| calc.result())
}

/// Clear the calling thread's history, redo buffer and result.
///
/// Never fails: does nothing if the calculator is borrowed or the thread's
/// storage has already been torn down.
pub fn reset() {
    let _ = CALCULATOR.try_with(|cell| {
        if let Ok(mut calc) = cell.try_borrow_mut() {
            calc.reset();
        }
    });
}

/// Resets the calling thread's calculator when dropped.
///
/// Hold one for the duration of a unit of work so the next user of the
/// thread starts clean, even after an early `?` return or a panic.
///
/// ```
/// use undo_calc::context;
/// use bigdecimal::BigDecimal;
///
/// fn job() -> undo_calc::numeric::CalcResult<BigDecimal> {
///     let _guard = context::ResetGuard::new();
///     let r = context::add(BigDecimal::from(1), BigDecimal::from(2))?;
///     context::multiply(r, BigDecimal::from(4))
/// }
///
/// assert_eq!(job().unwrap(), BigDecimal::from(12));
/// assert_eq!(context::result(), BigDecimal::from(0));
/// ```
#[must_use = "the calculator is reset when the guard is dropped"]
pub struct ResetGuard {
    // Tied to the creating thread
    _not_send: PhantomData<*const ()>,
}

impl ResetGuard {
    pub fn new() -> Self {
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Default for ResetGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ResetGuard {
    fn drop(&mut self) {
        reset();
    }
}
