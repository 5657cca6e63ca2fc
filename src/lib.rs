// ============================================================================
// Undo Calculator Library
// Exact decimal calculator with per-context undo and redo
// ============================================================================

//! # Undo Calc
//!
//! A stateful decimal calculator that records every operation applied to a
//! running result so it can be undone and redone.
//!
//! ## Features
//!
//! - **Exact decimal arithmetic** backed by `bigdecimal` (no binary floats, no precision limit)
//! - **Scaled division** with an explicit scale and rounding mode
//! - **Undo/redo** of every recorded operation
//! - **Per-context isolation**: owned engines, thread-bound engines or a keyed registry
//! - **Event hooks** for logging and auditing
//!
//! ## Example
//!
//! ```rust
//! use undo_calc::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//!
//! let r = calc.add(BigDecimal::from(1), BigDecimal::from(2)).unwrap(); // 3
//! let r = calc.subtract(r, BigDecimal::from(1)).unwrap(); // 2
//! let r = calc.multiply(r, BigDecimal::from(5)).unwrap(); // 10
//! let r = calc
//!     .divide(r, BigDecimal::from(2), Some(0), Some(RoundingMode::HalfUp))
//!     .unwrap(); // 5
//! assert_eq!(r, BigDecimal::from(5));
//!
//! assert_eq!(calc.undo().unwrap(), BigDecimal::from(10));
//! assert_eq!(calc.redo().unwrap(), BigDecimal::from(5));
//! ```

pub mod context;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::context::{CalculatorRegistry, ResetGuard};
    pub use crate::domain::{CalculatorConfig, HistoryMode, Operation, OperationKind, SessionId};
    pub use crate::engine::{create_from_config, CalculatorBuilder, CalculatorEngine};
    pub use crate::interfaces::{
        CalculatorEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{BigDecimal, CalcError, CalcResult, RoundingMode};
}

#[cfg(test)]
mod integration_tests {
    use super::context;
    use super::prelude::*;
    use crossbeam::channel;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn d(n: i64) -> BigDecimal {
        BigDecimal::from(n)
    }

    /// The 13-step undo/redo scenario against an owned engine.
    fn run_scenario(calc: &mut CalculatorEngine) -> BigDecimal {
        let result = calc.add(d(1), d(2)).unwrap();
        assert_eq!(result, d(3));

        let result = calc.subtract(result, d(1)).unwrap();
        assert_eq!(result, d(2));

        let result = calc.multiply(result, d(5)).unwrap();
        assert_eq!(result, d(10));

        let result = calc
            .divide(result, d(2), Some(0), Some(RoundingMode::HalfUp))
            .unwrap();
        assert_eq!(result, d(5));

        assert_eq!(calc.undo().unwrap(), d(10));
        assert_eq!(calc.redo().unwrap(), d(5));
        assert_eq!(calc.undo().unwrap(), d(10));
        assert_eq!(calc.undo().unwrap(), d(2));
        assert_eq!(calc.undo().unwrap(), d(3));
        assert_eq!(calc.undo().unwrap(), d(1));
        assert_eq!(calc.redo().unwrap(), d(3));
        assert_eq!(calc.redo().unwrap(), d(2));
        assert_eq!(calc.redo().unwrap(), d(10));
        assert_eq!(calc.redo().unwrap(), d(5));

        // Redo buffer exhausted
        let result = calc.redo().unwrap();
        assert_eq!(result, d(5));
        result
    }

    /// Same scenario through the thread-bound calculator.
    fn run_thread_bound_scenario() -> BigDecimal {
        let _guard = context::ResetGuard::new();

        let result = context::add(d(1), d(2)).unwrap();
        let result = context::subtract(result, d(1)).unwrap();
        let result = context::multiply(result, d(5)).unwrap();
        let result =
            context::divide(result, d(2), Some(0), Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(result, d(5));

        let expected = [10, 5, 10, 2, 3, 1, 3, 2, 10, 5, 5];
        let steps: [fn() -> CalcResult<BigDecimal>; 11] = [
            context::undo,
            context::redo,
            context::undo,
            context::undo,
            context::undo,
            context::undo,
            context::redo,
            context::redo,
            context::redo,
            context::redo,
            context::redo,
        ];
        let mut result = result;
        for (step, want) in steps.iter().zip(expected) {
            result = step().unwrap();
            assert_eq!(result, d(want));
        }
        result
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut calc = CalculatorEngine::new();
        assert_eq!(run_scenario(&mut calc), d(5));
        assert!(!calc.can_redo());
        assert_eq!(calc.history().len(), 4);
    }

    #[test]
    fn test_scenario_is_repeatable_after_reset() {
        let mut calc = CalculatorEngine::new();
        run_scenario(&mut calc);
        calc.reset();
        assert_eq!(run_scenario(&mut calc), d(5));
    }

    #[test]
    fn test_fresh_context_edges() {
        let mut calc = CalculatorEngine::new();
        assert_eq!(calc.undo().unwrap(), d(0));

        let mut calc = CalculatorEngine::new();
        assert_eq!(calc.redo().unwrap(), d(0));
    }

    #[test]
    fn test_invalid_arguments() {
        let mut calc = CalculatorEngine::new();

        let errors = [
            calc.apply(OperationKind::Add, None, Some(d(1))),
            calc.apply(OperationKind::Add, Some(d(1)), None),
            calc.divide(d(1), d(0), Some(0), Some(RoundingMode::HalfUp)),
            calc.divide(d(1), d(1), Some(-1), Some(RoundingMode::HalfUp)),
            calc.divide(d(1), d(1), None, Some(RoundingMode::HalfUp)),
            calc.divide(d(1), d(1), Some(0), None),
        ];

        for err in errors {
            assert!(err.unwrap_err().is_invalid_argument());
        }

        calc.reset();
        calc.reset();
    }

    #[test]
    fn test_concurrent_owned_engines_converge() {
        let count = 1000;
        let (tx, rx) = channel::unbounded();

        crossbeam::scope(|s| {
            for _ in 0..count {
                let tx = tx.clone();
                s.spawn(move |_| {
                    let mut calc = CalculatorEngine::new();
                    tx.send(run_scenario(&mut calc)).unwrap();
                });
            }
        })
        .unwrap();
        drop(tx);

        let results: Vec<BigDecimal> = rx.iter().collect();
        assert_eq!(results.len(), count);
        let distinct: HashSet<BigDecimal> = results.into_iter().collect();
        assert_eq!(distinct.len(), 1);
        assert!(distinct.contains(&d(5)));
    }

    #[test]
    fn test_pooled_thread_bound_contexts_converge() {
        let count = 1000;
        let workers = 5;
        let (job_tx, job_rx) = channel::bounded::<usize>(count);
        let (result_tx, result_rx) = channel::unbounded();

        for job in 0..count {
            job_tx.send(job).unwrap();
        }
        drop(job_tx);

        crossbeam::scope(|s| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                s.spawn(move |_| {
                    // Each worker thread is reused for many jobs
                    for _job in job_rx.iter() {
                        result_tx.send(run_thread_bound_scenario()).unwrap();
                    }
                });
            }
        })
        .unwrap();
        drop(result_tx);

        let results: Vec<BigDecimal> = result_rx.iter().collect();
        assert_eq!(results.len(), count);
        let distinct: HashSet<BigDecimal> = results.into_iter().collect();
        assert_eq!(distinct.len(), 1);
        assert!(distinct.contains(&d(5)));
    }

    #[test]
    fn test_registry_sessions_converge() {
        let registry: Arc<CalculatorRegistry<usize>> = Arc::new(CalculatorRegistry::new());

        let results: Vec<BigDecimal> = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..64)
                .map(|key| {
                    let registry = Arc::clone(&registry);
                    s.spawn(move |_| {
                        let result = registry.with_session(&key, run_scenario);
                        registry.remove(&key);
                        result
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        assert!(results.iter().all(|r| *r == d(5)));
        assert!(registry.is_empty());
    }
}
