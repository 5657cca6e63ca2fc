//! Property-based tests using `proptest` for the undo/redo state machine.
//!
//! 1. **Exact forward arithmetic**: add/subtract/multiply match integer
//!    arithmetic on the unscaled digits, at any number of fractional digits.
//! 2. **Divide validation**: errors iff zero divisor, bad scale or no mode.
//! 3. **Undo/redo replay**: k undos then k redos reproduce every forward result.
//! 4. **Empty-stack edges**: undo/redo after reset return the initial value.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use crate::domain::OperationKind;
use crate::engine::CalculatorEngine;
use crate::numeric::{CalcError, RoundingMode};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn decimal() -> impl Strategy<Value = BigDecimal> {
    (-1_000_000_000i64..1_000_000_000, 0i64..6).prop_map(|(m, s)| BigDecimal::new(m.into(), s))
}

/// Unscaled digits and scale, wide enough to exceed 28 fractional digits
fn wide_parts() -> impl Strategy<Value = (BigInt, i64)> {
    (any::<i128>(), 0i64..40).prop_map(|(m, s)| (BigInt::from(m), s))
}

fn pow10(exponent: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}

fn nonzero_small() -> impl Strategy<Value = BigDecimal> {
    prop_oneof![-1000i64..-1, 1i64..1000].prop_map(BigDecimal::from)
}

fn exact_kind() -> impl Strategy<Value = OperationKind> {
    prop_oneof![
        Just(OperationKind::Add),
        Just(OperationKind::Subtract),
        Just(OperationKind::Multiply),
    ]
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(
        RoundingMode::ALL
            .iter()
            .copied()
            .filter(|m| *m != RoundingMode::Unnecessary)
            .collect::<Vec<_>>(),
    )
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn forward_ops_are_exact((m1, s1) in wide_parts(), (m2, s2) in wide_parts()) {
        prop_assume!(!m2.is_zero());
        let a = BigDecimal::new(m1.clone(), s1);
        let b = BigDecimal::new(m2.clone(), s2);

        let scale = s1.max(s2);
        let aligned1 = &m1 * pow10(scale - s1);
        let aligned2 = &m2 * pow10(scale - s2);
        let sum = BigDecimal::new(&aligned1 + &aligned2, scale);
        let difference = BigDecimal::new(&aligned1 - &aligned2, scale);
        let product = BigDecimal::new(&m1 * &m2, s1 + s2);

        let mut calc = CalculatorEngine::new();
        prop_assert_eq!(calc.add(a.clone(), b.clone()), Ok(sum.clone()));
        prop_assert_eq!(calc.subtract(a.clone(), b.clone()), Ok(difference));
        prop_assert_eq!(calc.multiply(a.clone(), b.clone()), Ok(product));
        prop_assert_eq!(calc.history().len(), 3);

        // Exact results make every inverse exact too: a, a + b, a + b - b
        prop_assert_eq!(calc.undo(), Ok(a.clone()));
        prop_assert_eq!(calc.undo(), Ok(sum.clone()));
        prop_assert_eq!(calc.undo(), Ok(a));
        prop_assert_eq!(calc.redo(), Ok(sum));
    }

    #[test]
    fn divide_errors_iff_invalid(
        a in decimal(),
        b in prop_oneof![Just(BigDecimal::from(0)), nonzero_small()],
        scale in prop::option::of(-3i32..40),
        mode in prop::option::of(rounding_mode()),
    ) {
        let mut calc = CalculatorEngine::new();
        let invalid = b.is_zero()
            || scale.map_or(true, |s| s < 0)
            || mode.is_none();

        let outcome = calc.divide(a, b, scale, mode);
        prop_assert_eq!(outcome.is_err(), invalid);
        if let Err(err) = outcome {
            prop_assert!(err.is_invalid_argument());
            prop_assert!(!calc.can_undo());
        }
    }

    #[test]
    fn undo_then_redo_replays_each_step(
        start in nonzero_small(),
        steps in prop::collection::vec((exact_kind(), nonzero_small()), 1..8),
        k in 1usize..8,
    ) {
        let mut calc = CalculatorEngine::new();
        let mut results = vec![calc.add(BigDecimal::from(0), start).unwrap()];
        for (kind, operand) in &steps {
            let current = calc.result();
            results.push(calc.apply(*kind, Some(current), Some(operand.clone())).unwrap());
        }

        let k = k.min(results.len());
        for i in 1..=k {
            let expected = if i < results.len() {
                results[results.len() - 1 - i].clone()
            } else {
                BigDecimal::from(0)
            };
            prop_assert_eq!(calc.undo(), Ok(expected));
        }
        for i in (0..k).rev() {
            prop_assert_eq!(calc.redo(), Ok(results[results.len() - 1 - i].clone()));
        }
        prop_assert!(!calc.can_redo());
        prop_assert_eq!(calc.history().len(), results.len());
    }

    #[test]
    fn redo_after_undo_of_divide_restores_quotient(
        a in decimal(),
        b in nonzero_small(),
        scale in 0i32..40,
        mode in rounding_mode(),
    ) {
        let mut calc = CalculatorEngine::new();
        let q = calc.divide(a, b, Some(scale), Some(mode)).unwrap();
        prop_assert_eq!(q.as_bigint_and_exponent().1, i64::from(scale));
        calc.undo().unwrap();
        prop_assert_eq!(calc.redo(), Ok(q));
    }

    #[test]
    fn reset_returns_to_empty_state(
        steps in prop::collection::vec((exact_kind(), nonzero_small()), 0..6),
        undos in 0usize..4,
    ) {
        let mut calc = CalculatorEngine::new();
        for (kind, operand) in &steps {
            let current = calc.result();
            calc.apply(*kind, Some(current), Some(operand.clone())).unwrap();
        }
        for _ in 0..undos {
            calc.undo().unwrap();
        }

        calc.reset();
        prop_assert_eq!(calc.undo(), Ok(BigDecimal::from(0)));
        prop_assert_eq!(calc.redo(), Ok(BigDecimal::from(0)));
        prop_assert!(calc.history().is_empty());
        prop_assert!(calc.redo_buffer().is_empty());
    }

    #[test]
    fn missing_operand_is_rejected(kind in exact_kind(), a in decimal()) {
        let mut calc = CalculatorEngine::new();
        prop_assert_eq!(calc.apply(kind, Some(a.clone()), None), Err(CalcError::MissingOperand));
        prop_assert_eq!(calc.apply(kind, None, Some(a)), Err(CalcError::MissingOperand));
    }
}
