// ============================================================================
// Decimal Arithmetic
// Division helpers over BigDecimal used by the calculator engine
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Division without a target scale.
///
/// Terminating quotients are exact; others are cut at `bigdecimal`'s
/// default precision of 100 significant digits.
///
/// # Errors
/// Returns `ZeroDivisor` if `n2` is zero.
pub fn divide_exact(n1: &BigDecimal, n2: &BigDecimal) -> CalcResult<BigDecimal> {
    if n2.is_zero() {
        return Err(CalcError::ZeroDivisor);
    }
    Ok(n1 / n2)
}

/// Division rounded to `scale` fractional digits.
///
/// The quotient is computed on unscaled integers, so rounding sees the
/// exact remainder and never rounds twice. The result carries exactly
/// `scale` fractional digits: `10 / 4` at scale 3 is `2.500`.
///
/// # Errors
/// - `ZeroDivisor` if `n2` is zero
/// - `RoundingNecessary` for `RoundingMode::Unnecessary` and an inexact quotient
/// - `Overflow` if aligning the operand scales needs an exponent past `u32`
pub fn divide_scaled(
    n1: &BigDecimal,
    n2: &BigDecimal,
    scale: u32,
    mode: RoundingMode,
) -> CalcResult<BigDecimal> {
    if n2.is_zero() {
        return Err(CalcError::ZeroDivisor);
    }

    // n1 / n2 * 10^scale == (m1 * 10^s2 * 10^scale) / (m2 * 10^s1)
    let (m1, s1) = n1.as_bigint_and_exponent();
    let (m2, s2) = n2.as_bigint_and_exponent();
    let shift = i128::from(scale) + i128::from(s2) - i128::from(s1);

    let (numerator, denominator) = if shift >= 0 {
        (m1 * pow10(shift.unsigned_abs())?, m2)
    } else {
        (m1, m2 * pow10(shift.unsigned_abs())?)
    };

    let quotient = round_quotient(&numerator, &denominator, mode)?;
    Ok(BigDecimal::new(quotient, i64::from(scale)))
}

/// `numerator / denominator` rounded to an integer with `mode`.
fn round_quotient(
    numerator: &BigInt,
    denominator: &BigInt,
    mode: RoundingMode,
) -> CalcResult<BigInt> {
    // Both truncate towards zero
    let truncated = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.is_zero() {
        return Ok(truncated);
    }

    let negative = numerator.is_negative() != denominator.is_negative();
    let half = (remainder.magnitude() * 2u32).cmp(denominator.magnitude());
    let odd = !(&truncated % 2u32).is_zero();

    let away = mode
        .rounds_away(negative, half, odd)
        .ok_or(CalcError::RoundingNecessary)?;
    if !away {
        return Ok(truncated);
    }
    Ok(if negative {
        truncated - 1u32
    } else {
        truncated + 1u32
    })
}

fn pow10(exponent: u128) -> CalcResult<BigInt> {
    let exponent = u32::try_from(exponent).map_err(|_| CalcError::Overflow)?;
    Ok(num_traits::pow(BigInt::from(10u8), exponent as usize))
}
