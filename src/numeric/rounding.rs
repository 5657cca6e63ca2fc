// ============================================================================
// Rounding Modes
// Closed set of rounding policies for scaled division
// ============================================================================

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy deciding how a quotient is rounded to its target scale.
///
/// `HalfUp` is the baseline policy: ties round away from zero, so
/// `2.5 -> 3` and `-2.5 -> -3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero (truncate)
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// Nearest neighbour, ties away from zero
    HalfUp,
    /// Nearest neighbour, ties towards zero
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Exact result required; any discarded digit is an error
    Unnecessary,
}

impl RoundingMode {
    /// All supported modes.
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::Unnecessary,
    ];

    /// Whether an inexact truncated quotient moves one unit away from zero.
    ///
    /// - `negative`: sign of the exact quotient
    /// - `half`: discarded fraction compared with one half
    /// - `odd`: parity of the truncated quotient
    ///
    /// Returns `None` for `Unnecessary`, which admits no discarded digits.
    pub fn rounds_away(self, negative: bool, half: Ordering, odd: bool) -> Option<bool> {
        let away = match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => half != Ordering::Less,
            RoundingMode::HalfDown => half == Ordering::Greater,
            RoundingMode::HalfEven => match half {
                Ordering::Equal => odd,
                other => other == Ordering::Greater,
            },
            RoundingMode::Unnecessary => return None,
        };
        Some(away)
    }
}
