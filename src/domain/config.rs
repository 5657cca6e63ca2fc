// ============================================================================
// Calculator Configuration
// History behaviour and starting state for a calculator engine
// ============================================================================

use crate::numeric::{CalcError, CalcResult};
use bigdecimal::BigDecimal;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// History Mode
// ============================================================================

/// Defines how forward operations interact with the redo buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HistoryMode {
    /// Redo buffer survives fresh forward operations
    /// - Undo moves the operation to the redo buffer
    /// - Redo re-applies it and records a new history entry
    /// - History and redo buffer grow independently across undo/redo cycles
    #[default]
    Replay,

    /// Single timeline
    /// - A fresh user operation discards everything that was undone
    /// - Redo behaves as in `Replay`
    Linear,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Redo buffer behaviour on fresh operations
    pub history_mode: HistoryMode,

    /// Optional: Maximum number of undoable operations kept
    /// None means unlimited history; the oldest entries are dropped first
    pub max_history: Option<usize>,

    /// Value of the accumulator on creation and after reset
    pub initial_result: BigDecimal,
}

impl CalculatorConfig {
    pub fn new(history_mode: HistoryMode) -> Self {
        Self {
            history_mode,
            max_history: None,
            initial_result: BigDecimal::zero(),
        }
    }

    /// Builder method: Bound the history stack
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = Some(max);
        self
    }

    /// Builder method: Set the starting accumulator value
    pub fn with_initial_result(mut self, initial: BigDecimal) -> Self {
        self.initial_result = initial;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_history == Some(0) {
            return Err(CalcError::InvalidConfig(
                "max_history must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::compat()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Unbounded replay history starting at zero
    pub fn compat() -> Self {
        Self::new(HistoryMode::Replay)
    }

    /// Single-timeline history starting at zero
    pub fn linear() -> Self {
        Self::new(HistoryMode::Linear)
    }
}
