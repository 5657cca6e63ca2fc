// ============================================================================
// Calculator Engine
// Running result with recorded, undoable and redoable operations
// ============================================================================

use crate::domain::{
    CalculatorConfig, HistoryMode, Operation, OperationKind, OperationLog, SessionId,
};
use crate::interfaces::{CalculatorEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{self, CalcError, CalcResult, RoundingMode};
use bigdecimal::BigDecimal;
use chrono::Utc;
use num_traits::Zero;
use std::fmt;
use std::sync::Arc;

/// Where a forward application came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Redo,
}

/// Stateful decimal calculator for one execution context.
///
/// Owns the running result, the history stack and the redo buffer. An
/// engine is never shared between callers; give each worker its own
/// instance (it is `Send`) or use the bindings in [`crate::context`].
///
/// Every forward operation takes both operands explicitly, so the usual
/// pattern is to feed the previous result back in:
///
/// ```
/// use undo_calc::prelude::*;
///
/// let mut calc = CalculatorEngine::new();
/// let r = calc.add(BigDecimal::from(1), BigDecimal::from(2)).unwrap();
/// let r = calc.multiply(r, BigDecimal::from(5)).unwrap();
/// assert_eq!(r, BigDecimal::from(15));
///
/// assert_eq!(calc.undo().unwrap(), BigDecimal::from(3));
/// assert_eq!(calc.redo().unwrap(), BigDecimal::from(15));
/// ```
pub struct CalculatorEngine {
    /// Identity used in logs and events
    session_id: SessionId,

    /// History behaviour and starting value
    config: CalculatorConfig,

    /// Running accumulator
    result: BigDecimal,

    /// History stack and redo buffer
    log: OperationLog,

    /// Event handler for state changes
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorEngine {
    /// Create an engine with the default configuration and no event handler
    pub fn new() -> Self {
        Self::from_parts(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    /// Build from an already validated configuration
    pub(crate) fn from_parts(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            session_id: SessionId::new(),
            result: config.initial_result.clone(),
            log: OperationLog::new(config.max_history),
            config,
            event_handler,
        }
    }

    // ========================================================================
    // Forward operations
    // ========================================================================

    /// `n1 + n2`, recorded as `+ n2`.
    pub fn add(&mut self, n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
        self.apply_user(Operation::add(n2), n1)
    }

    /// `n1 - n2`, recorded as `- n2`.
    pub fn subtract(&mut self, n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
        self.apply_user(Operation::subtract(n2), n1)
    }

    /// `n1 * n2`, recorded as `* n2`.
    pub fn multiply(&mut self, n1: BigDecimal, n2: BigDecimal) -> CalcResult<BigDecimal> {
        self.apply_user(Operation::multiply(n2), n1)
    }

    /// `n1 / n2` rounded to `scale` fractional digits with `rounding_mode`.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `ZeroDivisor` if `n2` is zero
    /// - `InvalidScale` if `scale` is missing or negative
    /// - `MissingRoundingMode` if `rounding_mode` is missing
    /// - `RoundingNecessary` / `Overflow` from the division itself
    ///
    /// Nothing is recorded when an error is returned.
    pub fn divide(
        &mut self,
        n1: BigDecimal,
        n2: BigDecimal,
        scale: Option<i32>,
        rounding_mode: Option<RoundingMode>,
    ) -> CalcResult<BigDecimal> {
        if n2.is_zero() {
            return Err(CalcError::ZeroDivisor);
        }

        let scale = scale
            .and_then(|scale| u32::try_from(scale).ok())
            .ok_or(CalcError::InvalidScale)?;
        let rounding_mode = rounding_mode.ok_or(CalcError::MissingRoundingMode)?;

        self.apply_user(Operation::divide(n2, scale, rounding_mode), n1)
    }

    /// Apply `kind` to two possibly-missing operands.
    ///
    /// `Divide` carries no scale or rounding mode here and is therefore
    /// rejected with `InvalidScale`; use [`CalculatorEngine::divide`].
    ///
    /// # Errors
    /// Returns `MissingOperand` if either operand is `None`, otherwise
    /// whatever the matching forward operation returns.
    pub fn apply(
        &mut self,
        kind: OperationKind,
        n1: Option<BigDecimal>,
        n2: Option<BigDecimal>,
    ) -> CalcResult<BigDecimal> {
        let (n1, n2) = match (n1, n2) {
            (Some(n1), Some(n2)) => (n1, n2),
            _ => return Err(CalcError::MissingOperand),
        };

        match kind {
            OperationKind::Add => self.add(n1, n2),
            OperationKind::Subtract => self.subtract(n1, n2),
            OperationKind::Multiply => self.multiply(n1, n2),
            OperationKind::Divide => self.divide(n1, n2, None, None),
        }
    }

    // ========================================================================
    // Undo / Redo / Reset
    // ========================================================================

    /// Revert the most recent operation and move it to the redo buffer.
    ///
    /// With an empty history this is a no-op returning the current result.
    ///
    /// Undoing a rounded divide multiplies the rounded quotient back, so it
    /// only recovers an approximation of the dividend.
    ///
    /// # Errors
    /// `ZeroDivisor` when undoing a multiply by zero. The operation stays on
    /// the history stack.
    pub fn undo(&mut self) -> CalcResult<BigDecimal> {
        let Some(op) = self.log.peek_undo() else {
            tracing::trace!(session = %self.session_id, "undo with empty history");
            return Ok(self.result.clone());
        };

        let value = Self::invert(op, &self.result)?;
        self.result = value.clone();

        if let Some(op) = self.log.commit_undo() {
            tracing::debug!(session = %self.session_id, "undo {} -> {}", op, value);
            self.emit(CalculatorEvent::Undone {
                session_id: self.session_id,
                operation: op,
                result: value.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok(value)
    }

    /// Re-apply the most recently undone operation to the current result.
    ///
    /// The operation is recorded in history again, so a following undo
    /// reverts it once more. With an empty redo buffer this is a no-op.
    ///
    /// # Errors
    /// Whatever re-applying the operation returns; the operation then stays
    /// in the redo buffer.
    pub fn redo(&mut self) -> CalcResult<BigDecimal> {
        let Some(op) = self.log.peek_redo() else {
            tracing::trace!(session = %self.session_id, "redo with empty buffer");
            return Ok(self.result.clone());
        };

        let value = Self::compute(op, &self.result)?;
        if let Some(op) = self.log.take_redo() {
            self.commit(op, value.clone(), Origin::Redo);
        }

        Ok(value)
    }

    /// Clear history, redo buffer and result.
    pub fn reset(&mut self) {
        self.log.clear();
        self.result = self.config.initial_result.clone();

        tracing::debug!(session = %self.session_id, "calculator reset");
        self.emit(CalculatorEvent::Reset {
            session_id: self.session_id,
            timestamp: Utc::now(),
        });
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current value of the accumulator
    pub fn result(&self) -> BigDecimal {
        self.result.clone()
    }

    /// Undoable operations, oldest first
    pub fn history(&self) -> &[Operation] {
        self.log.history()
    }

    /// Redoable operations, oldest first; the last entry is redone next
    pub fn redo_buffer(&self) -> &[Operation] {
        self.log.redo_buffer()
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn apply_user(&mut self, op: Operation, n1: BigDecimal) -> CalcResult<BigDecimal> {
        let value = Self::compute(&op, &n1)?;
        self.commit(op, value.clone(), Origin::User);
        Ok(value)
    }

    fn commit(&mut self, op: Operation, value: BigDecimal, origin: Origin) {
        if origin == Origin::User && self.config.history_mode == HistoryMode::Linear {
            self.log.clear_redo();
        }

        tracing::debug!(session = %self.session_id, ?origin, "apply {} -> {}", op, value);
        self.result = value.clone();
        self.log.record(op.clone());

        let event = match origin {
            Origin::User => CalculatorEvent::Applied {
                session_id: self.session_id,
                operation: op,
                result: value,
                timestamp: Utc::now(),
            },
            Origin::Redo => CalculatorEvent::Redone {
                session_id: self.session_id,
                operation: op,
                result: value,
                timestamp: Utc::now(),
            },
        };
        self.emit(event);
    }

    /// Forward application of `op` to `n1`
    fn compute(op: &Operation, n1: &BigDecimal) -> CalcResult<BigDecimal> {
        let n2 = op.operand();
        match op.kind() {
            OperationKind::Add => Ok(n1 + n2),
            OperationKind::Subtract => Ok(n1 - n2),
            OperationKind::Multiply => Ok(n1 * n2),
            OperationKind::Divide => {
                let scale = op.scale().ok_or(CalcError::InvalidScale)?;
                let mode = op.rounding_mode().ok_or(CalcError::MissingRoundingMode)?;
                numeric::divide_scaled(n1, n2, scale, mode)
            },
        }
    }

    /// Inverse application of `op` to `current`. Never records anything and
    /// divides at full precision when reverting a multiply.
    fn invert(op: &Operation, current: &BigDecimal) -> CalcResult<BigDecimal> {
        let n2 = op.operand();
        match op.kind().inverse() {
            OperationKind::Add => Ok(current + n2),
            OperationKind::Subtract => Ok(current - n2),
            OperationKind::Multiply => Ok(current * n2),
            OperationKind::Divide => numeric::divide_exact(current, n2),
        }
    }

    fn emit(&self, event: CalculatorEvent) {
        self.event_handler.on_event(event);
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("session_id", &self.session_id)
            .field("config", &self.config)
            .field("result", &self.result)
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}
