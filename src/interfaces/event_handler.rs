// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator state changes
// ============================================================================

use crate::domain::{Operation, SessionId};
use chrono::{DateTime, Utc};
use bigdecimal::BigDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Forward operation applied by the caller
    Applied {
        session_id: SessionId,
        operation: Operation,
        result: BigDecimal,
        timestamp: DateTime<Utc>,
    },

    /// Operation reverted and moved to the redo buffer
    Undone {
        session_id: SessionId,
        operation: Operation,
        result: BigDecimal,
        timestamp: DateTime<Utc>,
    },

    /// Operation taken from the redo buffer and applied again
    Redone {
        session_id: SessionId,
        operation: Operation,
        result: BigDecimal,
        timestamp: DateTime<Utc>,
    },

    /// History, redo buffer and result cleared
    Reset {
        session_id: SessionId,
        timestamp: DateTime<Utc>,
    },
}

impl CalculatorEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            CalculatorEvent::Applied { session_id, .. }
            | CalculatorEvent::Undone { session_id, .. }
            | CalculatorEvent::Redone { session_id, .. }
            | CalculatorEvent::Reset { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, UI refresh, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);
}

/// No-op event handler, the engine default
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}
