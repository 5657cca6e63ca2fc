// ============================================================================
// Domain Models Module
// Contains the calculator's value objects and configuration
// ============================================================================

pub mod config;
pub mod history;
pub mod operation;
pub mod session;

pub use config::{CalculatorConfig, HistoryMode};
pub use history::OperationLog;
pub use operation::{Operation, OperationKind};
pub use session::SessionId;
