// ============================================================================
// Operation Log
// History stack and redo buffer of one calculator context
// ============================================================================

use super::operation::Operation;

/// Undo history and redo buffer, both most-recent-last.
///
/// The log never computes anything. Callers peek at the next entry, try to
/// apply it, and only move it once the computation succeeded, so a failed
/// undo or redo leaves both stacks untouched.
#[derive(Debug, Clone, Default)]
pub struct OperationLog {
    history: Vec<Operation>,
    redo: Vec<Operation>,
    max_history: Option<usize>,
}

impl OperationLog {
    pub fn new(max_history: Option<usize>) -> Self {
        Self {
            history: Vec::new(),
            redo: Vec::new(),
            max_history,
        }
    }

    /// Push onto the history stack, dropping the oldest entries past the bound.
    pub fn record(&mut self, op: Operation) {
        self.history.push(op);

        if let Some(max) = self.max_history {
            if self.history.len() > max {
                let excess = self.history.len() - max;
                self.history.drain(..excess);
            }
        }
    }

    /// Most recent undoable operation.
    pub fn peek_undo(&self) -> Option<&Operation> {
        self.history.last()
    }

    /// Most recent redoable operation.
    pub fn peek_redo(&self) -> Option<&Operation> {
        self.redo.last()
    }

    /// Move the most recent history entry onto the redo buffer.
    pub fn commit_undo(&mut self) -> Option<Operation> {
        let op = self.history.pop()?;
        self.redo.push(op.clone());
        Some(op)
    }

    /// Remove the most recent redo entry. The caller records it again
    /// when it re-applies the operation.
    pub fn take_redo(&mut self) -> Option<Operation> {
        self.redo.pop()
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.redo.clear();
    }

    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    pub fn redo_buffer(&self) -> &[Operation] {
        &self.redo
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
