// ============================================================================
// Calculator Factory
// Creates calculator engines with proper configuration
// ============================================================================

use crate::domain::config::{CalculatorConfig, HistoryMode};
use crate::engine::CalculatorEngine;
use crate::interfaces::EventHandler;
use crate::numeric::CalcResult;
use bigdecimal::BigDecimal;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator engine from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for applied, undone and redone operations
///
/// # Returns
/// * `CalcResult<CalculatorEngine>` - Configured engine or `InvalidConfig`
///
/// # Example
/// ```
/// use undo_calc::prelude::*;
/// use undo_calc::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::linear().with_max_history(32);
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(!calc.can_undo());
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalcResult<CalculatorEngine> {
    config.validate()?;

    Ok(CalculatorEngine::from_parts(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculator engines with fluent API
///
/// # Example
/// ```
/// use undo_calc::prelude::*;
/// use undo_calc::engine::factory::CalculatorBuilder;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .linear_history()
///     .with_max_history(100)
///     .with_initial_result(BigDecimal::from(10))
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(calc.result(), BigDecimal::from(10));
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the default (replay) configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Keep the redo buffer across fresh operations
    pub fn replay_history(mut self) -> Self {
        self.config.history_mode = HistoryMode::Replay;
        self
    }

    /// Discard the redo buffer on fresh operations
    pub fn linear_history(mut self) -> Self {
        self.config.history_mode = HistoryMode::Linear;
        self
    }

    /// Set maximum number of undoable operations
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.config = self.config.with_max_history(max);
        self
    }

    /// Set the starting accumulator value
    pub fn with_initial_result(mut self, initial: BigDecimal) -> Self {
        self.config = self.config.with_initial_result(initial);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CalcResult<CalculatorEngine> {
        create_from_config(self.config, event_handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::CalcError;

    #[test]
    fn test_create_from_config() {
        let config = CalculatorConfig::compat();
        let calc = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(calc.is_ok());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::compat().with_max_history(0);
        let calc = create_from_config(config, Arc::new(NoOpEventHandler));
        assert!(matches!(calc, Err(CalcError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_pattern() {
        let calc = CalculatorBuilder::new()
            .linear_history()
            .with_max_history(8)
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(calc.config().history_mode, HistoryMode::Linear);
        assert_eq!(calc.config().max_history, Some(8));
    }

    #[test]
    fn test_builder_defaults_to_replay() {
        let builder = CalculatorBuilder::new();
        assert_eq!(builder.config().history_mode, HistoryMode::Replay);

        let builder = builder.linear_history().replay_history();
        assert_eq!(builder.config().history_mode, HistoryMode::Replay);
    }
}
