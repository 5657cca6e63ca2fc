// ============================================================================
// Calculator Registry
// Calculators keyed by caller-chosen execution-context identity
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::CalculatorEngine;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use crate::numeric::CalcResult;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

type SharedEngine = Arc<Mutex<CalculatorEngine>>;

/// Calculators for contexts that are not OS threads (tasks, requests, ...).
///
/// A session is created on first use of its key and lives until
/// [`CalculatorRegistry::remove`] ends it. Each session has its own lock,
/// so callers working on different keys never wait on each other's engine.
pub struct CalculatorRegistry<K> {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
    sessions: RwLock<HashMap<K, SharedEngine>>,
}

impl<K: Eq + Hash + Clone> CalculatorRegistry<K> {
    /// Registry creating default calculators
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registry whose sessions share `config` and `event_handler`
    pub fn with_config(
        config: CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> CalcResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            event_handler,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Run `f` against the calculator for `key`, creating it if needed.
    pub fn with_session<R>(&self, key: &K, f: impl FnOnce(&mut CalculatorEngine) -> R) -> R {
        let engine = self.session(key);
        let mut calc = engine.lock();
        f(&mut calc)
    }

    /// End the session for `key`. Returns whether it existed.
    pub fn remove(&self, key: &K) -> bool {
        let removed = self.sessions.write().remove(key);
        if let Some(engine) = &removed {
            tracing::debug!(session = %engine.lock().session_id(), "calculator session removed");
        }
        removed.is_some()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.sessions.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// End every session
    pub fn clear(&self) {
        self.sessions.write().clear();
    }

    fn session(&self, key: &K) -> SharedEngine {
        if let Some(engine) = self.sessions.read().get(key) {
            return Arc::clone(engine);
        }

        let mut sessions = self.sessions.write();
        let engine = sessions.entry(key.clone()).or_insert_with(|| {
            let engine =
                CalculatorEngine::from_parts(self.config.clone(), Arc::clone(&self.event_handler));
            tracing::debug!(session = %engine.session_id(), "calculator session created");
            Arc::new(Mutex::new(engine))
        });
        Arc::clone(engine)
    }
}

impl<K: Eq + Hash + Clone> Default for CalculatorRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}
