//! Preference persistence collaborator.
//!
//! The pipeline only needs two operations: read the current snapshot and
//! replace it wholesale (last writer wins). The default implementation keeps
//! the snapshot in a process-global slot; a frontend can substitute its own
//! store by implementing [`PreferenceStore`].

use crate::prefs::OptimizePreferences;
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("preference store is unavailable: {0}")]
    Unavailable(String),
}

/// External key-value collaborator holding the user's preference snapshot.
pub trait PreferenceStore {
    fn current(&self) -> OptimizePreferences;

    /// Replace the whole snapshot. No partial updates.
    fn replace(&self, prefs: OptimizePreferences) -> Result<(), StoreError>;
}

/// Process-global preference snapshot.
static PREFERENCES: Lazy<Arc<RwLock<OptimizePreferences>>> =
    Lazy::new(|| Arc::new(RwLock::new(OptimizePreferences::default())));

/// [`PreferenceStore`] backed by the process-global snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalPreferenceStore;

impl PreferenceStore for GlobalPreferenceStore {
    fn current(&self) -> OptimizePreferences {
        match PREFERENCES.read() {
            Ok(prefs) => prefs.clone(),
            Err(_) => OptimizePreferences::default(),
        }
    }

    fn replace(&self, prefs: OptimizePreferences) -> Result<(), StoreError> {
        let mut slot = PREFERENCES
            .write()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        *slot = prefs;
        Ok(())
    }
}

/// Self-contained [`PreferenceStore`] that does not touch the global slot.
/// Useful for frontends managing several dialogs and for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    snapshot: Mutex<OptimizePreferences>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn current(&self) -> OptimizePreferences {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn replace(&self, prefs: OptimizePreferences) -> Result<(), StoreError> {
        *self.snapshot.lock().unwrap_or_else(PoisonError::into_inner) = prefs;
        Ok(())
    }
}
