//! Mock implementations for testing.

use parking_lot::Mutex;
use std::sync::Arc;
use tutor_core::{Error, Result, StateStore, StorageErrorCode, TutorState};

/// Mock store that keeps every saved record in memory.
///
/// Implements the same `StateStore` trait as `JsonFileStore`, so tests see
/// exactly what the engine would have written to disk.
#[derive(Clone, Default)]
pub struct MockStore {
    /// Record returned by `load`.
    initial: Arc<Mutex<Option<TutorState>>>,
    /// Every record passed to `save`, oldest first.
    saved: Arc<Mutex<Vec<TutorState>>>,
    /// Simulate save failures if set.
    should_fail: Arc<Mutex<bool>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that loads `state` on startup.
    pub fn with_state(state: TutorState) -> Self {
        let store = Self::new();
        *store.initial.lock() = Some(state);
        store
    }

    /// The most recent record saved.
    pub fn last_saved(&self) -> Option<TutorState> {
        self.saved.lock().last().cloned()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saved.lock().len()
    }

    /// Set failure mode for testing error handling.
    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock() = fail;
    }
}

impl StateStore for MockStore {
    fn load(&self) -> Result<Option<TutorState>> {
        Ok(self.initial.lock().clone())
    }

    fn save(&self, state: &TutorState) -> Result<()> {
        if *self.should_fail.lock() {
            return Err(Error::storage(
                StorageErrorCode::SaveFailed,
                "Mock store failure",
            ));
        }

        self.saved.lock().push(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_captures_saves() {
        let mock = MockStore::new();
        assert!(mock.load().unwrap().is_none());

        mock.save(&TutorState::default()).unwrap();
        assert_eq!(mock.save_count(), 1);
        assert_eq!(mock.last_saved(), Some(TutorState::default()));
    }

    #[test]
    fn test_mock_store_failure_mode() {
        let mock = MockStore::new();
        mock.set_should_fail(true);

        let err = mock.save(&TutorState::default()).unwrap_err();
        assert_eq!(err.error_code(), Some("STORE_002"));
        assert_eq!(mock.save_count(), 0);
    }
}
