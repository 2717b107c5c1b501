//! Persisted engine state and the load/save adapter the engine writes through.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gaps::KnowledgeGap;
use crate::levels::LevelProgress;
use crate::session::Session;

/// The single persisted record.
///
/// `knowledge_gaps` is a cache; the engine re-derives it from `sessions` on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorState {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub knowledge_gaps: Vec<KnowledgeGap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_session: Option<Session>,
    #[serde(default)]
    pub levels: LevelProgress,
}

/// Durable storage for [`TutorState`].
///
/// Implementations must write the whole record on every `save`; the engine
/// never sends partial updates.
pub trait StateStore: Send + Sync {
    /// Returns `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<TutorState>>;

    fn save(&self, state: &TutorState) -> Result<()>;
}

/// In-memory store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<TutorState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a previously saved record.
    pub fn with_state(state: TutorState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }

    /// The last record saved, if any.
    pub fn snapshot(&self) -> Option<TutorState> {
        self.state.lock().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<TutorState>> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &TutorState) -> Result<()> {
        *self.state.lock() = Some(state.clone());
        Ok(())
    }
}
