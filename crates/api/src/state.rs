//! Application state shared across handlers.

use parking_lot::Mutex;
use std::sync::Arc;
use tutor_core::TutorEngine;

/// Shared application state.
///
/// The engine is single-caller; handlers take the lock only for the
/// synchronous engine call and never across an `.await`.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<TutorEngine>>,
}

impl AppState {
    pub fn new(engine: TutorEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
