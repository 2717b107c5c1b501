//! Core types, analyzers, and the adaptive tutor engine.

pub mod celebration;
pub mod clock;
pub mod engine;
pub mod error;
pub mod game;
pub mod gaps;
pub mod hints;
pub mod history;
pub mod levels;
pub mod limits;
pub mod recommendation;
pub mod report;
pub mod requests;
pub mod session;
pub mod store;

pub use celebration::{CelebrationTier, Performance};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{rng_from_seed, TutorEngine};
pub use error::{Error, Result, StorageErrorCode, ValidationErrorCode};
pub use game::GameType;
pub use gaps::{Difficulty, KnowledgeGap};
pub use levels::LevelProgress;
pub use recommendation::Suggestion;
pub use report::{GameBreakdown, ProgressReport};
pub use requests::*;
pub use session::Session;
pub use store::{MemoryStore, StateStore, TutorState};
