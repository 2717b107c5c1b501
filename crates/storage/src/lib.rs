//! Durable storage for the tutor engine.

pub mod config;
pub mod file;
pub mod health;

pub use config::*;
pub use file::*;
