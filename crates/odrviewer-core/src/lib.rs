//! # OdrViewer Core
//!
//! Error types and shared-state aliases used by the scene and settings crates.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{shared, Shared, SharedVec};
