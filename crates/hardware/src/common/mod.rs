//! Common utilities and types used throughout the fetch-stage model.
//!
//! This module provides building blocks that are shared by the stage and its
//! collaborators. It includes:
//! 1. **Constants:** Instruction-size, alignment, and trap-vector field constants.
//! 2. **Error Handling:** Configuration and program-image error types.

/// Common constants used throughout the model.
pub mod constants;

/// Error types for configuration and image loading.
pub mod error;

pub use constants::is_compressed;
pub use error::{ConfigError, ImageError};
