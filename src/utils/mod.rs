//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application. Currently includes:
//!
//! - constants: Constants for the application
//! - logging: Logging utilities
//! - parsing: Serde helpers for loosely typed API fields
//! - tests: Test builders for models

pub mod constants;
pub mod logging;
pub mod parsing;

pub use constants::*;
