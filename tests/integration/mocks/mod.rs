//! Mock implementations and shared fixtures for integration tests.

mod services;

pub use services::*;
pub use websocket::*;
