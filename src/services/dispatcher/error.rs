//! Dispatch error types.

use thiserror::Error;

use crate::services::blockchain::FetchError;

/// Reasons an event is dropped without producing an alert
#[derive(Debug, Error)]
pub enum DispatchError {
	/// The event names a chain with no configured route
	#[error("Unknown chain: {0}")]
	UnknownChain(String),

	#[error("Failed to fetch transaction: {0}")]
	Fetch(#[from] FetchError),
}
