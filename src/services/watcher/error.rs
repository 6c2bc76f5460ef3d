//! Subscription watcher error types.
//!
//! Every variant except [`WatcherError::Send`] ends the current session and
//! is followed by a reconnect after the configured interval.

use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum WatcherError {
	/// Websocket handshake or transport failure
	#[error("Connection error: {0}")]
	Connection(#[from] tungstenite::Error),

	/// Websocket handshake did not complete in time
	#[error("Connection timed out after {0:?}")]
	Timeout(Duration),

	/// The event queue has no consumer left
	#[error("Event queue closed: {0}")]
	Send(String),

	/// The node closed the connection
	#[error("Connection closed{}", .0.as_ref().map(|r| format!(": {}", r)).unwrap_or_default())]
	Closed(Option<String>),

	/// Inbound frame is not a subscription message
	#[error("Parse error: {0}")]
	Parse(#[from] serde_json::Error),
}

impl WatcherError {
	/// Whether the watcher should reconnect after this error
	pub fn is_recoverable(&self) -> bool {
		!matches!(self, Self::Send(_))
	}
}
