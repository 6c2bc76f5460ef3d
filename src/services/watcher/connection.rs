//! Websocket connection state tracking

use std::fmt;

/// Lifecycle of a watcher's subscription
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
	/// Not connected, either before the first attempt or while waiting to reconnect
	#[default]
	Disconnected,
	/// Websocket handshake in progress
	Connecting,
	/// Connected and the subscribe request has been sent
	Subscribed,
}

impl ConnectionState {
	pub fn is_subscribed(&self) -> bool {
		matches!(self, Self::Subscribed)
	}
}

impl fmt::Display for ConnectionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = match self {
			Self::Disconnected => "disconnected",
			Self::Connecting => "connecting",
			Self::Subscribed => "subscribed",
		};
		f.write_str(state)
	}
}
