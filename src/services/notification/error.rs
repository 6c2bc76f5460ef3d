//! Notification error types and handling.
//!
//! Provides error types for notification-related operations,
//! including network issues and configuration problems.

use thiserror::Error;

/// Represents possible errors during notification operations
#[derive(Debug, Error)]
pub enum NotificationError {
	/// The request could not be delivered
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The channel answered with a non-2xx status
	#[error("{notifier} returned error status: {status}")]
	Status { notifier: &'static str, status: u16 },

	/// The channel is enabled but not usable as configured
	#[error("Config error: {0}")]
	Config(String),
}

impl NotificationError {
	/// Creates a new configuration error with logging
	pub fn config_error(msg: impl Into<String>) -> Self {
		let error = Self::Config(msg.into());
		tracing::error!("{}", error);
		error
	}
}
