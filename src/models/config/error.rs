//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading the monitor configuration
///
/// Every constructor logs the error once, so callers only need to propagate it.
#[derive(Debug, Error)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// The file parsed but describes an unusable setup (bad URL, no wallets, ...)
	#[error("Invalid configuration: {0}")]
	ValidationError(String),

	/// The file is not valid JSON or does not match the expected shape
	#[error("Malformed configuration: {0}")]
	ParseError(String),

	/// The file could not be read
	#[error("Cannot read configuration: {0}")]
	FileError(String),
}

impl ConfigError {
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		tracing::error!(error = %error, "Configuration rejected");
		error
	}

	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		tracing::error!(error = %error, "Configuration rejected");
		error
	}

	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		tracing::error!(error = %error, "Configuration rejected");
		error
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(format!("{} ({:?})", err, err.kind()))
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		// serde_json already reports the position in its message
		Self::parse_error(err.to_string())
	}
}
