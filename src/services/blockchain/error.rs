//! Transaction fetch error types.
//!
//! A fetch error drops the event it belongs to; nothing at this layer retries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
	/// The REST endpoint answered with a non-2xx status
	#[error("Request failed with status {status}: {url}")]
	Status { status: u16, url: String },

	/// The request could not be sent or the body could not be read
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The body is not a transaction envelope
	#[error("Parse error: {0}")]
	Parse(#[from] serde_json::Error),

	/// The endpoint and hash do not form a valid URL
	#[error("Invalid URL: {0}")]
	Url(#[from] url::ParseError),
}

impl FetchError {
	/// HTTP status code, when the node answered
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}
