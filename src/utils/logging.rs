//! Logging utilities for the application
//!
//! Logs go through `tracing_subscriber` with a compact single-line format.
//! The filter comes from `RUST_LOG` when set, otherwise from the level passed
//! on the command line. Websocket and HTTP client crates are capped at `warn`
//! because their per-frame and per-request events drown out the monitor's own
//! output.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Level used when neither `RUST_LOG` nor a command line level is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

const QUIET_DEPENDENCIES: &[&str] = &["tungstenite", "tokio_tungstenite", "hyper", "reqwest"];

/// Builds the filter directive for `level`, quieting noisy dependencies
pub fn filter_directive(level: &str) -> String {
	let mut directive = level.to_string();
	for dependency in QUIET_DEPENDENCIES {
		directive.push_str(&format!(",{}=warn", dependency));
	}
	directive
}

/// Setup logging to stdout
pub fn setup_logging(
	level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(level, std::io::stdout)
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	level: Option<&str>,
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env().or_else(|_| {
		EnvFilter::try_new(filter_directive(level.unwrap_or(DEFAULT_LOG_LEVEL)))
	})?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(true)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
