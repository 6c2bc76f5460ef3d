//! Constants for the application

/// Fixed delay between a lost or failed subscription and the next connect attempt
pub const DEFAULT_RECONNECT_INTERVAL_SECS: u64 = 60;

/// On-chain amounts are denominated in micro-units
pub const MICRO_UNIT_DIVISOR: f64 = 1_000_000.0;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Path of the transaction lookup endpoint, relative to a chain's REST API root
pub const TX_QUERY_PATH: &str = "cosmos/tx/v1beta1/txs";

/// Default Telegram Bot API root
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";
