//! Domain models and data structures for transaction monitoring.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `alert`: Detected transactions and the normalized alerts built from them
//! - `blockchain`: Cosmos SDK transaction and subscription formats
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Config, ChainConfig, AlertingConfig, WatchTarget)

mod alert;
mod blockchain;
mod config;
mod core;

pub use alert::{Alert, AlertAttribute, MessageDetail, TxEvent};

pub use blockchain::cosmos::{
	AuthInfo, Coin, Event, EventAttribute, Fee, Log, Message, MessageAmount, MessageType,
	Packet, RawTransaction, SubscribeRequest, SubscriptionMessage, SubscriptionResult, Tx,
	TxBody, TxResponse, TX_HASH_EVENT_KEY,
};

pub use self::core::{
	AlertingConfig, ChainConfig, Config, DiscordConfig, SlackConfig, TelegramConfig,
	TransportConfig, WalletInfo, WatchTarget,
};

pub use config::{ConfigError, ConfigLoader};
