//! Core domain models for the transaction monitor.
//!
//! This module contains the fundamental data structures that represent:
//! - Chains: endpoints and watched wallets
//! - Alerting: notification channel settings
//! - Config: the root configuration and the watch targets derived from it

mod alerting;
mod chain;
mod config;

pub use alerting::{AlertingConfig, DiscordConfig, SlackConfig, TelegramConfig};
pub use chain::{ChainConfig, WalletInfo, WatchTarget};
pub use config::{Config, TransportConfig};
