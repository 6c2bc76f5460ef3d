use std::path::Path;
use url::Url;

use crate::models::{ChainConfig, Config, ConfigLoader};

use super::error::ConfigError;

fn validate_url(value: &str, schemes: &[&str], what: &str) -> Result<(), String> {
	let url = Url::parse(value).map_err(|e| format!("{} '{}' is invalid: {}", what, value, e))?;
	if !schemes.contains(&url.scheme()) {
		return Err(format!(
			"{} '{}' must use one of: {}",
			what,
			value,
			schemes.join(", ")
		));
	}
	Ok(())
}

fn validate_chain(name: &str, chain: &ChainConfig) -> Result<(), String> {
	validate_url(
		&chain.rpc,
		&["http", "https", "ws", "wss"],
		&format!("Chain '{}' rpc", name),
	)?;
	validate_url(&chain.api, &["http", "https"], &format!("Chain '{}' api", name))?;

	if chain.wallet_info.is_empty() {
		return Err(format!("Chain '{}' has no wallets to watch", name));
	}
	if chain
		.wallet_info
		.iter()
		.any(|wallet| wallet.wallet_address.trim().is_empty())
	{
		return Err(format!("Chain '{}' has an empty wallet address", name));
	}
	Ok(())
}

impl ConfigLoader for Config {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(format!(
				"{} is not a JSON file",
				path.display()
			)));
		}

		let file = std::fs::File::open(path)?;
		let config: Config = serde_json::from_reader(file)?;

		// Validate the config after loading
		if let Err(validation_error) = config.validate() {
			return Err(ConfigError::validation_error(validation_error));
		}

		Ok(config)
	}

	fn validate(&self) -> Result<(), String> {
		if self.chains.is_empty() {
			return Err("At least one chain must be configured".to_string());
		}

		for (name, chain) in &self.chains {
			validate_chain(name, chain)?;
		}

		let slack = &self.alerting.slack;
		if slack.enable {
			validate_url(&slack.webhook_url, &["http", "https"], "Slack webhook_url")?;
		}

		let discord = &self.alerting.discord;
		if discord.enable {
			validate_url(
				&discord.webhook_url,
				&["http", "https"],
				"Discord webhook_url",
			)?;
		}

		let telegram = &self.alerting.telegram;
		if telegram.enable && (telegram.bot_token.is_empty() || telegram.chat_id.is_empty()) {
			return Err("Telegram requires bot_token and chat_id when enabled".to_string());
		}

		if self.transport.reconnect_interval_secs == Some(0) {
			return Err("reconnect_interval_secs must be greater than 0".to_string());
		}

		Ok(())
	}
}
