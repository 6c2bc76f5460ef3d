//! Alert dispatcher implementation.
//!
//! The dispatcher is the sole consumer of the event queue. It handles one
//! event at a time, so events are processed in queue order and a slow fetch
//! delays every chain.

use std::collections::HashMap;
use tokio::sync::watch;
use tracing::instrument;

use crate::{
	models::{Alert, Config, TxEvent},
	services::{
		blockchain::TransactionFetcher,
		dispatcher::{DispatchError, EventReceiver},
		normalizer::normalize,
		notification::NotificationService,
		watcher::wait_for_shutdown,
	},
};

/// Where to look up and link transactions of one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRoute {
	pub rest_endpoint: String,
	pub explorer_url: String,
}

/// Fetches, normalizes and delivers detected transactions
pub struct AlertDispatcher<F: TransactionFetcher> {
	routes: HashMap<String, ChainRoute>,
	fetcher: F,
	notifications: NotificationService,
}

impl<F: TransactionFetcher> AlertDispatcher<F> {
	pub fn new(
		routes: HashMap<String, ChainRoute>,
		fetcher: F,
		notifications: NotificationService,
	) -> Self {
		Self {
			routes,
			fetcher,
			notifications,
		}
	}

	/// Creates a dispatcher routing every configured chain
	pub fn from_config(config: &Config, fetcher: F, notifications: NotificationService) -> Self {
		let routes = config
			.chains
			.iter()
			.map(|(name, chain)| {
				(
					name.clone(),
					ChainRoute {
						rest_endpoint: chain.rest_url().to_string(),
						explorer_url: chain.explorer_url.clone(),
					},
				)
			})
			.collect();

		Self::new(routes, fetcher, notifications)
	}

	/// Consumes events until the queue closes or `shutdown` turns true
	///
	/// Failures are logged per event and never stop the loop.
	pub async fn run(&self, mut events: EventReceiver, mut shutdown: watch::Receiver<bool>) {
		tracing::info!(
			chains = self.routes.len(),
			channels = ?self.notifications.channels(),
			"Alert dispatcher started"
		);

		loop {
			let event = tokio::select! {
				biased;
				_ = wait_for_shutdown(&mut shutdown) => break,
				event = events.recv() => event,
			};

			let Some(event) = event else {
				tracing::info!("Event queue closed");
				break;
			};

			if let Err(e) = self.dispatch(&event).await {
				tracing::error!(
					chain = %event.chain_name,
					tx_hash = %event.tx_hash,
					error = %e,
					"Dropping transaction event"
				);
			}
		}

		tracing::info!("Alert dispatcher stopped");
	}

	/// Processes one event end to end
	///
	/// Returns the alert that was handed to the notification channels.
	pub async fn dispatch(&self, event: &TxEvent) -> Result<Alert, DispatchError> {
		let alert = self.build_alert(event).await?;
		let delivered = self.notifications.send_all(&alert).await;
		tracing::debug!(
			tx_hash = %alert.tx_hash,
			delivered,
			channels = self.notifications.len(),
			"Alert dispatched"
		);
		Ok(alert)
	}

	/// Fetches and normalizes the transaction of `event`, without notifying
	#[instrument(skip(self, event), fields(chain = %event.chain_name, tx_hash = %event.tx_hash))]
	pub async fn build_alert(&self, event: &TxEvent) -> Result<Alert, DispatchError> {
		let route = self
			.routes
			.get(&event.chain_name)
			.ok_or_else(|| DispatchError::UnknownChain(event.chain_name.clone()))?;

		let transaction = self
			.fetcher
			.fetch(&route.rest_endpoint, &event.tx_hash)
			.await?;

		let mut alert = normalize(&transaction);
		alert.chain_name = event.chain_name.clone();
		alert.explorer_url = route.explorer_url.clone();
		Ok(alert)
	}
}
