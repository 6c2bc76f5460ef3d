//! Bootstrap module for wiring the monitoring pipeline.
//!
//! Builds one [`SubscriptionWatcher`] per watched (chain, address) pair, the
//! shared fan-in queue, and the [`AlertDispatcher`] consuming it, then runs
//! them as independent tasks.
//!
//! # Tasks
//! - one task per watcher, each with its own reconnect loop
//! - one dispatcher task, the only consumer of the queue
//!
//! Every task observes the same shutdown signal. Without a signal they run
//! for the lifetime of the process.

use futures::future::join_all;
use reqwest::Client;
use std::path::Path;
use tokio::sync::watch;

use crate::{
	models::{Config, ConfigError, ConfigLoader, WatchTarget},
	services::{
		blockchain::{CosmosRestClient, TransactionFetcher},
		dispatcher::{event_queue, AlertDispatcher, EventReceiver, EventSender},
		notification::NotificationService,
		watcher::{ConnectionState, SubscriptionWatcher, WatcherConfig},
	},
};

/// Loads and validates the configuration file at `path`
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
	Config::load_from_path(path)
}

/// Creates a watcher per watch target, all feeding `events`
pub fn create_watchers(config: &Config, events: &EventSender) -> Vec<SubscriptionWatcher> {
	let watcher_config = WatcherConfig::from_transport(&config.transport);
	config
		.watch_targets()
		.into_iter()
		.map(|target| SubscriptionWatcher::new(target, watcher_config.clone(), events.clone()))
		.collect()
}

/// Watchers, queue and dispatcher of a running monitor
pub struct Orchestrator<F: TransactionFetcher + 'static> {
	watchers: Vec<SubscriptionWatcher>,
	dispatcher: AlertDispatcher<F>,
	events: EventReceiver,
}

impl Orchestrator<CosmosRestClient> {
	/// Builds the production pipeline: REST fetcher and configured notification channels
	pub fn from_config(config: &Config) -> anyhow::Result<Self> {
		let fetcher = CosmosRestClient::new(config.transport.request_timeout())?;
		let notifications = NotificationService::from_config(&config.alerting, Client::new());
		Ok(Self::new(config, fetcher, notifications))
	}
}

impl<F: TransactionFetcher + 'static> Orchestrator<F> {
	pub fn new(config: &Config, fetcher: F, notifications: NotificationService) -> Self {
		let (sender, events) = event_queue();
		let watchers = create_watchers(config, &sender);
		let dispatcher = AlertDispatcher::from_config(config, fetcher, notifications);

		Self {
			watchers,
			dispatcher,
			events,
		}
	}

	pub fn targets(&self) -> Vec<&WatchTarget> {
		self.watchers.iter().map(|w| w.target()).collect()
	}

	/// Connection state receivers, one per watcher, in target order
	pub fn connection_states(&self) -> Vec<watch::Receiver<ConnectionState>> {
		self.watchers.iter().map(|w| w.state()).collect()
	}

	/// Runs every watcher and the dispatcher until `shutdown` turns true
	pub async fn run(self, shutdown: watch::Receiver<bool>) {
		tracing::info!(watchers = self.watchers.len(), "Starting monitor");

		let mut handles = Vec::with_capacity(self.watchers.len() + 1);
		for watcher in self.watchers {
			let shutdown = shutdown.clone();
			handles.push(tokio::spawn(async move { watcher.run(shutdown).await }));
		}

		let dispatcher = self.dispatcher;
		let events = self.events;
		handles.push(tokio::spawn(async move {
			dispatcher.run(events, shutdown).await
		}));

		for result in join_all(handles).await {
			if let Err(e) = result {
				tracing::error!(error = %e, "Monitor task failed");
			}
		}

		tracing::info!("Monitor stopped");
	}
}
