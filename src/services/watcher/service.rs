//! Subscription watcher implementation.
//!
//! A watcher owns one websocket subscription for one (chain, address) pair.
//! It connects, sends the `transfer.sender` subscribe request, and pushes a
//! [`TxEvent`] for every frame that carries a `tx.hash`. When the connection
//! drops or cannot be established it waits the fixed reconnect interval and
//! starts over, forever, until shutdown is signalled.

use futures_util::{SinkExt, StreamExt};
use tokio::{
	net::TcpStream,
	sync::{mpsc, watch},
	time::{sleep, timeout},
};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::{
	models::{SubscribeRequest, SubscriptionMessage, TxEvent, WatchTarget},
	services::watcher::{ConnectionState, WatcherConfig, WatcherError},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Resolves once shutdown has been signalled
///
/// A dropped sender never resolves: without a shutdown source the watcher
/// runs for the lifetime of the process.
pub(crate) async fn wait_for_shutdown(shutdown: &mut watch::Receiver<bool>) {
	loop {
		if *shutdown.borrow_and_update() {
			return;
		}
		if shutdown.changed().await.is_err() {
			std::future::pending::<()>().await;
		}
	}
}

/// Websocket subscription for a single watched address
pub struct SubscriptionWatcher {
	target: WatchTarget,
	config: WatcherConfig,
	events: mpsc::UnboundedSender<TxEvent>,
	state: watch::Sender<ConnectionState>,
}

impl SubscriptionWatcher {
	/// Creates a watcher that pushes detected transactions into `events`
	pub fn new(
		target: WatchTarget,
		config: WatcherConfig,
		events: mpsc::UnboundedSender<TxEvent>,
	) -> Self {
		let (state, _) = watch::channel(ConnectionState::Disconnected);
		Self {
			target,
			config,
			events,
			state,
		}
	}

	pub fn target(&self) -> &WatchTarget {
		&self.target
	}

	/// Observes the connection state of this watcher
	pub fn state(&self) -> watch::Receiver<ConnectionState> {
		self.state.subscribe()
	}

	fn set_state(&self, state: ConnectionState) {
		self.state.send_replace(state);
	}

	/// Runs the connect/subscribe/read loop until `shutdown` turns true
	///
	/// Connection failures and disconnects are retried after the configured
	/// interval with no attempt limit. The loop only ends early when the
	/// event queue has no consumer left.
	pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
		tracing::info!(
			chain = %self.target.chain_name,
			address = %self.target.address,
			endpoint = %self.target.streaming_endpoint,
			"Starting subscription watcher"
		);

		loop {
			let session = tokio::select! {
				biased;
				_ = wait_for_shutdown(&mut shutdown) => break,
				result = self.run_session() => result,
			};
			self.set_state(ConnectionState::Disconnected);

			if let Err(e) = session {
				if !e.is_recoverable() {
					tracing::error!(
						chain = %self.target.chain_name,
						address = %self.target.address,
						error = %e,
						"Stopping subscription watcher"
					);
					return;
				}
				tracing::warn!(
					chain = %self.target.chain_name,
					address = %self.target.address,
					error = %e,
					retry_in = ?self.config.reconnect_interval,
					"Subscription lost, reconnecting"
				);
			}

			tokio::select! {
				biased;
				_ = wait_for_shutdown(&mut shutdown) => break,
				_ = sleep(self.config.reconnect_interval) => {}
			}
		}

		self.set_state(ConnectionState::Disconnected);
		tracing::info!(
			chain = %self.target.chain_name,
			address = %self.target.address,
			"Subscription watcher stopped"
		);
	}

	/// One connection lifetime: connect, subscribe, read until the stream ends
	async fn run_session(&self) -> Result<(), WatcherError> {
		let mut stream = self.connect().await?;
		self.subscribe(&mut stream).await?;
		self.set_state(ConnectionState::Subscribed);
		tracing::info!(
			chain = %self.target.chain_name,
			address = %self.target.address,
			"Subscribed to transfers"
		);

		while let Some(frame) = stream.next().await {
			match frame? {
				Message::Text(text) => self.handle_text(&text)?,
				Message::Ping(payload) => stream.send(Message::Pong(payload)).await?,
				Message::Close(frame) => {
					return Err(WatcherError::Closed(
						frame.map(|f| f.reason.to_string()).filter(|r| !r.is_empty()),
					));
				}
				_ => {}
			}
		}

		Err(WatcherError::Closed(None))
	}

	async fn connect(&self) -> Result<WsStream, WatcherError> {
		self.set_state(ConnectionState::Connecting);
		let url = self.target.streaming_endpoint.as_str();

		let (stream, _) = match self.config.connect_timeout {
			Some(limit) => timeout(limit, connect_async(url))
				.await
				.map_err(|_| WatcherError::Timeout(limit))??,
			None => connect_async(url).await?,
		};

		Ok(stream)
	}

	async fn subscribe(&self, stream: &mut WsStream) -> Result<(), WatcherError> {
		let request = SubscribeRequest::transfer_sender(&self.target.address);
		let payload = serde_json::to_string(&request)?;
		stream.send(Message::Text(payload.into())).await?;
		Ok(())
	}

	/// Forwards the transaction hash of a frame, if it has one
	///
	/// Malformed frames are logged and dropped.
	fn handle_text(&self, text: &str) -> Result<(), WatcherError> {
		let message: SubscriptionMessage = match serde_json::from_str(text) {
			Ok(message) => message,
			Err(e) => {
				tracing::warn!(
					chain = %self.target.chain_name,
					error = %WatcherError::Parse(e),
					"Dropping malformed subscription frame"
				);
				return Ok(());
			}
		};

		if let Some(error) = &message.error {
			tracing::warn!(
				chain = %self.target.chain_name,
				address = %self.target.address,
				error = %error,
				"Node returned an error for the subscription"
			);
			return Ok(());
		}

		let Some(tx_hash) = message.tx_hash() else {
			tracing::debug!(chain = %self.target.chain_name, "Frame without transaction hash");
			return Ok(());
		};

		tracing::debug!(chain = %self.target.chain_name, tx_hash, "Transaction detected");
		self.events
			.send(TxEvent::new(&self.target.chain_name, tx_hash))
			.map_err(|e| WatcherError::Send(e.to_string()))
	}
}
