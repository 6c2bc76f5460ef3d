use cosmos_tx_monitor::{
	models::{TxEvent, WatchTarget},
	services::watcher::{ConnectionState, SubscriptionWatcher, WatcherConfig},
};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::{
	sync::{mpsc, watch},
	task::JoinHandle,
	time::timeout,
};
use tokio_tungstenite::tungstenite::Message;

use crate::integration::mocks::{tx_frame, MockNode, Session};

const ADDRESS: &str = "cosmos1watched";
const RECONNECT: Duration = Duration::from_millis(200);
const WAIT: Duration = Duration::from_secs(10);

fn target(url: &str) -> WatchTarget {
	WatchTarget {
		chain_name: "cosmoshub".to_string(),
		streaming_endpoint: url.to_string(),
		rest_endpoint: "http://127.0.0.1:1".to_string(),
		explorer_url: "https://www.mintscan.io/cosmos/tx/".to_string(),
		address: ADDRESS.to_string(),
	}
}

struct Running {
	events: mpsc::UnboundedReceiver<TxEvent>,
	state: watch::Receiver<ConnectionState>,
	shutdown: watch::Sender<bool>,
	handle: JoinHandle<()>,
}

impl Running {
	async fn stop(self) {
		self.shutdown.send(true).unwrap();
		timeout(WAIT, self.handle)
			.await
			.expect("watcher did not stop")
			.unwrap();
	}
}

fn spawn_watcher(url: &str) -> Running {
	let (tx, events) = mpsc::unbounded_channel();
	let watcher = SubscriptionWatcher::new(
		target(url),
		WatcherConfig::new().with_reconnect_interval(RECONNECT),
		tx,
	);
	let state = watcher.state();
	let (shutdown, shutdown_rx) = watch::channel(false);
	let handle = tokio::spawn(async move { watcher.run(shutdown_rx).await });

	Running {
		events,
		state,
		shutdown,
		handle,
	}
}

#[tokio::test]
async fn test_subscribe_request_format() {
	let mut node = MockNode::start(vec![]).await;
	let running = spawn_watcher(&node.url);

	let (_, request, _) = timeout(WAIT, node.next_subscription()).await.unwrap();
	let request: Value = serde_json::from_str(&request).unwrap();
	assert_eq!(
		request,
		json!({
			"jsonrpc": "2.0",
			"method": "subscribe",
			"params": ["transfer.sender='cosmos1watched'"],
			"id": 1
		})
	);

	running.stop().await;
}

#[tokio::test]
async fn test_transaction_hashes_are_forwarded_in_order() {
	let mut node = MockNode::start(vec![Session::open(vec![
		Message::Text(r#"{"jsonrpc":"2.0","id":1,"result":{}}"#.into()),
		tx_frame(ADDRESS, "AAAA"),
		Message::Text("definitely not json".into()),
		tx_frame(ADDRESS, "BBBB"),
	])])
	.await;
	let mut running = spawn_watcher(&node.url);
	timeout(WAIT, node.next_subscription()).await.unwrap();

	let first = timeout(WAIT, running.events.recv()).await.unwrap().unwrap();
	let second = timeout(WAIT, running.events.recv()).await.unwrap().unwrap();
	assert_eq!(first, TxEvent::new("cosmoshub", "AAAA"));
	assert_eq!(second, TxEvent::new("cosmoshub", "BBBB"));
	assert!(running.events.try_recv().is_err());
	assert_eq!(*running.state.borrow(), ConnectionState::Subscribed);

	running.stop().await;
}

#[tokio::test]
async fn test_reconnects_after_each_disconnect() {
	let disconnects = 3;
	let mut node = MockNode::start(vec![Session::closing(vec![]); disconnects]).await;
	let running = spawn_watcher(&node.url);

	let mut subscriptions = Vec::new();
	for _ in 0..=disconnects {
		subscriptions.push(timeout(WAIT, node.next_subscription()).await.unwrap());
	}

	let first_request = &subscriptions[0].1;
	for (expected, (connection, request, _)) in subscriptions.iter().enumerate() {
		assert_eq!(*connection, expected);
		assert_eq!(request, first_request);
	}
	for pair in subscriptions.windows(2) {
		let gap = pair[1].2.duration_since(pair[0].2);
		assert!(gap >= RECONNECT, "reconnected after {:?}", gap);
	}

	running.stop().await;
}

#[tokio::test]
async fn test_events_resume_after_reconnect() {
	let mut node = MockNode::start(vec![
		Session::closing(vec![tx_frame(ADDRESS, "BEFORE")]),
		Session::open(vec![tx_frame(ADDRESS, "AFTER")]),
	])
	.await;
	let mut running = spawn_watcher(&node.url);

	let before = timeout(WAIT, running.events.recv()).await.unwrap().unwrap();
	let after = timeout(WAIT, running.events.recv()).await.unwrap().unwrap();
	assert_eq!(before.tx_hash, "BEFORE");
	assert_eq!(after.tx_hash, "AFTER");

	let (connection, _, _) = timeout(WAIT, node.next_subscription()).await.unwrap();
	assert_eq!(connection, 0);

	running.stop().await;
}

#[tokio::test]
async fn test_ping_is_answered() {
	let mut node =
		MockNode::start(vec![Session::open(vec![Message::Ping(b"hb".to_vec().into())])]).await;
	let running = spawn_watcher(&node.url);

	let payload = timeout(WAIT, node.next_pong()).await.unwrap();
	assert_eq!(payload, b"hb".to_vec());

	running.stop().await;
}

#[tokio::test]
async fn test_unreachable_node_is_retried_until_shutdown() {
	let running = spawn_watcher("ws://127.0.0.1:1/websocket");
	tokio::time::sleep(RECONNECT * 3).await;

	assert!(!running.handle.is_finished());
	assert_ne!(*running.state.borrow(), ConnectionState::Subscribed);

	running.stop().await;
}

#[tokio::test]
async fn test_watcher_stops_when_queue_is_gone() {
	let node = MockNode::start(vec![Session::open(vec![tx_frame(ADDRESS, "ORPHAN")])]).await;
	let (tx, events) = mpsc::unbounded_channel();
	drop(events);

	let watcher = SubscriptionWatcher::new(
		target(&node.url),
		WatcherConfig::new().with_reconnect_interval(RECONNECT),
		tx,
	);
	let (_shutdown, shutdown_rx) = watch::channel(false);

	timeout(WAIT, watcher.run(shutdown_rx))
		.await
		.expect("watcher kept running without a consumer");
	assert_eq!(*watcher.state().borrow(), ConnectionState::Disconnected);
}
