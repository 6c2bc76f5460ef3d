use cosmos_tx_monitor::bootstrap::{load_config, Orchestrator};
use serde_json::json;
use std::{io::Write, time::Duration};
use tempfile::NamedTempFile;
use tokio::sync::watch;

use crate::integration::mocks::{send_transaction_json, tx_frame, MockNode, Session};

const ADDRESS: &str = "cosmos1sender";

fn write_config(contents: &str) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

#[test]
fn test_load_config_with_legacy_keys() {
	let file = write_config(
		&json!({
			"alerting": {
				"slack": {"enable": true, "webhook_url": "https://hooks.slack.com/services/x"},
				"discord": {"enable": false, "webhook_url": ""},
				"telegram": {"enable": false, "bot_token": "", "chat_id": ""}
			},
			"chains": {
				"cosmoshub": {
					"rpc": "https://rpc.cosmos.example",
					"api": "https://lcd.cosmos.example",
					"explorerURL": "https://www.mintscan.io/cosmos/tx/",
					"wallet_Info": [
						{"wallet_address": "cosmos1a"},
						{"wallet_address": "cosmos1b"}
					]
				}
			}
		})
		.to_string(),
	);

	let config = load_config(file.path()).unwrap();
	let targets = config.watch_targets();
	assert_eq!(targets.len(), 2);
	assert_eq!(targets[0].streaming_endpoint, "wss://rpc.cosmos.example/websocket");
	assert_eq!(targets[1].address, "cosmos1b");
	assert!(config.alerting.slack.enable);
}

#[test]
fn test_load_config_rejects_chain_without_wallets() {
	let file = write_config(
		&json!({
			"chains": {
				"cosmoshub": {
					"rpc": "https://rpc.cosmos.example",
					"api": "https://lcd.cosmos.example",
					"explorer_url": "https://www.mintscan.io/cosmos/tx/",
					"wallet_info": []
				}
			}
		})
		.to_string(),
	);

	let error = load_config(file.path()).unwrap_err();
	assert!(error.to_string().contains("no wallets"));
}

#[tokio::test]
async fn test_transfer_flows_from_subscription_to_slack() {
	let mut node =
		MockNode::start(vec![Session::open(vec![tx_frame(ADDRESS, "E2EHASH")])]).await;

	let mut rest = mockito::Server::new_async().await;
	let rest_mock = rest
		.mock("GET", "/cosmos/tx/v1beta1/txs/E2EHASH")
		.with_status(200)
		.with_body(send_transaction_json("E2EHASH", "2500000"))
		.expect(1)
		.create_async()
		.await;

	let mut slack = mockito::Server::new_async().await;
	let slack_mock = slack
		.mock("POST", "/hook")
		.match_body(mockito::Matcher::Regex(
			r"https://www\.mintscan\.io/cosmos/tx/E2EHASH".to_string(),
		))
		.with_status(200)
		.expect(1)
		.create_async()
		.await;

	let file = write_config(
		&json!({
			"alerting": {
				"slack": {"enable": true, "webhook_url": format!("{}/hook", slack.url())}
			},
			"chains": {
				"cosmoshub": {
					"rpc": node.url,
					"api": rest.url(),
					"explorer_url": "https://www.mintscan.io/cosmos/tx/",
					"wallet_info": [{"wallet_address": ADDRESS}]
				}
			},
			"transport": {"request_timeout_ms": 5000}
		})
		.to_string(),
	);

	let config = load_config(file.path()).unwrap();
	let orchestrator = Orchestrator::from_config(&config).unwrap();
	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	let handle = tokio::spawn(orchestrator.run(shutdown_rx));

	let (_, request, _) = tokio::time::timeout(Duration::from_secs(10), node.next_subscription())
		.await
		.unwrap();
	assert!(request.contains("transfer.sender='cosmos1sender'"));

	tokio::time::timeout(Duration::from_secs(10), async {
		while !slack_mock.matched_async().await {
			tokio::time::sleep(Duration::from_millis(20)).await;
		}
	})
	.await
	.expect("alert never reached slack");

	shutdown_tx.send(true).unwrap();
	tokio::time::timeout(Duration::from_secs(10), handle)
		.await
		.expect("monitor did not stop")
		.unwrap();

	rest_mock.assert_async().await;
	slack_mock.assert_async().await;
}
