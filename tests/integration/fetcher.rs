use cosmos_tx_monitor::{
	models::MessageType,
	services::blockchain::{CosmosRestClient, FetchError, TransactionFetcher},
};
use mockito::Matcher;
use std::time::Duration;

use crate::integration::mocks::send_transaction_json;

#[tokio::test]
async fn test_fetch_send_transaction() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/cosmos/tx/v1beta1/txs/ABC123")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(send_transaction_json("ABC123", "2500000"))
		.expect(1)
		.create_async()
		.await;

	let client = CosmosRestClient::new(Some(Duration::from_secs(5))).unwrap();
	let transaction = client
		.fetch(&format!("{}/", server.url()), "ABC123")
		.await
		.unwrap();

	assert_eq!(transaction.tx_response.txhash, "ABC123");
	assert_eq!(transaction.tx_response.height, "19000000");
	assert!(!transaction.is_failed());
	assert_eq!(transaction.tx.body.messages.len(), 1);
	assert_eq!(transaction.tx.body.messages[0].message_type, MessageType::Send);
	assert_eq!(transaction.tx.auth_info.fee.amount[0].amount, "5000");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_under_rest_prefix() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", Matcher::Exact("/lcd/cosmos/tx/v1beta1/txs/ABC123".to_string()))
		.with_status(200)
		.with_body(send_transaction_json("ABC123", "1"))
		.expect(1)
		.create_async()
		.await;

	let client = CosmosRestClient::new(None).unwrap();
	let endpoint = format!("{}/lcd", server.url());
	assert!(client.fetch(&endpoint, "ABC123").await.is_ok());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_server_error() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/cosmos/tx/v1beta1/txs/ABC123")
		.with_status(503)
		.expect(1)
		.create_async()
		.await;

	let client = CosmosRestClient::new(None).unwrap();
	let error = client.fetch(&server.url(), "ABC123").await.unwrap_err();

	assert!(matches!(error, FetchError::Status { status: 503, .. }));
	assert!(error.to_string().contains("503"));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_is_not_retried() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/cosmos/tx/v1beta1/txs/ABC123")
		.with_status(500)
		.expect(1)
		.create_async()
		.await;

	let client = CosmosRestClient::new(None).unwrap();
	assert!(client.fetch(&server.url(), "ABC123").await.is_err());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_times_out() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/cosmos/tx/v1beta1/txs/SLOW")
		.with_status(200)
		.with_chunked_body(|writer| {
			std::thread::sleep(Duration::from_secs(2));
			writer.write_all(b"{}")
		})
		.create_async()
		.await;

	let client = CosmosRestClient::new(Some(Duration::from_millis(200))).unwrap();
	let error = client.fetch(&server.url(), "SLOW").await.unwrap_err();
	assert!(matches!(error, FetchError::Network(_)));
}
