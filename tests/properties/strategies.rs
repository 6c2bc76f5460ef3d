use cosmos_tx_monitor::models::{Coin, Message, RawTransaction};
use proptest::{option, prelude::*};
use serde_json::{json, Map, Value};

const MAX_MESSAGES: usize = 6;

const TYPE_URLS: &[&str] = &[
	"/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
	"/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission",
	"/cosmos.staking.v1beta1.MsgDelegate",
	"/ibc.applications.transfer.v1.MsgTransfer",
	"/cosmos.gov.v1beta1.MsgVote",
	"/cosmos.bank.v1beta1.MsgSend",
	"/ibc.core.client.v1.MsgUpdateClient",
	"/ibc.core.channel.v1.MsgRecvPacket",
	"/ibc.core.channel.v1.MsgAcknowledgement",
	"/cosmos.authz.v1beta1.MsgExec",
];

const FIELDS: &[&str] = &[
	"delegator_address",
	"validator_address",
	"from_address",
	"to_address",
	"sender",
	"receiver",
	"proposal_id",
	"voter",
	"signer",
];

pub fn denom_strategy() -> impl Strategy<Value = String> {
	prop::sample::select(vec!["uatom", "uosmo", "ujuno", "stake", "ibc/27394FB092D2ECCD"])
		.prop_map(str::to_string)
}

pub fn coin_strategy() -> impl Strategy<Value = Coin> {
	("[0-9]{1,12}", denom_strategy()).prop_map(|(amount, denom)| Coin::new(amount, denom))
}

/// Messages of any supported or unknown type with a random subset of fields
pub fn message_strategy() -> impl Strategy<Value = Message> {
	(
		prop::sample::select(TYPE_URLS.to_vec()),
		prop::collection::vec(
			(prop::sample::select(FIELDS.to_vec()), option::of("[a-z0-9]{0,12}")),
			0..FIELDS.len(),
		),
		option::of(coin_strategy()),
	)
		.prop_map(|(type_url, fields, coin)| {
			let mut object = Map::new();
			object.insert("@type".to_string(), json!(type_url));
			for (key, value) in fields {
				if let Some(value) = value {
					object.insert(key.to_string(), json!(value));
				}
			}
			if let Some(coin) = coin {
				let coin = json!({"denom": coin.denom, "amount": coin.amount});
				let amount = if type_url.ends_with("MsgDelegate") {
					coin.clone()
				} else {
					json!([coin.clone()])
				};
				object.insert("amount".to_string(), amount);
				object.insert("token".to_string(), coin);
			}
			serde_json::from_value::<Message>(Value::Object(object)).unwrap()
		})
}

pub fn transaction_strategy() -> impl Strategy<Value = RawTransaction> {
	(
		prop::collection::vec(message_strategy(), 0..MAX_MESSAGES),
		option::of(coin_strategy()),
		0u32..3,
		"[A-F0-9]{64}",
	)
		.prop_map(|(messages, fee, code, hash)| {
			let mut raw = RawTransaction::default();
			raw.tx.body.messages = messages;
			raw.tx.auth_info.fee.amount = fee.into_iter().collect();
			raw.tx_response.code = code;
			raw.tx_response.raw_log = "failed".to_string();
			raw.tx_response.txhash = hash;
			raw
		})
}
