//! Cosmos SDK data structures.
//!
//! - `message`: transaction messages, their type tag and amount shapes
//! - `transaction`: the REST transaction envelope (body, fee, logs, events)
//! - `subscription`: websocket subscribe request and inbound frames

mod message;
mod subscription;
mod transaction;

pub use message::{Coin, Message, MessageAmount, MessageType, Packet};
pub use subscription::{
	SubscribeRequest, SubscriptionMessage, SubscriptionResult, TX_HASH_EVENT_KEY,
};
pub use transaction::{
	AuthInfo, Event, EventAttribute, Fee, Log, RawTransaction, Tx, TxBody, TxResponse,
};
