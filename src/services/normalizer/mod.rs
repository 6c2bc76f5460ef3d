//! Transaction normalization.
//!
//! Turns a Cosmos SDK transaction envelope into a chain-agnostic [`Alert`]:
//!
//! - `amount`: micro-unit amount and denomination parsing, event amount lookup
//! - `fields`: fixed-order attribute population for messages and packets
//! - `packet`: base64 JSON packet payload decoding
//! - `service`: the `normalize` entry point
//!
//! [`Alert`]: crate::models::Alert

mod amount;
mod fields;
mod packet;
mod service;

pub use amount::{extract_denom, extract_number, resolve_event_amount, DisplayAmount};
pub use packet::decode_packet_data;
pub use service::{describe_message, normalize};
