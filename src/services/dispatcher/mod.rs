//! Alert dispatching.
//!
//! Consumes detected transactions from the fan-in queue and turns each one
//! into notifications: fetch, normalize, deliver.

mod error;
mod queue;
mod service;

pub use error::DispatchError;
pub use queue::{event_queue, EventReceiver, EventSender};
pub use service::{AlertDispatcher, ChainRoute};
