//! Fan-in queue between watchers and the dispatcher.
//!
//! Every watcher holds a clone of the sender; the dispatcher owns the only
//! receiver. Events from one watcher arrive in the order they were sent.

use tokio::sync::mpsc;

use crate::models::TxEvent;

pub type EventSender = mpsc::UnboundedSender<TxEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<TxEvent>;

/// Creates the shared event queue
pub fn event_queue() -> (EventSender, EventReceiver) {
	mpsc::unbounded_channel()
}
