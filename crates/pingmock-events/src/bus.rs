use tokio::sync::broadcast;

use crate::types::Event;

/// Fire-and-forget side-channel for accepted pings. The serve layer drains a
/// subscription into the observability sink; publishing with no subscribers
/// is not an error worth surfacing, so callers ignore the result.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> Result<(), broadcast::error::SendError<Event>> {
        self.sender.send(event).map(|_| ())
    }
}
