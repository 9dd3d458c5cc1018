use super::RawNotification;
use tokio::sync::broadcast;

#[derive(Debug)]
pub struct EventHub {
    sender: broadcast::Sender<RawNotification>,
}

impl EventHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(
        &self,
        event: RawNotification,
    ) -> Result<usize, broadcast::error::SendError<RawNotification>> {
        self.sender.send(event)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RawNotification> {
        self.sender.subscribe()
    }
}
