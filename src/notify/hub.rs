//! In-process broadcast hub.
//!
//! One broadcast channel per topic, created lazily on first subscribe or
//! publish. A concrete realtime transport would subscribe here and relay
//! envelopes to its clients; tests subscribe directly.

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::broadcast;
use tracing::debug;

use crate::notify::{GameEvent, Notifier, Topic};

const CHANNEL_CAPACITY: usize = 64;

pub struct BroadcastHub {
    channels: DashMap<String, broadcast::Sender<GameEvent>>,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self {
            channels: DashMap::new(),
        }
    }

    fn sender(&self, topic: &Topic) -> broadcast::Sender<GameEvent> {
        self.channels
            .entry(topic.channel())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .clone()
    }

    pub fn subscribe(&self, topic: &Topic) -> broadcast::Receiver<GameEvent> {
        self.sender(topic).subscribe()
    }
}

impl Default for BroadcastHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for BroadcastHub {
    async fn publish(&self, topic: Topic, event: GameEvent) {
        let sender = self.sender(&topic);
        let name = event.name();
        // Err means no live subscribers; that is fine for a best-effort sink.
        let delivered = sender.send(event).unwrap_or(0);
        debug!(channel = %topic.channel(), event = name, delivered, "event published");
    }
}
