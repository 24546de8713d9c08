//! Event Publisher Implementation
//!
//! 全局广播通道：异步完成（取章落地、朗读生命周期）推给已连接的客户端。
//! 单用户会话，不需要按会话分通道。

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

/// WebSocket 事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum WsEvent {
    /// 一章经文落地
    VersesReady {
        book: String,
        chapter: u32,
        verses: usize,
    },
    /// 朗读开始
    NarrationStarted,
    /// 朗读完整播完
    NarrationFinished,
    /// 网关未返回音频载荷
    NarrationUnavailable,
    /// 朗读失败（合成 / 解码 / 设备）
    NarrationFailed { error: String },
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<WsEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅全局事件
    pub fn subscribe(&self) -> broadcast::Receiver<WsEvent> {
        self.channel.subscribe()
    }

    /// 发布一章经文落地事件
    pub fn publish_verses_ready(&self, book: &str, chapter: u32, verses: usize) {
        self.publish(WsEvent::VersesReady {
            book: book.to_string(),
            chapter,
            verses,
        });
    }

    /// 发布朗读开始事件
    pub fn publish_narration_started(&self) {
        self.publish(WsEvent::NarrationStarted);
    }

    /// 发布朗读完成事件
    pub fn publish_narration_finished(&self) {
        self.publish(WsEvent::NarrationFinished);
    }

    /// 发布"无音频可用"事件
    pub fn publish_narration_unavailable(&self) {
        self.publish(WsEvent::NarrationUnavailable);
    }

    /// 发布朗读失败事件
    pub fn publish_narration_failed(&self, error: &str) {
        self.publish(WsEvent::NarrationFailed {
            error: error.to_string(),
        });
    }

    fn publish(&self, event: WsEvent) {
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(error = %e, "Failed to publish event (no receivers)");
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();

        publisher.publish_verses_ready("Genesis", 1, 20);

        match rx.recv().await.unwrap() {
            WsEvent::VersesReady {
                book,
                chapter,
                verses,
            } => {
                assert_eq!(book, "Genesis");
                assert_eq!(chapter, 1);
                assert_eq!(verses, 20);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_publish_without_receivers_is_noop() {
        let publisher = EventPublisher::new();
        publisher.publish_narration_finished();
    }
}
