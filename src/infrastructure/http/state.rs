//! Application State
//!
//! HTTP 层共享的应用状态：会话控制器、朗读服务、AI 网关与事件发布器

use std::sync::Arc;

use crate::application::{Narrator, OraclePort, SessionController};
use crate::infrastructure::events::EventPublisher;

/// 应用状态
pub struct AppState {
    pub controller: Arc<SessionController>,
    pub narrator: Arc<Narrator>,
    pub oracle: Arc<dyn OraclePort>,
    pub event_publisher: Arc<EventPublisher>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        controller: Arc<SessionController>,
        narrator: Arc<Narrator>,
        oracle: Arc<dyn OraclePort>,
        event_publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            controller,
            narrator,
            oracle,
            event_publisher,
        }
    }
}
